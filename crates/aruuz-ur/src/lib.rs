//! Urdu prosodic scansion: identify the classical meter (bahr) of verse.
//!
//! The pipeline, per line: [`text`] cleans and tokenizes; the
//! [`scansion`] layer gives every word its candidate weight codes
//! (lexicon first, length heuristics as fallback) and applies the
//! inter-word prosodic rules; [`tree`] searches the resulting choice
//! space against the meter catalogue; [`matcher`] turns surviving paths
//! into results; [`scoring`] elects the dominant meter across the
//! couplet. [`handle::ScanHandle`] ties it together:
//!
//! ```no_run
//! use aruuz_ur::handle::ScanHandle;
//! use aruuz_core::result::ScanOptions;
//!
//! let engine = ScanHandle::new(None)?;
//! let results = engine.scan(
//!     &["مفاعیلن مفاعیلن مفاعیلن مفاعیلن"],
//!     &ScanOptions::default(),
//! );
//! for r in &results {
//!     println!("{}: {}", r.meter_name, r.full_code);
//! }
//! # Ok::<(), aruuz_meters::CatalogueError>(())
//! ```

pub mod handle;
pub mod lexicon;
pub mod matcher;
pub mod scansion;
pub mod scoring;
pub mod text;
pub mod tree;

pub use handle::ScanHandle;
pub use lexicon::{Lexicon, LexiconError, MemoryLexicon, SqliteLexicon};

// Re-exported so embedders need only this crate for the common path.
pub use aruuz_core::result::{LineResult, ScanOptions, UNMATCHED};
