//! Shared vocabulary for the aruuz scansion engine.
//!
//! This crate holds everything both the meter catalogue and the Urdu
//! engine need to agree on:
//!
//! - [`symbols`] -- the syllable-weight alphabet (`=`, `-`, `x`) and code
//!   string helpers
//! - [`character`] -- Urdu/Arabic character classification, diacritic
//!   tables and orthographic folds
//! - [`word`] -- the [`word::Word`] and [`word::Line`] data model carried
//!   through the pipeline
//! - [`result`] -- the stable [`result::LineResult`] output type and scan
//!   options

pub mod character;
pub mod result;
pub mod symbols;
pub mod word;
