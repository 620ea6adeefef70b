// aruuz-cli: shared utilities for the command line tools.

use std::path::PathBuf;
use std::process;

use aruuz_ur::{ScanHandle, SqliteLexicon};

/// Lexicon database file name.
const LEXICON_DB: &str = "lexicon.db";

/// Locate a lexicon database and build a [`ScanHandle`].
///
/// Search order:
/// 1. `lexicon_path` argument (if provided)
/// 2. `ARUUZ_LEXICON` environment variable
/// 3. `~/.aruuz/lexicon.db`
/// 4. `lexicon.db` in the current working directory
///
/// When no database is found the engine runs heuristics-only; an
/// explicitly named database that fails to open is an error.
pub fn load_handle(lexicon_path: Option<&str>) -> Result<ScanHandle, String> {
    if let Some(path) = lexicon_path {
        let lexicon = SqliteLexicon::open(path)
            .map_err(|e| format!("failed to open lexicon {path}: {e}"))?;
        return ScanHandle::new(Some(Box::new(lexicon))).map_err(|e| e.to_string());
    }

    for candidate in default_lexicon_paths() {
        if candidate.is_file() {
            if let Ok(lexicon) = SqliteLexicon::open(&candidate.to_string_lossy()) {
                return ScanHandle::new(Some(Box::new(lexicon))).map_err(|e| e.to_string());
            }
        }
    }

    ScanHandle::new(None).map_err(|e| e.to_string())
}

fn default_lexicon_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(env_path) = std::env::var("ARUUZ_LEXICON") {
        paths.push(PathBuf::from(env_path));
    }
    if let Some(home) = std::env::var("HOME").ok().map(PathBuf::from) {
        paths.push(home.join(".aruuz").join(LEXICON_DB));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LEXICON_DB));
    }
    paths
}

/// Parse a `--lexicon=PATH` or `-l PATH` argument from command line
/// args. Returns `(lexicon_path, remaining_args)`.
pub fn parse_lexicon_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut lexicon_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--lexicon=") {
            lexicon_path = Some(val.to_string());
        } else if arg == "--lexicon" || arg == "-l" {
            if i + 1 < args.len() {
                lexicon_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (lexicon_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
