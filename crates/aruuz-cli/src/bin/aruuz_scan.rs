// aruuz-scan: identify the meter of Urdu verse.
//
// Reads lines from the arguments or from stdin (one misra per line,
// blank line separates couplets) and prints one JSON object per scan
// result.
//
// Usage:
//   aruuz-scan [-l LEXICON] [LINE...]
//
// Options:
//   -l, --lexicon PATH   SQLite lexicon database
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use aruuz_core::result::{LineResult, ScanOptions};
use aruuz_ur::ScanHandle;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) = aruuz_cli::parse_lexicon_path(&args);

    if aruuz_cli::wants_help(&args) {
        println!("aruuz-scan: identify the meter (bahr) of Urdu verse.");
        println!();
        println!("Usage: aruuz-scan [-l LEXICON] [LINE...]");
        println!();
        println!("If LINE arguments are given, they are scanned as one couplet.");
        println!("Otherwise lines are read from stdin; a blank line closes a");
        println!("couplet and starts a new one.");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   SQLite lexicon database");
        println!("  -h, --help           Print this help");
        return;
    }

    let handle = aruuz_cli::load_handle(lexicon_path.as_deref())
        .unwrap_or_else(|e| aruuz_cli::fatal(&e));

    let lines: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if lines.is_empty() {
        let stdin = io::stdin();
        let mut couplet: Vec<String> = Vec::new();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            if line.trim().is_empty() {
                scan_and_print(&handle, &couplet, &mut out);
                couplet.clear();
            } else {
                couplet.push(line);
            }
        }
        scan_and_print(&handle, &couplet, &mut out);
    } else {
        scan_and_print(&handle, &lines, &mut out);
    }
}

fn scan_and_print(
    handle: &ScanHandle,
    couplet: &[String],
    out: &mut io::BufWriter<io::StdoutLock<'_>>,
) {
    if couplet.is_empty() {
        return;
    }
    let refs: Vec<&str> = couplet.iter().map(String::as_str).collect();
    let results: Vec<LineResult> = handle.scan(&refs, &ScanOptions::default());
    for result in &results {
        match serde_json::to_string(result) {
            Ok(json) => {
                let _ = writeln!(out, "{json}");
            }
            Err(e) => eprintln!("error serializing result: {e}"),
        }
    }
    let _ = out.flush();
}
