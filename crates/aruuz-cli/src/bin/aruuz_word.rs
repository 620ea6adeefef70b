// aruuz-word: show the candidate weight codes of single words.
//
// Reads words from the arguments or from stdin (one per line) and
// prints each word's candidate codes with the notes explaining where
// they came from.
//
// Usage:
//   aruuz-word [-l LEXICON] [WORD...]

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) = aruuz_cli::parse_lexicon_path(&args);

    if aruuz_cli::wants_help(&args) {
        println!("aruuz-word: show candidate weight codes for Urdu words.");
        println!();
        println!("Usage: aruuz-word [-l LEXICON] [WORD...]");
        println!();
        println!("If WORD arguments are given, each is analyzed.");
        println!("Otherwise words are read from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   SQLite lexicon database");
        println!("  -h, --help           Print this help");
        return;
    }

    let handle = aruuz_cli::load_handle(lexicon_path.as_deref())
        .unwrap_or_else(|e| aruuz_cli::fatal(&e));

    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let print_word = |token: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let word = handle.scan_word(token);
        if word.codes.is_empty() {
            let _ = writeln!(out, "{token}: (no code)");
        } else {
            let _ = writeln!(out, "{token}: {}", word.codes.join(" "));
        }
        for note in word.explain.base.iter().chain(word.explain.prosody.iter()) {
            let _ = writeln!(out, "  {note}");
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            print_word(token, &mut out);
        }
    } else {
        for word in &words {
            print_word(word, &mut out);
        }
    }
}
