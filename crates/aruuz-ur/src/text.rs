// Line cleaning and tokenization.

use aruuz_core::word::{Line, Word};

/// Characters deleted outright: Latin and Urdu punctuation, honorific
/// signs, and zero-width/bidi controls.
const STRIP_CHARS: &[char] = &[
    ',', '"', '*', '\'', '-', '?', '!', '\u{0614}', '؟', '\u{2018}', '(', ')', '.', ':', '=',
    '\u{0612}', '\u{060E}', '\u{0611}', '\u{0613}', '\u{FDFD}', '\u{FDFA}', '\u{2019}',
    '\u{200B}', '\u{200C}', '\u{200D}', '\u{200E}', '\u{200F}', '\u{FEFF}', '\u{202A}',
    '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}',
];

/// Characters replaced by a space: the Urdu comma and sentence/clause
/// separators act as token boundaries, not as joiners.
const SEPARATOR_CHARS: &[char] = &['،', '۔', '؛', ';'];

/// Clean a line of verse: remove punctuation and invisible controls,
/// turn sentence separators into spaces, and collapse whitespace runs.
/// Idempotent.
pub fn clean_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        if STRIP_CHARS.contains(&c) {
            continue;
        }
        if SEPARATOR_CHARS.contains(&c) || c.is_whitespace() {
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    let collapsed: Vec<&str> = out.split_whitespace().collect();
    collapsed.join(" ")
}

/// Split a cleaned line into surface tokens.
///
/// Besides whitespace, a token ending in the fused cluster `ن` + `کہ`
/// (e.g. کیونکہ، چونکہ، حالانکہ) is split at the noon boundary, since the
/// two halves scan as separate words.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for tok in line.split_whitespace() {
        let chars: Vec<char> = tok.chars().collect();
        let n = chars.len();
        if n >= 4 && chars[n - 3] == 'ن' && chars[n - 2] == 'ک' && chars[n - 1] == 'ہ' {
            tokens.push(chars[..n - 2].iter().collect());
            tokens.push(chars[n - 2..].iter().collect());
        } else {
            tokens.push(tok.to_string());
        }
    }
    tokens
}

/// Build a [`Line`] from raw input text: clean, tokenize, and wrap each
/// token in a [`Word`] (which applies the orthographic folds). An input
/// with no surviving tokens produces an empty line.
pub fn line_from_text(text: &str) -> Line {
    let cleaned = clean_line(text);
    let words = tokenize(&cleaned)
        .iter()
        .map(|t| Word::new(t))
        .filter(|w| !w.surface.is_empty())
        .collect();
    Line {
        original: text.to_string(),
        words,
    }
}
