//! Text cleanup for extracted and OCR'd content.
//!
//! Extraction output carries control characters, ragged whitespace, and
//! the usual OCR digit confusions. These helpers scrub a text block before
//! it enters the document model. OCR output is otherwise treated as an
//! opaque string; nothing here improves recognition accuracy.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CONTROL_CHARS: Regex =
        Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref DIGIT_BAR_DIGIT: Regex = Regex::new(r"(\d)\s*[Il|]\s*(\d)").unwrap();
    static ref DIGIT_OH_DIGIT: Regex = Regex::new(r"(\d)\s*[Oo]\s*(\d)").unwrap();
    static ref HARD_WHITESPACE: Regex = Regex::new(r"[\t\r\x0B\x0C]+").unwrap();
    static ref SPACE_RUN: Regex = Regex::new(r" +").unwrap();
    static ref NEWLINE_RUN: Regex = Regex::new(r"\n+").unwrap();
}

/// Clean a block of extracted text.
///
/// Strips control characters, collapses whitespace runs to single spaces,
/// applies the common OCR digit confusions, and trims the result.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = CONTROL_CHARS.replace_all(text, "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    let text = fix_ocr_confusions(&text);

    text.trim().to_string()
}

/// Fix common OCR character confusions between digits.
///
/// `I`, `l`, and `|` between digits are read as `1`; `O` and `o` between
/// digits are read as `0`.
pub fn fix_ocr_confusions(text: &str) -> String {
    let text = DIGIT_BAR_DIGIT.replace_all(text, "${1}1${2}");
    let text = DIGIT_OH_DIGIT.replace_all(&text, "${1}0${2}");
    text.into_owned()
}

/// Normalize whitespace without collapsing line structure.
///
/// Tabs, carriage returns, and vertical whitespace become single spaces;
/// space runs and newline runs collapse to one.
pub fn normalize_whitespace(text: &str) -> String {
    let text = HARD_WHITESPACE.replace_all(text, " ");
    let text = SPACE_RUN.replace_all(&text, " ");
    let text = NEWLINE_RUN.replace_all(&text, "\n");
    text.trim().to_string()
}

/// Check whether text is meaningful rather than extraction garbage.
///
/// Text shorter than `min_length` (after trimming) is not meaningful, and
/// neither is text where less than half of the non-space characters are
/// alphanumeric.
pub fn is_text_meaningful(text: &str, min_length: usize) -> bool {
    if text.trim().chars().count() < min_length {
        return false;
    }

    let total = text.chars().filter(|c| *c != ' ').count();
    if total == 0 {
        return false;
    }

    let alphanumeric = text.chars().filter(|c| c.is_alphanumeric()).count();
    alphanumeric as f32 / total as f32 >= 0.5
}
