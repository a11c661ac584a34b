//! Text cleanup utilities.

pub mod clean;

pub use clean::{clean_text, fix_ocr_confusions, is_text_meaningful, normalize_whitespace};
