//! Sentence boundary detection.
//!
//! Thin wrapper around [UAX #29](https://unicode.org/reports/tr29/) sentence
//! segmentation. Lines are tokenized independently; boundaries never span
//! lines.
use unicode_segmentation::UnicodeSegmentation;

/// Split a line into trimmed, non-empty sentences.
pub fn sentences(line: &str) -> Vec<String> {
    line.unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
