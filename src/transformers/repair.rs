//! Punctuation spacing and word-break repair for Mongolian Cyrillic.
//!
//! Calibre conversions of scanned books lose the conventional spacing
//! around punctuation (`сайн уу ?`, `байсан.Одоо`) and leave hyphenated
//! word breaks in the middle of lines (`зөвлөмж- ийг`). Both repairs are
//! pure regex rewrites over the Mongolian Cyrillic alphabet; anything
//! outside it is left untouched.
//!
//! The whitespace repair must run before the word-break repair: a hyphen
//! adjacent to repaired punctuation rewrites differently otherwise.
use lazy_static::lazy_static;
use regex::Regex;

use crate::lang::{MN_CYRILLIC_LOWER, MN_CYRILLIC_UPPER};
use crate::pipelines::types::Line;

use super::Transform;

lazy_static! {
    /// `хүү ,` -> `хүү,`
    static ref SPACE_BEFORE_PUNCT: Regex = Regex::new(&format!(
        r"([{up}{lo}]+)\s+([.,:!?])",
        up = MN_CYRILLIC_UPPER,
        lo = MN_CYRILLIC_LOWER
    ))
    .unwrap();
    /// `байсан.Одоо` -> `байсан. Одоо`
    static ref NO_SPACE_AFTER_STOP: Regex = Regex::new(&format!(
        r"([{lo}]+[.])([{up}]+)",
        up = MN_CYRILLIC_UPPER,
        lo = MN_CYRILLIC_LOWER
    ))
    .unwrap();
    /// `харцгааж:болно` -> `харцгааж: болно`
    static ref NO_SPACE_AFTER_PUNCT: Regex = Regex::new(&format!(
        r"([{lo}]+[,:!?])([{up}{lo}]+)",
        up = MN_CYRILLIC_UPPER,
        lo = MN_CYRILLIC_LOWER
    ))
    .unwrap();
    /// `зөвлөмж-  ийг` -> `зөвлөмжийг`
    static ref BROKEN_WORD_SPACED: Regex = Regex::new(&format!(
        r"([{up}{lo}]+)-\s+([{lo}]+)",
        up = MN_CYRILLIC_UPPER,
        lo = MN_CYRILLIC_LOWER
    ))
    .unwrap();
    /// `хэрэг-жүүлэх` -> `хэрэгжүүлэх`
    static ref BROKEN_WORD_TIGHT: Regex = Regex::new(&format!(
        r"([{up}{lo}]+)-([{lo}]+)",
        up = MN_CYRILLIC_UPPER,
        lo = MN_CYRILLIC_LOWER
    ))
    .unwrap();
}

/// Add or remove whitespace around `.,:!?`.
///
/// Idempotent: a line that already has conventional spacing comes back
/// unchanged.
pub fn adjust_whitespace(line: &str) -> String {
    let line = SPACE_BEFORE_PUNCT.replace_all(line, "${1}${2}");
    let line = NO_SPACE_AFTER_STOP.replace_all(&line, "${1} ${2}");
    let line = NO_SPACE_AFTER_PUNCT.replace_all(&line, "${1} ${2}");
    line.into_owned()
}

/// Undo wrong word-break hyphenation.
///
/// Two passes, whitespaced hyphens first: chained breaks like
/// `хэрэг-жүүл- эх` only rejoin fully when the spaced half is repaired
/// before the tight one.
pub fn rejoin_broken_words(line: &str) -> String {
    let line = BROKEN_WORD_SPACED.replace_all(line, "${1}${2}");
    let line = BROKEN_WORD_TIGHT.replace_all(&line, "${1}${2}");
    line.into_owned()
}

/// Applies both repairs, whitespace first, to every text line.
pub struct Repair;

impl Transform for Repair {
    fn transform_own(&self, lines: Vec<Line>) -> Vec<Line> {
        lines
            .into_iter()
            .map(|line| match line {
                Line::Text(text) => Line::Text(rejoin_broken_words(&adjust_whitespace(&text))),
                Line::Break => Line::Break,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{adjust_whitespace, rejoin_broken_words, Repair};
    use crate::pipelines::types::Line;
    use crate::transformers::Transform;

    #[test]
    fn removes_space_before_punctuation() {
        assert_eq!(
            adjust_whitespace("сайн уу ? Аль вэ   . байна! байна !"),
            "сайн уу? Аль вэ. байна! байна!"
        );
    }

    #[test]
    fn inserts_missing_space_after_punctuation() {
        assert_eq!(
            adjust_whitespace("сайн байсан.Одоо байна?Одоо харцгааж :"),
            "сайн байсан. Одоо байна? Одоо харцгааж:"
        );
    }

    #[test]
    fn comma_and_colon_spacing() {
        assert_eq!(
            adjust_whitespace("Аль: Аль : Аль , Аль,"),
            "Аль: Аль: Аль, Аль,"
        );
    }

    #[test]
    fn whitespace_repair_is_idempotent() {
        let inputs = [
            "сайн уу ? Аль вэ   . байна! байна !",
            "сайн байсан.Одоо байна?Одоо харцгааж :",
            "Аль: Аль : Аль , Аль,",
        ];
        for input in inputs {
            let once = adjust_whitespace(input);
            assert_eq!(adjust_whitespace(&once), once);
        }
    }

    #[test]
    fn rejoins_broken_words() {
        assert_eq!(
            rejoin_broken_words("зөвлөмж-  ийг хэрэг-жүүл- эх зорилго- Монгол"),
            "зөвлөмжийг хэрэгжүүлэх зорилго- Монгол"
        );
    }

    #[test]
    fn latin_text_passes_through() {
        let line = "ISBN 978-99-12, pp. 1 - 2";
        assert_eq!(adjust_whitespace(line), line);
        assert_eq!(rejoin_broken_words(line), line);
    }

    #[test]
    fn full_repair_order() {
        let line = Line::text(
            "Баруу-н зүүн- ээ хөшиглөн,хөндөлдөн дүнхийх.\
             Намнан уулын өвөр Цагаан:бургас өглөө?нарнаар гараад яаралгүй сажилна.",
        );
        let repaired = Repair.transform_own(vec![line, Line::Break]);
        assert_eq!(
            repaired,
            vec![
                Line::text(
                    "Баруун зүүнээ хөшиглөн, хөндөлдөн дүнхийх. \
                     Намнан уулын өвөр Цагаан: бургас өглөө? нарнаар гараад яаралгүй сажилна."
                ),
                Line::Break,
            ]
        );
    }
}
