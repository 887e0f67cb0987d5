//! Merges physical lines that belong to one logical sentence.
//!
//! EPUBs converted from fixed-layout sources keep the original line
//! wrapping, so a sentence frequently spans several extracted lines:
//!
//! ```text
//! байхаар хатуу
//! шийдсэн тухай
//! ```
//!
//! becomes `байхаар хатуу шийдсэн тухай`. A line ending in `-` whose
//! continuation starts with a lowercase letter is a word the conversion
//! tool broke in half, and is rejoined without the hyphen.
//!
//! This is a greedy left-to-right single pass: once a pair does not merge,
//! the left line is closed for good. Breaks never merge with anything.
use crate::lang;
use crate::pipelines::types::Line;

use super::Transform;

pub struct Unwrap;

impl Unwrap {
    /// `true` when `current` + `next` are two halves of a wrapped sentence.
    fn continues_sentence(current: &str, next: &str) -> bool {
        let last = match current.chars().last() {
            Some(c) => c,
            None => return false,
        };
        let first = match next.chars().next() {
            Some(c) => c,
            None => return false,
        };
        lang::is_cyrillic(last) && lang::is_cyrillic_lower(first)
    }

    /// `true` when `current` ends in a wrong word-break hyphen that `next`
    /// continues.
    fn continues_word(current: &str, next: &str) -> bool {
        current.ends_with('-')
            && next
                .chars()
                .next()
                .map_or(false, lang::is_cyrillic_lower)
    }
}

impl Transform for Unwrap {
    fn transform_own(&self, lines: Vec<Line>) -> Vec<Line> {
        let mut unwrapped = Vec::with_capacity(lines.len());
        let mut current: Option<String> = None;

        for line in lines {
            match line {
                Line::Break => {
                    if let Some(done) = current.take() {
                        unwrapped.push(Line::Text(done));
                    }
                    unwrapped.push(Line::Break);
                }
                Line::Text(next) => {
                    let next = next.trim().to_string();
                    current = Some(match current.take() {
                        None => next,
                        Some(mut cur) => {
                            if Self::continues_sentence(&cur, &next) {
                                cur.push(' ');
                                cur.push_str(&next);
                                cur
                            } else if Self::continues_word(&cur, &next) {
                                cur.pop();
                                cur.push_str(&next);
                                cur
                            } else {
                                unwrapped.push(Line::Text(cur));
                                next
                            }
                        }
                    });
                }
            }
        }
        if let Some(done) = current.take() {
            unwrapped.push(Line::Text(done));
        }

        unwrapped
    }
}

#[cfg(test)]
mod tests {
    use super::Unwrap;
    use crate::pipelines::types::Line;
    use crate::transformers::Transform;

    fn unwrap(lines: &[&str]) -> Vec<String> {
        Unwrap
            .transform_own(lines.iter().copied().map(Line::text).collect())
            .into_iter()
            .map(|l| l.as_text().unwrap().to_string())
            .collect()
    }

    #[test]
    fn single_line_passes_through() {
        assert_eq!(unwrap(&["ганц мөр"]), ["ганц мөр"]);
    }

    #[test]
    fn merges_wrapped_sentence() {
        assert_eq!(
            unwrap(&["байхаар хатуу", "шийдсэн тухай"]),
            ["байхаар хатуу шийдсэн тухай"]
        );
    }

    #[test]
    fn uppercase_continuation_starts_a_new_line() {
        assert_eq!(
            unwrap(&["байхаар хатуу", "Монгол Улсын"]),
            ["байхаар хатуу", "Монгол Улсын"]
        );
    }

    #[test]
    fn hyphen_break_is_rejoined() {
        assert_eq!(unwrap(&["шийд-", "сэн тухай"]), ["шийдсэн тухай"]);
    }

    #[test]
    fn merge_runs_chain_greedily() {
        assert_eq!(
            unwrap(&["шийд-", "сэн тухай", "эх сурвалж өгүүлж байна."]),
            ["шийдсэн тухай эх сурвалж өгүүлж байна."]
        );
        assert_eq!(
            unwrap(&["шийд-", "сэн тухай", "Тиймээс ч өчигдөр"]),
            ["шийдсэн тухай", "Тиймээс ч өчигдөр"]
        );
    }

    #[test]
    fn break_is_a_hard_boundary() {
        let lines = vec![
            Line::text("байхаар хатуу"),
            Line::Break,
            Line::text("шийдсэн тухай"),
        ];
        assert_eq!(
            Unwrap.transform_own(lines),
            vec![
                Line::text("байхаар хатуу"),
                Line::Break,
                Line::text("шийдсэн тухай"),
            ]
        );
    }

    #[test]
    fn space_merge_loses_no_characters() {
        let left = "байхаар хатуу";
        let right = "шийдсэн тухай";
        let merged = unwrap(&[left, right]).join("");
        assert_eq!(merged.len(), left.len() + 1 + right.len());
        assert_eq!(merged, format!("{} {}", left, right));
    }

    #[test]
    fn hyphen_merge_removes_exactly_the_hyphen() {
        let merged = unwrap(&["зөвлөмж-", "ийг хэрэгжүүлэх"]);
        assert_eq!(merged, ["зөвлөмжийг хэрэгжүүлэх"]);
    }
}
