//! Corpus types shared by the pipelines.
//!
//! Every pipeline produces the same shape of output: ordered groups of
//! sentences, written one sentence per line with a blank line between
//! groups.

/// A unit of the extracted line sequence: either text, or a structural
/// break (chapter boundary, header, footnote, scene break and so on).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    Break,
}

impl Line {
    pub fn text(s: impl Into<String>) -> Self {
        Line::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Line::Text(s) => Some(s),
            Line::Break => None,
        }
    }
}

/// Minimum number of sentences for a group to be kept.
///
/// Guards against false paragraph detections and noise.
pub const MIN_GROUP_SIZE: usize = 2;

/// A paragraph-like run of sentences between two breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    sentences: Vec<String>,
}

impl Group {
    pub fn new(sentences: Vec<String>) -> Self {
        Group { sentences }
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Accumulate sentences into groups delimited by [Line::Break].
///
/// A break closes the current group and opens a new one; groups smaller
/// than [MIN_GROUP_SIZE] are discarded.
pub fn group_lines(lines: impl IntoIterator<Item = Line>) -> Vec<Group> {
    let mut groups = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in lines {
        match line {
            Line::Text(sentence) => current.push(sentence),
            Line::Break => close(&mut groups, &mut current),
        }
    }
    close(&mut groups, &mut current);

    groups
}

fn close(groups: &mut Vec<Group>, current: &mut Vec<String>) {
    if current.len() >= MIN_GROUP_SIZE {
        groups.push(Group::new(std::mem::take(current)));
    } else {
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_kept_singleton_is_dropped() {
        let lines = vec![
            Line::text("Нэг."),
            Line::text("Хоёр."),
            Line::Break,
            Line::text("Гурав."),
            Line::Break,
        ];
        let groups = group_lines(lines);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].sentences(), ["Нэг.", "Хоёр."]);
    }

    #[test]
    fn consecutive_breaks_yield_nothing() {
        let lines = vec![Line::Break, Line::Break, Line::Break];
        assert!(group_lines(lines).is_empty());
    }

    #[test]
    fn trailing_group_without_break_is_closed() {
        let lines = vec![Line::text("Нэг."), Line::text("Хоёр.")];
        assert_eq!(group_lines(lines).len(), 1);
    }

    #[test]
    fn sentence_count_is_conserved() {
        let lines = vec![
            Line::text("а."),
            Line::text("б."),
            Line::text("в."),
            Line::Break,
            Line::text("г."),
            Line::Break,
            Line::text("д."),
            Line::text("е."),
        ];
        let nb_input = lines.iter().filter(|l| l.as_text().is_some()).count();
        let groups = group_lines(lines);

        let nb_grouped: usize = groups.iter().map(Group::len).sum();
        // the only loss is the single-sentence group "г."
        assert_eq!(nb_grouped, nb_input - 1);
        assert!(groups.iter().all(|g| g.len() >= MIN_GROUP_SIZE));
    }
}
