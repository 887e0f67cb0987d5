//! Main body-text class detection.
use std::collections::HashMap;

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

#[derive(Debug, Default)]
struct Occurrences {
    count: usize,
    /// rank of first appearance, for a deterministic tie-break.
    rank: usize,
}

/// Tally of CSS class tokens over a whole document.
///
/// Feed every section through [ClassTally::add_section], then ask for the
/// most frequent class with [ClassTally::main_class]. Equal counts are
/// broken in favor of the class seen first.
#[derive(Debug, Default)]
pub struct ClassTally {
    counts: HashMap<String, Occurrences>,
}

impl ClassTally {
    /// Count the class tokens of every element in `html`.
    pub fn add_section(&mut self, html: &str) {
        let doc = Html::parse_document(html);
        self.visit(doc.tree.root());
    }

    fn visit(&mut self, node: NodeRef<Node>) {
        if let Node::Element(el) = node.value() {
            for class in el.classes() {
                let rank = self.counts.len();
                let entry = self
                    .counts
                    .entry(class.to_string())
                    .or_insert(Occurrences { count: 0, rank });
                entry.count += 1;
            }
        }
        for child in node.children() {
            self.visit(child);
        }
    }

    /// The most frequent class token, or `None` when no element carried
    /// a class attribute.
    pub fn main_class(&self) -> Option<&str> {
        self.counts
            .iter()
            .max_by(|(_, a), (_, b)| a.count.cmp(&b.count).then(b.rank.cmp(&a.rank)))
            .map(|(class, _)| class.as_str())
    }
}
