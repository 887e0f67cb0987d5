//! Transform trait.

use crate::pipelines::types::Line;

pub trait Transform {
    /// Takes ownership of the line sequence and returns it transformed.
    fn transform_own(&self, lines: Vec<Line>) -> Vec<Line>;
}
