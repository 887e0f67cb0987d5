//! Corpus file writers.
mod corpus;

pub use corpus::{create_corpus_file, title_to_filename, write_groups, CorpusWriter};
