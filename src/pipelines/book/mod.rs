mod pipeline;

pub use pipeline::{BookCorpus, MIN_BOOK_SENTENCES};
