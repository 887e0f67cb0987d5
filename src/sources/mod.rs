/*! Corpus sources.

Readers over the raw inputs of the pipelines: EPUB containers for books,
plain or gzipped text files for news archives and extracted wiki dumps.

!*/
pub mod book;
pub mod textfile;
