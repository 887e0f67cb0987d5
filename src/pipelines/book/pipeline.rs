//! Calibre EPUB book pipeline.
//!
//! Each book goes through the same chain:
//! 1. the main body-text CSS class is detected over all sections,
//! 1. each section is flattened into text lines and breaks,
//! 1. wrapped lines are merged back into logical lines,
//! 1. punctuation spacing and word breaks are repaired,
//! 1. lines are split into sentences and junk sentences dropped,
//! 1. sentences are grouped between breaks, short groups discarded,
//! 1. groups are written under a title-derived file name.
//!
//! A book yielding fewer than [MIN_BOOK_SENTENCES] sentences fails its
//! sanity check: that many pages of narrative cannot fit in less, so the
//! class heuristic most likely picked the wrong class.
use std::path::{Path, PathBuf};

use glob::glob;
use log::{debug, error, info, warn};

use crate::error::Error;
use crate::filtering::{Clean, Filter};
use crate::html::{extract_lines, ClassTally};
use crate::pipelines::pipeline::{Pipeline, RunSummary};
use crate::pipelines::types::{group_lines, Group, Line};
use crate::segment;
use crate::sources::book::{Book, Section};
use crate::transformers::{Repair, Transform, Unwrap};
use crate::writing::CorpusWriter;

/// Minimum number of sentences a whole book must yield.
pub const MIN_BOOK_SENTENCES: usize = 100;

pub struct BookCorpus {
    src: PathBuf,
    dst: PathBuf,
}

impl BookCorpus {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self { src, dst }
    }

    /// Books to process: `src` itself, or every `.epub` under it.
    fn book_paths(&self) -> Result<Vec<PathBuf>, Error> {
        if self.src.is_file() {
            return Ok(vec![self.src.clone()]);
        }
        let pattern = format!("{}/*.epub", self.src.display());
        let mut paths = Vec::new();
        for entry in glob(&pattern)? {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => error!("unreadable book path: {:?}", e),
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Turn the sections of one book into filtered sentence groups.
    ///
    /// Returns the groups along with the sentence count before grouping,
    /// which the sanity check runs against.
    pub fn sections_to_groups(
        sections: &[Section],
        main_class: Option<&str>,
    ) -> (Vec<Group>, usize) {
        let clean = Clean::default();
        let mut sentences: Vec<Line> = Vec::new();

        for section in sections {
            debug!("pre-processing section {:?}...", section.id);
            let lines = extract_lines(&section.html, main_class);
            let lines = Unwrap.transform_own(lines);
            let lines = Repair.transform_own(lines);

            for line in lines {
                match line {
                    Line::Break => sentences.push(Line::Break),
                    Line::Text(text) => sentences.extend(
                        segment::sentences(&text)
                            .into_iter()
                            .filter(|s| clean.detect(s))
                            .map(Line::Text),
                    ),
                }
            }
        }

        let nb_sentences = sentences.iter().filter(|l| l.as_text().is_some()).count();
        (group_lines(sentences), nb_sentences)
    }

    fn process_book(path: &Path, writer: &CorpusWriter) -> Result<(), Error> {
        info!("pre-processing {:?}...", path);
        let book = Book::open(path)?;

        let mut tally = ClassTally::default();
        for section in &book.sections {
            tally.add_section(&section.html);
        }
        let main_class = tally.main_class().map(str::to_string);
        match &main_class {
            Some(class) => debug!("main class: {:?}", class),
            None => warn!(
                "no CSS classes in {:?}, treating everything as body text",
                path
            ),
        }

        let (groups, nb_sentences) =
            Self::sections_to_groups(&book.sections, main_class.as_deref());

        if nb_sentences < MIN_BOOK_SENTENCES {
            return Err(Error::TooFewSentences {
                path: path.to_path_buf(),
                count: nb_sentences,
            });
        }

        let (out_path, total) = writer.write_book(&book.title, &groups)?;
        info!("saved {} sentences into {:?}", total, out_path);
        Ok(())
    }
}

impl Pipeline<RunSummary> for BookCorpus {
    fn run(&self) -> Result<RunSummary, Error> {
        let paths = self.book_paths()?;
        if paths.is_empty() {
            return Err(Error::Custom(format!(
                "no epub files found in {:?}",
                self.src
            )));
        }

        let writer = CorpusWriter::new(&self.dst)?;
        let mut summary = RunSummary::default();
        for path in &paths {
            match Self::process_book(path, &writer) {
                Ok(()) => summary.processed += 1,
                Err(e) => {
                    warn!("skipping {:?}: {:?}", path, e);
                    summary.skipped += 1;
                }
            }
        }
        Ok(summary)
    }
}
