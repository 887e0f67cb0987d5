//! Wikipedia dump pipeline.
//!
//! Operates on WikiExtractor output, where articles are delimited by
//! `<doc ...>` / `</doc>` lines. The first line after `<doc` is the
//! article title and is skipped, as are category links (`[[...`).
//! Articles with fewer than two sentences are dropped.
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use glob::glob;
use log::{error, info, warn};

use crate::error::Error;
use crate::pipelines::pipeline::{Pipeline, RunSummary};
use crate::pipelines::types::{Group, MIN_GROUP_SIZE};
use crate::segment;
use crate::sources::textfile;
use crate::writing;

pub struct WikiCorpus {
    src: PathBuf,
    dst: PathBuf,
}

impl WikiCorpus {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self { src, dst }
    }

    /// WikiExtractor lays its output out as `<src>/<part>/wiki_<nn>`.
    fn input_paths(&self) -> Result<Vec<PathBuf>, Error> {
        if self.src.is_file() {
            return Ok(vec![self.src.clone()]);
        }
        let pattern = format!("{}/*/wiki_*", self.src.display());
        let mut paths = Vec::new();
        for entry in glob(&pattern)? {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => error!("unreadable wiki file: {:?}", e),
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Parse one WikiExtractor file into per-article sentence groups.
    pub fn collect_articles<R: BufRead>(reader: R) -> Result<Vec<Group>, Error> {
        let mut articles = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut at_title = false;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }
            if line.starts_with("<doc") {
                at_title = true;
                continue;
            }
            // right after the article opening comes its title
            if at_title {
                at_title = false;
                continue;
            }
            if line.starts_with("[[") {
                continue;
            }
            if line.starts_with("</doc>") {
                Self::close_article(&mut articles, &mut current);
                continue;
            }
            current.extend(segment::sentences(line));
        }
        Self::close_article(&mut articles, &mut current);

        Ok(articles)
    }

    fn close_article(articles: &mut Vec<Group>, current: &mut Vec<String>) {
        if current.len() >= MIN_GROUP_SIZE {
            articles.push(Group::new(std::mem::take(current)));
        } else {
            current.clear();
        }
    }

    fn process_file<W: Write>(path: &Path, out: &mut W) -> Result<usize, Error> {
        info!("pre-processing {:?}...", path);
        let articles = Self::collect_articles(textfile::reader(path)?)?;
        Ok(writing::write_groups(out, &articles)?)
    }
}

impl Pipeline<RunSummary> for WikiCorpus {
    fn run(&self) -> Result<RunSummary, Error> {
        let paths = self.input_paths()?;
        if paths.is_empty() {
            return Err(Error::Custom(format!(
                "no wiki files found in {:?}",
                self.src
            )));
        }

        let mut out = writing::create_corpus_file(&self.dst)?;
        let mut summary = RunSummary::default();
        let mut total = 0;
        for path in &paths {
            match Self::process_file(path, &mut out) {
                Ok(nb_sentences) => {
                    summary.processed += 1;
                    total += nb_sentences;
                }
                Err(e) => {
                    warn!("skipping {:?}: {:?}", path, e);
                    summary.skipped += 1;
                }
            }
        }
        out.flush()?;
        info!("saved {} sentences into {:?}", total, self.dst);
        Ok(summary)
    }
}
