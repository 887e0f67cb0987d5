//! News archive pipeline.
//!
//! The raw archive is one article per line. Articles are tokenized into
//! sentences and the first and last sentence of each article are dropped:
//! they frequently carry the author, the date or the outlet name instead
//! of content.
use std::io::BufRead;
use std::io::Write;
use std::path::{Path, PathBuf};

use glob::glob;
use log::{error, info, warn};

use crate::error::Error;
use crate::pipelines::pipeline::{Pipeline, RunSummary};
use crate::pipelines::types::Group;
use crate::segment;
use crate::sources::textfile;
use crate::writing;

/// Articles shorter than this many characters are ignored.
pub const MIN_ARTICLE_CHARS: usize = 150;

/// Minimum sentence count for an article to be kept, counted before the
/// first and last sentences are removed.
pub const MIN_ARTICLE_SENTENCES: usize = 6;

pub struct NewsCorpus {
    src: PathBuf,
    dst: PathBuf,
}

impl NewsCorpus {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self { src, dst }
    }

    fn input_paths(&self) -> Result<Vec<PathBuf>, Error> {
        if self.src.is_file() {
            return Ok(vec![self.src.clone()]);
        }
        let mut paths = Vec::new();
        for pattern in ["*.txt", "*.txt.gz"] {
            for entry in glob(&format!("{}/{}", self.src.display(), pattern))? {
                match entry {
                    Ok(path) => paths.push(path),
                    Err(e) => error!("unreadable news file: {:?}", e),
                }
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// The sentences kept from one article line, or `None` when the
    /// article is too short to be worth keeping.
    pub fn article_sentences(article: &str) -> Option<Vec<String>> {
        let article = article.trim();
        if article.chars().count() < MIN_ARTICLE_CHARS {
            return None;
        }
        let sentences = segment::sentences(article);
        if sentences.len() < MIN_ARTICLE_SENTENCES {
            return None;
        }
        Some(sentences[1..sentences.len() - 1].to_vec())
    }

    fn process_file<W: Write>(path: &Path, out: &mut W) -> Result<usize, Error> {
        info!("pre-processing {:?}...", path);
        let mut total = 0;
        for line in textfile::reader(path)?.lines() {
            let article = line?;
            if let Some(sentences) = Self::article_sentences(&article) {
                total += writing::write_groups(out, &[Group::new(sentences)])?;
            }
        }
        Ok(total)
    }
}

impl Pipeline<RunSummary> for NewsCorpus {
    fn run(&self) -> Result<RunSummary, Error> {
        let paths = self.input_paths()?;
        if paths.is_empty() {
            return Err(Error::Custom(format!(
                "no news files found in {:?}",
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

#[cfg(test)]
mod tests {
    use super::NewsCorpus;

    const LONG_SENTENCE: &str = "Энэ бол туршилтын зориулалттай нэлээд урт өгүүлбэр юм.";

    fn article(n: usize) -> String {
        let mut sentences = vec!["Эхний өгүүлбэр энд байна.".to_string()];
        sentences.extend(std::iter::repeat(LONG_SENTENCE.to_string()).take(n.saturating_sub(2)));
        sentences.push("Сүүлийн өгүүлбэр энд байна.".to_string());
        sentences.join(" ")
    }

    #[test]
    fn drops_first_and_last_sentence() {
        let kept = NewsCorpus::article_sentences(&article(6)).unwrap();
        assert_eq!(kept.len(), 4);
        assert!(kept.iter().all(|s| s == LONG_SENTENCE));
    }

    #[test]
    fn short_articles_are_ignored() {
        // plenty of sentences but too few characters
        assert_eq!(NewsCorpus::article_sentences("Нэг. Хоёр. Гурав. Дөрөв. Тав. Зургаа."), None);
        // long enough but too few sentences
        assert_eq!(NewsCorpus::article_sentences(&article(5)), None);
    }
}
