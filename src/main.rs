//! # Tuuver
//!
//! Tuuver turns raw Mongolian text sources (Calibre-converted EPUB books,
//! news archives, Wikipedia dumps) into plain-text sentence corpora
//! suitable for training a tokenizer and a language model: one sentence
//! per line, one blank line between paragraph-like groups.
//!
//! ## Getting started
//!
//! ```sh
//! tuuver 0.1.0
//! Mongolian corpus generation tool.
//!
//! USAGE:
//!     tuuver <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     book        Pre-process Calibre-converted EPUB books
//!     download    Download a raw archive
//!     help        Prints this message or the help of the given subcommand(s)
//!     news        Pre-process a news archive (one article per line)
//!     wiki        Pre-process a WikiExtractor dump
//! ```
//!
//! Failing inputs are reported and skipped; the exit code is non-zero
//! when any input failed.
use log::{debug, error, info};
use structopt::StructOpt;

use tuuver::download::Downloader;
use tuuver::error::Error;
use tuuver::pipelines::{BookCorpus, NewsCorpus, Pipeline, RunSummary, WikiCorpus};

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Tuuver::from_args();
    debug!("cli args\n{:#?}", opt);

    let summary = match opt {
        cli::Tuuver::Book(p) => BookCorpus::new(p.src, p.dst).run()?,
        cli::Tuuver::News(p) => NewsCorpus::new(p.src, p.dst).run()?,
        cli::Tuuver::Wiki(p) => WikiCorpus::new(p.src, p.dst).run()?,
        cli::Tuuver::Download(d) => {
            let written = Downloader::new().download_url(&d.url, &d.dst)?;
            info!("downloaded {} bytes into {:?}", written, d.dst);
            RunSummary {
                processed: 1,
                skipped: 0,
            }
        }
    };

    if summary.skipped > 0 {
        error!(
            "{} input(s) failed, {} processed",
            summary.skipped, summary.processed
        );
        std::process::exit(1);
    }
    info!("done: {} input(s) processed", summary.processed);
    Ok(())
}
