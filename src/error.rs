//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Epub(epub::doc::DocError),
    GlobPattern(glob::PatternError),
    Download(reqwest::Error),
    /// an output file for the same derived name is already present.
    OutputExists(PathBuf),
    /// sanity check: a processed book yielded too little content.
    TooFewSentences { path: PathBuf, count: usize },
    IncompleteDownload { expected: u64, got: u64 },
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<epub::doc::DocError> for Error {
    fn from(e: epub::doc::DocError) -> Error {
        Error::Epub(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Download(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
