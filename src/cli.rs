//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "tuuver", about = "Mongolian corpus generation tool.")]
/// Holds every command that is callable by the `tuuver` command.
pub enum Tuuver {
    #[structopt(about = "Pre-process Calibre-converted EPUB books")]
    Book(Book),
    #[structopt(about = "Pre-process a news archive (one article per line)")]
    News(News),
    #[structopt(about = "Pre-process a WikiExtractor dump")]
    Wiki(Wiki),
    #[structopt(about = "Download a raw archive")]
    Download(Download),
}

#[derive(Debug, StructOpt)]
/// Book command and parameters.
pub struct Book {
    #[structopt(parse(from_os_str), help = "epub file or folder of epub files")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "corpus destination folder",
        default_value = "mn_book_corpus"
    )]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// News command and parameters.
pub struct News {
    #[structopt(
        parse(from_os_str),
        help = "news file (.txt or .txt.gz, one article per line) or folder of them"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "destination corpus file",
        default_value = "mn_corpus/mn_news.txt"
    )]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Wiki command and parameters.
pub struct Wiki {
    #[structopt(
        parse(from_os_str),
        help = "WikiExtractor output folder (or a single extracted file)"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "destination corpus file",
        default_value = "mn_corpus/mn_wiki.txt"
    )]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Download command and parameters.
pub struct Download {
    #[structopt(help = "archive url")]
    pub url: String,
    #[structopt(parse(from_os_str), help = "download destination")]
    pub dst: PathBuf,
}
