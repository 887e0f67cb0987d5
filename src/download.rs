//! Raw archive downloading.
//!
//! Blocking downloads only: corpus archives are fetched once, before any
//! processing starts, so there is nothing to overlap with.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use reqwest::Url;

use crate::error::Error;

/// Holds the http client that will make the requests.
pub struct Downloader {
    client: reqwest::blocking::Client,
}

impl Downloader {
    pub fn new() -> Self {
        Downloader {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Parse `url` and download it into `dst`.
    pub fn download_url(&self, url: &str, dst: &Path) -> Result<u64, Error> {
        let url = Url::parse(url).map_err(|e| Error::Custom(format!("invalid url {url}: {e}")))?;
        self.download(&url, dst)
    }

    /// Download `url` into `dst`, streaming the body to disk.
    ///
    /// When the server announces a `Content-Length`, the number of bytes
    /// written has to match it: a short read is an [Error::IncompleteDownload],
    /// not a success with a truncated file.
    pub fn download(&self, url: &Url, dst: &Path) -> Result<u64, Error> {
        info!("downloading {}", url);
        let response = self.client.get(url.clone()).send()?;
        let expected = response.content_length();

        let mut out = File::create(dst)?;
        let mut buf = BufReader::new(response);
        let written = std::io::copy(&mut buf, &mut out)?;

        if let Some(expected) = expected {
            if expected != written {
                return Err(Error::IncompleteDownload {
                    expected,
                    got: written,
                });
            }
        }

        Ok(written)
    }
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}
