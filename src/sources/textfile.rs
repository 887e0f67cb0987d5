//! Plain or gzipped text file reading.
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::Error;

/// Open a text file for buffered line reading.
///
/// Files ending in `.gz` are decompressed on the fly with a multi-member
/// gz decoder, the same way compressed dump shards are usually produced.
pub fn reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, Error> {
    let file = File::open(path)?;
    let inner: Box<dyn Read> = if path.extension().map_or(false, |ext| ext == "gz") {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };
    Ok(BufReader::new(inner))
}
