//! Sentence group serialization.
//!
//! The on-disk format is shared by every pipeline: one sentence per line,
//! one blank line after each group. Output files are never overwritten:
//! an existing file for the same derived name means the run is a
//! duplicate.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::error::Error;
use crate::pipelines::types::Group;

/// Derive an output file name from a book title.
///
/// Lowercased, whitespace runs collapsed to `_`, path separators
/// stripped so a title can never escape the corpus directory.
pub fn title_to_filename(title: &str) -> String {
    let name: String = title
        .to_lowercase()
        .split_whitespace()
        .join("_")
        .chars()
        .filter(|c| *c != '/' && *c != '\\')
        .collect();
    if name.is_empty() {
        "untitled".to_string()
    } else {
        name
    }
}

/// Serialize groups into `w`. Returns the number of sentences written.
pub fn write_groups<W: Write>(w: &mut W, groups: &[Group]) -> Result<usize, std::io::Error> {
    let mut total = 0;
    for group in groups {
        writeln!(w, "{}", group.sentences().iter().join("\n"))?;
        writeln!(w)?;
        total += group.len();
    }
    Ok(total)
}

/// Open `path` for writing, refusing to clobber an existing file.
pub fn create_corpus_file(path: &Path) -> Result<BufWriter<File>, Error> {
    if path.exists() {
        return Err(Error::OutputExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}

/// Writes one corpus file per book into a destination folder.
pub struct CorpusWriter {
    dst: PathBuf,
}

impl CorpusWriter {
    pub fn new(dst: &Path) -> Result<Self, Error> {
        std::fs::create_dir_all(dst)?;
        Ok(CorpusWriter {
            dst: dst.to_path_buf(),
        })
    }

    /// Write a book's groups under its title-derived name.
    ///
    /// Returns the file path and the number of sentences written.
    pub fn write_book(&self, title: &str, groups: &[Group]) -> Result<(PathBuf, usize), Error> {
        let mut path = self.dst.clone();
        path.push(format!("{}.txt", title_to_filename(title)));

        let mut file = create_corpus_file(&path)?;
        let total = write_groups(&mut file, groups)?;
        file.flush()?;

        Ok((path, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_are_flattened() {
        assert_eq!(title_to_filename("Цаг төрийн үймээн"), "цаг_төрийн_үймээн");
        assert_eq!(title_to_filename(" Монгол  түүх/1921 "), "монгол_түүх1921");
        assert_eq!(title_to_filename("ЦАГААН САР"), "цагаан_сар");
    }

    #[test]
    fn empty_title_gets_a_fallback() {
        assert_eq!(title_to_filename("  "), "untitled");
        assert_eq!(title_to_filename("/"), "untitled");
    }

    #[test]
    fn groups_are_separated_by_a_blank_line() {
        let groups = vec![
            Group::new(vec!["Нэг.".into(), "Хоёр.".into()]),
            Group::new(vec!["Гурав.".into(), "Дөрөв.".into()]),
        ];
        let mut out = Vec::new();
        let total = write_groups(&mut out, &groups).unwrap();
        assert_eq!(total, 4);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Нэг.\nХоёр.\n\nГурав.\nДөрөв.\n\n"
        );
    }
}
