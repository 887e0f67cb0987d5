//! EPUB book source.
use std::path::Path;

use epub::doc::EpubDoc;
use log::debug;

use crate::error::Error;

/// One spine entry: an opaque HTML blob plus its manifest identifier.
#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    pub html: String,
}

/// A book loaded from an EPUB container.
///
/// Sections are kept in spine order, which is the linear reading order
/// declared by the container.
#[derive(Debug, Clone)]
pub struct Book {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Book {
    /// Open an EPUB file and pull every spine section into memory.
    ///
    /// Books are small (a few hundred kB of XHTML), so there is no point
    /// in streaming sections one at a time.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let mut doc = EpubDoc::new(path)?;

        let title = doc.mdata("title").map(|m| m.value.clone()).unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("untitled")
                .to_string()
        });

        let mut sections = Vec::new();
        for i in 0..doc.spine.len() {
            doc.set_current_page(i);
            let id = doc
                .get_current_id()
                .unwrap_or_else(|| format!("section-{}", i));
            if let Some((html, _mime)) = doc.get_current_str() {
                sections.push(Section { id, html });
            }
        }

        debug!("{:?}: {} spine sections", path, sections.len());
        Ok(Book { title, sections })
    }
}
