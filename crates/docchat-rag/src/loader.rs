//! PDF document loader

use std::path::Path;

use docchat_core::{DocumentPage, Error, Result};

/// Loads the source PDF as an ordered sequence of pages
pub struct PdfLoader;

impl PdfLoader {
    /// Extract the text of every page, in document order.
    ///
    /// A missing file is reported before any parse attempt so the caller can
    /// tell a bad path from a corrupt document. Blank pages are kept so page
    /// numbers stay aligned with the source; the splitter produces no chunks
    /// for them.
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<DocumentPage>> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::Document(format!(
                "PDF file not found: {}",
                path.display()
            )));
        }

        let pages = pdf_extract::extract_text_by_pages(path)
            .map_err(|e| Error::Document(format!("Failed to extract text from PDF: {}", e)))?;

        Ok(pages
            .into_iter()
            .enumerate()
            .map(|(i, content)| DocumentPage {
                number: i + 1,
                content,
            })
            .collect())
    }
}
