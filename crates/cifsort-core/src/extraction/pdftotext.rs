use crate::error::SortError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Useful when pdf-extract chokes on a producer's fonts; poppler is more
/// forgiving but has to be installed separately.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SortError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| SortError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| SortError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SortError::PdftotextNotFound
                } else {
                    SortError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(SortError::PdftotextFailed { code, stderr });
        }

        Ok(split_pages(&String::from_utf8_lossy(&output.stdout)))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// pdftotext separates pages with a form feed and ends the last one with it too.
fn split_pages(text: &str) -> Vec<PageContent> {
    let mut pages: Vec<PageContent> = text
        .split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            text: page_text.to_string(),
        })
        .collect();

    if pages.len() > 1 && pages.last().is_some_and(|p| p.text.trim().is_empty()) {
        pages.pop();
    }
    pages
}
