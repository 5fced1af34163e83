pub mod native;
pub mod pdftotext;

use crate::error::SortError;
use std::path::Path;

/// Text extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SortError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Read a PDF and return its text with pages concatenated in order.
///
/// Never fails: an unreadable or unparsable file yields an empty string,
/// which the classifier routes to the unidentified folder.
pub fn extract_text(extractor: &dyn PdfExtractor, path: &Path) -> String {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("could not read {}: {}", path.display(), e);
            return String::new();
        }
    };

    match extractor.extract_pages(&bytes) {
        Ok(pages) => {
            tracing::debug!(
                "{} extracted {} page(s) from {}",
                extractor.backend_name(),
                pages.len(),
                path.display()
            );
            join_pages(&pages)
        }
        Err(e) => {
            tracing::warn!(
                "{} could not extract {}: {}",
                extractor.backend_name(),
                path.display(),
                e
            );
            String::new()
        }
    }
}

fn join_pages(pages: &[PageContent]) -> String {
    let mut sorted: Vec<&PageContent> = pages.iter().collect();
    sorted.sort_by_key(|p| p.page_number);
    sorted.iter().map(|p| p.text.as_str()).collect()
}
