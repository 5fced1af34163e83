use crate::error::SortError;
use crate::extraction::{PageContent, PdfExtractor};

/// Pure Rust extraction backend built on the `pdf-extract` crate.
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        PdfExtractBackend
    }
}

impl Default for PdfExtractBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdfExtractBackend {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SortError> {
        // pdf-extract panics on some malformed fonts and glyph tables.
        let result = std::panic::catch_unwind(|| {
            pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
        });

        let pages = match result {
            Ok(Ok(pages)) => pages,
            Ok(Err(e)) => return Err(SortError::Extraction(e.to_string())),
            Err(_) => {
                return Err(SortError::Extraction(
                    "pdf-extract panicked, likely on a malformed font".into(),
                ))
            }
        };

        Ok(pages
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageContent {
                page_number: i + 1,
                text,
            })
            .collect())
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}
