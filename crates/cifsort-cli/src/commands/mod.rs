pub mod codes;
pub mod run;
pub mod scan;

use crate::Backend;
use cifsort_core::extraction::native::PdfExtractBackend;
use cifsort_core::extraction::pdftotext::PdftotextExtractor;
use cifsort_core::extraction::PdfExtractor;

pub(crate) fn extractor(backend: Backend) -> Box<dyn PdfExtractor> {
    match backend {
        Backend::PdfExtract => Box::new(PdfExtractBackend::new()),
        Backend::Pdftotext => {
            if !PdftotextExtractor::is_available() {
                tracing::warn!("pdftotext not found; every PDF will be unidentified");
            }
            Box::new(PdftotextExtractor::new())
        }
    }
}
