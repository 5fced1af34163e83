pub mod access;
pub mod archive;
pub mod classify;
pub mod codes;
pub mod config;
pub mod error;
pub mod extraction;
pub mod matching;
pub mod organize;
pub mod session;
pub mod trace;

use access::AccessGate;
use archive::ArchiveSummary;
use classify::outcome::{Destination, DocumentOutcome};
use config::Settings;
use error::SortError;
use extraction::PdfExtractor;
use matching::FoundCodes;
use organize::Organizer;
use serde::{Deserialize, Serialize};
use session::{Session, Upload};
use std::path::Path;
use trace::RunLog;

/// Everything a finished run hands back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub documents: Vec<DocumentOutcome>,
    pub log: RunLog,
    pub archive: ArchiveSummary,
}

/// Result of inspecting a single PDF without moving anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub file_name: String,
    pub backend: String,
    /// Number of characters left after whitespace and separators are stripped.
    pub normalized_chars: usize,
    pub found_codes: FoundCodes,
    pub destination: Destination,
    pub folder: String,
}

/// Main API entry point: sort a batch of uploads and package the result.
///
/// The access gate is checked before anything touches the disk. The batch
/// is staged into a fresh temporary directory that is removed when this
/// function returns, on success or failure. `archive_out` only appears once
/// the archive is complete.
pub fn run_batch(
    settings: &Settings,
    supplied_secret: &str,
    extractor: &dyn PdfExtractor,
    uploads: &[Upload],
    archive_out: &Path,
) -> Result<RunReport, SortError> {
    AccessGate::new(settings.access_secret.clone()).check(supplied_secret)?;

    session::check_reserved_names(
        uploads,
        settings
            .codes
            .iter()
            .chain(std::iter::once(settings.unidentified_dir.as_str())),
    )?;

    let session = Session::open()?;
    session.stage(uploads)?;

    let mut log = RunLog::new();
    let documents = Organizer::new(extractor, settings).run(session.work_dir(), &mut log)?;

    let staged = session.archive_path(&settings.archive_name);
    let mut archive = archive::write_archive(session.work_dir(), &staged)?;
    publish(&staged, archive_out)?;
    archive.path = archive_out.to_path_buf();

    Ok(RunReport {
        documents,
        log,
        archive,
    })
}

/// Report the codes and destination of one PDF. Nothing is moved.
pub fn scan_pdf(
    settings: &Settings,
    supplied_secret: &str,
    extractor: &dyn PdfExtractor,
    pdf_path: &Path,
) -> Result<ScanReport, SortError> {
    AccessGate::new(settings.access_secret.clone()).check(supplied_secret)?;

    let text = extraction::extract_text(extractor, pdf_path);
    let found_codes = matching::find_codes(&text);
    let destination = classify::classify(&found_codes, &settings.codes);
    let folder = organize::slash_path(&destination.relative_path(&settings.unidentified_dir));

    Ok(ScanReport {
        file_name: pdf_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        backend: extractor.backend_name().to_string(),
        normalized_chars: matching::normalize_text(&text).chars().count(),
        found_codes,
        destination,
        folder,
    })
}

/// Copy a finished archive to its final location in one atomic step.
fn publish(staged: &Path, target: &Path) -> Result<(), SortError> {
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(parent)
        .map_err(|e| SortError::io("create", parent, e))?;
    let mut source =
        std::fs::File::open(staged).map_err(|e| SortError::io("read", staged, e))?;
    std::io::copy(&mut source, tmp.as_file_mut())
        .map_err(|e| SortError::io("write", tmp.path(), e))?;
    tmp.persist(target)
        .map_err(|e| SortError::io("write archive", target, e.error))?;
    Ok(())
}
