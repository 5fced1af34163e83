pub mod normalize;
pub mod prune;
pub mod relocate;

pub use normalize::normalize_names;
pub use prune::prune_empty_dirs;

use crate::classify::outcome::DocumentOutcome;
use crate::codes::RecognizedCodeSet;
use crate::config::Settings;
use crate::error::SortError;
use crate::extraction::PdfExtractor;
use crate::trace::RunLog;
use std::fs;
use std::path::{Component, Path};

/// Sorts the files lying directly in a working directory into code folders.
///
/// A run goes Setup -> Normalize -> Classify & Move -> Prune. Each phase is
/// also exposed on its own; all of them take the working directory
/// explicitly and never touch anything outside it.
pub struct Organizer<'a> {
    extractor: &'a dyn PdfExtractor,
    codes: &'a RecognizedCodeSet,
    unidentified_dir: &'a str,
}

impl<'a> Organizer<'a> {
    pub fn new(extractor: &'a dyn PdfExtractor, settings: &'a Settings) -> Self {
        Organizer {
            extractor,
            codes: &settings.codes,
            unidentified_dir: &settings.unidentified_dir,
        }
    }

    /// Run every phase over `work_dir`.
    ///
    /// Stops at the first filesystem error; files already moved stay where
    /// they are.
    pub fn run(
        &self,
        work_dir: &Path,
        log: &mut RunLog,
    ) -> Result<Vec<DocumentOutcome>, SortError> {
        tracing::info!("organizing {}", work_dir.display());

        self.setup(work_dir)?;
        normalize_names(work_dir, log)?;
        let outcomes = self.classify_and_move(work_dir, log)?;
        let pruned = prune_empty_dirs(work_dir, log)?;

        tracing::info!(
            "organized {} document(s), removed {} empty folder(s)",
            outcomes.len(),
            pruned
        );
        Ok(outcomes)
    }

    /// Create one folder per recognized code plus the unidentified folder.
    pub fn setup(&self, work_dir: &Path) -> Result<(), SortError> {
        for name in self.codes.iter().chain(std::iter::once(self.unidentified_dir)) {
            let dir = work_dir.join(name);
            fs::create_dir_all(&dir).map_err(|e| SortError::io("create folder", &dir, e))?;
        }
        Ok(())
    }
}

/// Names of the regular files directly inside `dir`, sorted.
///
/// Names that are not valid UTF-8 are skipped; uploads always have
/// UTF-8 names.
pub(crate) fn list_root_files(dir: &Path) -> Result<Vec<String>, SortError> {
    let entries = fs::read_dir(dir).map_err(|e| SortError::io("list", dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SortError::io("list", dir, e))?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::warn!("skipping non UTF-8 file name {:?}", raw),
        }
    }
    names.sort();
    Ok(names)
}

/// File name without its last extension, the way uploads pair up.
pub(crate) fn base_name(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}

pub(crate) fn is_pdf(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

/// Relative path rendered with `/` separators regardless of platform.
pub(crate) fn slash_path(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
