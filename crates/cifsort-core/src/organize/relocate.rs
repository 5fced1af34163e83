use crate::classify::engine::classify;
use crate::classify::outcome::DocumentOutcome;
use crate::error::SortError;
use crate::extraction::extract_text;
use crate::matching::find_codes;
use crate::organize::{base_name, is_pdf, list_root_files, slash_path, Organizer};
use crate::trace::{LogEntry, RunLog};
use std::fs;
use std::io;
use std::path::Path;

impl Organizer<'_> {
    /// Classify every PDF in `work_dir` and move it, with its sidecars, into
    /// its destination folder.
    ///
    /// PDFs are visited in name order. A PDF that was already carried off as
    /// the sidecar of an earlier PDF with the same base name is skipped.
    pub fn classify_and_move(
        &self,
        work_dir: &Path,
        log: &mut RunLog,
    ) -> Result<Vec<DocumentOutcome>, SortError> {
        let mut outcomes = Vec::new();

        for name in list_root_files(work_dir)? {
            if !is_pdf(&name) {
                continue;
            }
            let pdf_path = work_dir.join(&name);
            if !pdf_path.is_file() {
                tracing::debug!("'{}' already moved with another document", name);
                continue;
            }

            let text = extract_text(self.extractor, &pdf_path);
            let found_codes = find_codes(&text);
            let destination = classify(&found_codes, self.codes);
            tracing::debug!("'{}': found {:?} -> {}", name, found_codes, destination);

            let rel = destination.relative_path(self.unidentified_dir);
            let dest_dir = work_dir.join(&rel);
            fs::create_dir_all(&dest_dir)
                .map_err(|e| SortError::io("create folder", &dest_dir, e))?;

            let moved_files = move_group(work_dir, base_name(&name), &dest_dir)?;
            let folder = slash_path(&rel);

            log.push(LogEntry::Classified {
                file: name.clone(),
                destination: destination.clone(),
                folder: folder.clone(),
                sidecars: moved_files.iter().filter(|f| **f != name).cloned().collect(),
            });

            outcomes.push(DocumentOutcome {
                file_name: name,
                found_codes,
                destination,
                folder,
                moved_files,
            });
        }

        Ok(outcomes)
    }
}

/// Move every regular file in `work_dir` whose base name is `base` into `dest_dir`.
///
/// Refuses to replace a file that already exists at the destination.
pub(crate) fn move_group(
    work_dir: &Path,
    base: &str,
    dest_dir: &Path,
) -> Result<Vec<String>, SortError> {
    let mut moved = Vec::new();

    for name in list_root_files(work_dir)? {
        if base_name(&name) != base {
            continue;
        }

        let source = work_dir.join(&name);
        let target = dest_dir.join(&name);
        if target.symlink_metadata().is_ok() {
            return Err(SortError::io(
                "move",
                &source,
                io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} already exists", target.display()),
                ),
            ));
        }

        fs::rename(&source, &target).map_err(|e| SortError::io("move", &source, e))?;
        tracing::debug!("moved '{}' to {}", name, dest_dir.display());
        moved.push(name);
    }

    Ok(moved)
}
