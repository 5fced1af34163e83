use crate::error::SortError;
use crate::organize::list_root_files;
use crate::trace::{LogEntry, RunLog};
use std::fs;
use std::path::Path;

/// Trim leading and trailing whitespace from every file name in `work_dir`.
///
/// A file is left alone when the trimmed name is blank or already taken, so
/// no upload is ever overwritten. Both cases are logged as skipped.
pub fn normalize_names(work_dir: &Path, log: &mut RunLog) -> Result<(), SortError> {
    for name in list_root_files(work_dir)? {
        let trimmed = name.trim();
        if trimmed == name {
            continue;
        }

        if trimmed.is_empty() {
            tracing::warn!("not renaming '{}': name is blank", name);
            log.push(LogEntry::RenameSkipped {
                reason: "name is blank".into(),
                name,
            });
            continue;
        }

        let source = work_dir.join(&name);
        let target = work_dir.join(trimmed);
        if target.symlink_metadata().is_ok() {
            tracing::warn!("not renaming '{}': '{}' already exists", name, trimmed);
            log.push(LogEntry::RenameSkipped {
                reason: format!("'{trimmed}' already exists"),
                name,
            });
            continue;
        }

        fs::rename(&source, &target).map_err(|e| SortError::io("rename", &source, e))?;
        log.push(LogEntry::Renamed {
            to: trimmed.to_string(),
            from: name,
        });
    }
    Ok(())
}
