use crate::error::SortError;
use crate::organize::slash_path;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// What ended up in a written archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    /// Entry names, `/`-separated and relative to the archived root.
    pub entries: Vec<String>,
    pub size_bytes: u64,
}

/// Zip every file below `root` into `archive_path`, keeping the folder layout.
///
/// Entries are written in sorted order. The archive never contains itself,
/// even when `archive_path` lies inside `root`. Empty folders are not stored.
pub fn write_archive(root: &Path, archive_path: &Path) -> Result<ArchiveSummary, SortError> {
    let file =
        File::create(archive_path).map_err(|e| SortError::io("create archive", archive_path, e))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || is_same_file(entry.path(), archive_path) {
            continue;
        }

        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let name = slash_path(rel);

        zip.start_file(name.clone(), options)?;
        let mut source =
            File::open(entry.path()).map_err(|e| SortError::io("read", entry.path(), e))?;
        io::copy(&mut source, &mut zip).map_err(|e| SortError::io("archive", entry.path(), e))?;
        tracing::debug!("archived {}", name);
        entries.push(name);
    }

    let mut writer = zip.finish()?;
    io::Write::flush(&mut writer).map_err(|e| SortError::io("write archive", archive_path, e))?;
    drop(writer);

    let size_bytes = fs::metadata(archive_path)
        .map_err(|e| SortError::io("stat archive", archive_path, e))?
        .len();
    tracing::info!(
        "wrote {} ({} entries, {} bytes)",
        archive_path.display(),
        entries.len(),
        size_bytes
    );

    Ok(ArchiveSummary {
        path: archive_path.to_path_buf(),
        entries,
        size_bytes,
    })
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
