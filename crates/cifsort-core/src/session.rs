use crate::error::SortError;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One uploaded file: a bare file name and its raw bytes.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub content: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Upload {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read a file from disk, keeping only its file name.
    pub fn from_path(path: &Path) -> Result<Self, SortError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                SortError::InvalidUpload(format!("'{}' has no usable file name", path.display()))
            })?
            .to_string();
        let content = fs::read(path).map_err(|e| SortError::io("read", path, e))?;
        Ok(Upload { name, content })
    }
}

/// Scratch space for one run. Everything under it is deleted when the
/// session is dropped, whether the run succeeded or not.
pub struct Session {
    dir: TempDir,
    work_dir: PathBuf,
}

impl Session {
    pub fn open() -> Result<Self, SortError> {
        let dir = tempfile::Builder::new()
            .prefix("cifsort-")
            .tempdir()
            .map_err(|e| SortError::io("create", &std::env::temp_dir(), e))?;
        let work_dir = dir.path().join("work");
        fs::create_dir(&work_dir).map_err(|e| SortError::io("create folder", &work_dir, e))?;
        tracing::debug!("opened session in {}", dir.path().display());
        Ok(Session { dir, work_dir })
    }

    /// The folder that gets classified and archived.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Where to write an archive so it stays outside the classified tree.
    pub fn archive_path(&self, archive_name: &str) -> PathBuf {
        self.dir.path().join(archive_name)
    }

    /// Copy uploads verbatim into the working directory.
    pub fn stage(&self, uploads: &[Upload]) -> Result<(), SortError> {
        validate_uploads(uploads)?;
        for upload in uploads {
            let path = self.work_dir.join(&upload.name);
            fs::write(&path, &upload.content).map_err(|e| SortError::io("write", &path, e))?;
        }
        tracing::info!("staged {} upload(s)", uploads.len());
        Ok(())
    }
}

/// Upload names must be bare, distinct file names.
pub fn validate_uploads(uploads: &[Upload]) -> Result<(), SortError> {
    let mut seen = HashSet::new();
    for upload in uploads {
        let name = upload.name.as_str();
        if name.is_empty() || name == "." || name == ".." {
            return Err(SortError::InvalidUpload(format!(
                "'{name}' is not a valid file name"
            )));
        }
        if name.contains(['/', '\\', '\0']) {
            return Err(SortError::InvalidUpload(format!(
                "'{name}' must not contain path separators"
            )));
        }
        if !seen.insert(name) {
            return Err(SortError::InvalidUpload(format!(
                "'{name}' was uploaded more than once"
            )));
        }
    }
    Ok(())
}

/// Reject uploads named like a folder the organizer creates at the root.
pub fn check_reserved_names<'a>(
    uploads: &[Upload],
    reserved: impl IntoIterator<Item = &'a str>,
) -> Result<(), SortError> {
    let reserved: HashSet<&str> = reserved.into_iter().collect();
    match uploads.iter().find(|u| reserved.contains(u.name.as_str())) {
        Some(upload) => Err(SortError::InvalidUpload(format!(
            "'{}' clashes with a destination folder name",
            upload.name
        ))),
        None => Ok(()),
    }
}
