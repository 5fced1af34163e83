use crate::codes::{self, builtin, RecognizedCodeSet};
use crate::error::SortError;
use std::path::{Path, PathBuf};

pub const DEFAULT_UNIDENTIFIED_DIR: &str = "Sin identificar";
pub const DEFAULT_ARCHIVE_NAME: &str = "facturas_clasificadas.zip";

pub const ENV_PASSWORD: &str = "APP_PASSWORD";
pub const ENV_CODES: &str = "CIFSORT_CODES";
pub const ENV_CODES_FILE: &str = "CIFSORT_CODES_FILE";
pub const ENV_UNIDENTIFIED_DIR: &str = "CIFSORT_UNIDENTIFIED_DIR";
pub const ENV_ARCHIVE_NAME: &str = "CIFSORT_ARCHIVE_NAME";

/// Startup configuration for a classification run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub codes: RecognizedCodeSet,
    /// Folder for documents without a recognized code.
    pub unidentified_dir: String,
    /// File name of the produced archive.
    pub archive_name: String,
    /// Shared secret for the access gate. `None` locks every gated operation.
    pub access_secret: Option<String>,
}

impl Settings {
    /// Given codes with default names and no access secret.
    pub fn with_codes(codes: RecognizedCodeSet) -> Self {
        Settings {
            codes,
            unidentified_dir: DEFAULT_UNIDENTIFIED_DIR.to_string(),
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
            access_secret: None,
        }
    }

    /// Read settings from the process environment.
    ///
    /// `codes_file` (usually from the command line) takes precedence over
    /// `CIFSORT_CODES_FILE`, which takes precedence over `CIFSORT_CODES`.
    /// Without any of them the built-in list is used.
    pub fn from_env(codes_file: Option<&Path>) -> Result<Self, SortError> {
        Self::from_lookup(codes_file, |key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with an explicit variable lookup.
    pub fn from_lookup<F>(codes_file: Option<&Path>, lookup: F) -> Result<Self, SortError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let env_file = non_blank(ENV_CODES_FILE).map(PathBuf::from);
        let codes = match (codes_file, env_file, non_blank(ENV_CODES)) {
            (Some(path), _, _) => codes::load_code_set(path)?,
            (None, Some(path), _) => codes::load_code_set(&path)?,
            (None, None, Some(list)) => codes::parse_code_list(&list)?,
            (None, None, None) => builtin::builtin_codes()?,
        };

        let unidentified_dir = non_blank(ENV_UNIDENTIFIED_DIR)
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_UNIDENTIFIED_DIR.to_string());
        validate_plain_name(&unidentified_dir, ENV_UNIDENTIFIED_DIR)?;

        let archive_name = non_blank(ENV_ARCHIVE_NAME)
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_ARCHIVE_NAME.to_string());
        validate_plain_name(&archive_name, ENV_ARCHIVE_NAME)?;

        Ok(Settings {
            codes,
            unidentified_dir,
            archive_name,
            access_secret: lookup(ENV_PASSWORD),
        })
    }
}

fn validate_plain_name(name: &str, key: &str) -> Result<(), SortError> {
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(SortError::Config(format!(
            "{key} must be a plain file name, got '{name}'"
        )));
    }
    Ok(())
}
