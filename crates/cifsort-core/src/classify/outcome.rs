use crate::matching::FoundCodes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Where a document (and its sidecars) ends up, relative to the working root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Destination {
    /// `<root>/<primary>`
    Single { primary: String },
    /// `<root>/<primary>/<secondary>`. The secondary code need not be recognized.
    Pair { primary: String, secondary: String },
    /// `<root>/<unidentified folder>`
    Unidentified,
}

impl Destination {
    /// Path of the destination folder relative to the working directory.
    pub fn relative_path(&self, unidentified_dir: &str) -> PathBuf {
        match self {
            Destination::Single { primary } => PathBuf::from(primary),
            Destination::Pair { primary, secondary } => PathBuf::from(primary).join(secondary),
            Destination::Unidentified => PathBuf::from(unidentified_dir),
        }
    }

    pub fn primary(&self) -> Option<&str> {
        match self {
            Destination::Single { primary } | Destination::Pair { primary, .. } => Some(primary),
            Destination::Unidentified => None,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Single { primary } => write!(f, "{primary}"),
            Destination::Pair { primary, secondary } => write!(f, "{primary}/{secondary}"),
            Destination::Unidentified => write!(f, "unidentified"),
        }
    }
}

/// Result of classifying one PDF during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentOutcome {
    /// File name of the anchor PDF.
    pub file_name: String,
    /// Every code found in the PDF, in discovery order.
    pub found_codes: FoundCodes,
    pub destination: Destination,
    /// Destination folder relative to the working root, `/`-separated.
    pub folder: String,
    /// Names of every file moved with this PDF, the PDF included.
    pub moved_files: Vec<String>,
}
