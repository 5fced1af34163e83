use crate::classify::outcome::Destination;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One notable action taken during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LogEntry {
    Renamed {
        from: String,
        to: String,
    },
    /// A name could not be cleaned without clobbering another file.
    RenameSkipped {
        name: String,
        reason: String,
    },
    Classified {
        file: String,
        destination: Destination,
        folder: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        sidecars: Vec<String>,
    },
    Pruned {
        folder: String,
    },
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::Renamed { from, to } => write!(f, "Renamed: '{from}' -> '{to}'"),
            LogEntry::RenameSkipped { name, reason } => {
                write!(f, "Rename skipped: '{name}' ({reason})")
            }
            LogEntry::Classified {
                file,
                destination,
                folder,
                sidecars,
            } => {
                match destination {
                    Destination::Unidentified => write!(
                        f,
                        "'{file}' -> no recognized CIF. Moved to '{folder}'"
                    )?,
                    Destination::Single { primary } => {
                        write!(f, "'{file}' -> single CIF found: {primary}")?
                    }
                    Destination::Pair { primary, secondary } => write!(
                        f,
                        "'{file}' -> multiple CIFs. Primary: {primary}, secondary: {secondary}"
                    )?,
                }
                if !sidecars.is_empty() {
                    write!(f, " (with {})", sidecars.join(", "))?;
                }
                Ok(())
            }
            LogEntry::Pruned { folder } => write!(f, "Removed empty folder: '{folder}'"),
        }
    }
}

/// Append-only record of a run, in the order actions happened.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunLog {
    entries: Vec<LogEntry>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        tracing::info!("{entry}");
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One human-readable line per entry.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
