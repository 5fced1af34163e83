pub mod builtin;
pub mod schema;

use crate::error::SortError;
use crate::matching::is_canonical_code;
use schema::CodeSetDef;
use std::collections::HashSet;
use std::path::Path;

/// The organization's known CIFs. Fixed for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedCodeSet {
    name: String,
    codes: Vec<String>,
}

impl RecognizedCodeSet {
    /// Build from an already validated definition.
    pub(crate) fn from_def(def: CodeSetDef) -> Self {
        RecognizedCodeSet {
            name: def.name,
            codes: def.codes,
        }
    }

    /// Build from a plain list, validating every entry.
    pub fn new<I, S>(name: &str, codes: I) -> Result<Self, SortError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let def = CodeSetDef {
            name: name.to_string(),
            description: None,
            codes: codes.into_iter().map(Into::into).collect(),
        };
        validate_code_set(&def)?;
        Ok(Self::from_def(def))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Load a code set from a JSON file.
pub fn load_code_set(path: &Path) -> Result<RecognizedCodeSet, SortError> {
    let content = std::fs::read_to_string(path).map_err(|e| SortError::CodesLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_code_set(&content, path)
}

/// Parse a code set from a JSON string.
pub fn parse_code_set(json: &str, source: &Path) -> Result<RecognizedCodeSet, SortError> {
    let def: CodeSetDef = serde_json::from_str(json).map_err(|e| SortError::CodesLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_code_set(&def)?;
    Ok(RecognizedCodeSet::from_def(def))
}

/// Parse a comma separated list such as `B85536134, A80652928`.
///
/// Entries are trimmed and uppercased; blank entries are ignored.
pub fn parse_code_list(list: &str) -> Result<RecognizedCodeSet, SortError> {
    let codes: Vec<String> = list
        .split(',')
        .map(|s| s.trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty())
        .collect();
    RecognizedCodeSet::new("environment", codes)
}

/// Validate that a code set is well-formed.
pub fn validate_code_set(def: &CodeSetDef) -> Result<(), SortError> {
    if def.codes.is_empty() {
        return Err(SortError::CodesInvalid("codes must not be empty".into()));
    }

    let mut seen = HashSet::new();
    for code in &def.codes {
        if !is_canonical_code(code) {
            return Err(SortError::CodesInvalid(format!(
                "'{}' is not a CIF (expected A, B or G followed by 8 digits, uppercase)",
                code
            )));
        }
        if !seen.insert(code.as_str()) {
            return Err(SortError::CodesInvalid(format!(
                "code '{}' is listed more than once",
                code
            )));
        }
    }

    Ok(())
}
