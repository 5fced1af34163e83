use crate::codes::schema::CodeSetDef;
use crate::codes::{validate_code_set, RecognizedCodeSet};
use crate::error::SortError;

const RECOGNIZED_JSON: &str = include_str!("../../../../codes/recognized.json");

/// The code list shipped with the binary.
pub fn builtin_def() -> Result<CodeSetDef, SortError> {
    let def: CodeSetDef = serde_json::from_str(RECOGNIZED_JSON)?;
    validate_code_set(&def)?;
    Ok(def)
}

pub fn builtin_codes() -> Result<RecognizedCodeSet, SortError> {
    Ok(RecognizedCodeSet::from_def(builtin_def()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_loads() {
        let codes = builtin_codes().unwrap();
        assert_eq!(codes.len(), 11);
        assert_eq!(codes.iter().next(), Some("B85536134"));
        assert!(codes.contains("A80652928"));
        assert!(codes.contains("G83844316"));
    }
}
