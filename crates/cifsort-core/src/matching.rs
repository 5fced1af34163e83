use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Letter from {A, B, G} followed by exactly eight digits.
static CIF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[ABG][0-9]{8}").expect("valid CIF pattern"));

/// Unique codes found in one document, in order of first occurrence
/// within the normalized text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoundCodes(Vec<String>);

impl FoundCodes {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|c| c == code)
    }

    fn push_unique(&mut self, code: String) {
        if !self.contains(&code) {
            self.0.push(code);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for FoundCodes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut found = FoundCodes::default();
        for code in iter {
            found.push_unique(code.into());
        }
        found
    }
}

/// Strip whitespace and the layout artifacts `.`, `_`, `-` from the whole text.
///
/// PDF layouts often render a code as "B 8553 6134" or "B-85536134". Removing
/// these characters everywhere also glues unrelated neighbouring tokens
/// together; the membership check in the classifier filters that noise.
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '.' | '_' | '-'))
        .collect()
}

/// Find every CIF in raw extracted text, uppercased and de-duplicated.
pub fn find_codes(text: &str) -> FoundCodes {
    let normalized = normalize_text(text);
    CIF_PATTERN
        .find_iter(&normalized)
        .map(|m| m.as_str().to_ascii_uppercase())
        .collect()
}

/// True if `s` is exactly one CIF in canonical (uppercase) form.
pub fn is_canonical_code(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 9
        && matches!(bytes[0], b'A' | b'B' | b'G')
        && bytes[1..].iter().all(u8::is_ascii_digit)
}
