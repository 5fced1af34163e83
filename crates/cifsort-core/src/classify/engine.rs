use crate::classify::outcome::Destination;
use crate::codes::RecognizedCodeSet;
use crate::matching::FoundCodes;

/// Decide where a document goes from the codes found in it.
///
/// The primary code is the first found code that is recognized. The secondary
/// is the first other found code, recognized or not. "First" always means
/// first occurrence in the normalized text, so the result is deterministic.
pub fn classify(found: &FoundCodes, recognized: &RecognizedCodeSet) -> Destination {
    let Some(primary) = found.iter().find(|code| recognized.contains(code)) else {
        return Destination::Unidentified;
    };

    match found.iter().find(|code| *code != primary) {
        Some(secondary) => Destination::Pair {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        },
        None => Destination::Single {
            primary: primary.to_string(),
        },
    }
}
