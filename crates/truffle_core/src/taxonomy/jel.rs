//! JEL code lookup and letter-axis helpers.
//!
//! # Invariants
//! - `letter_axis()` order is fixed and defines plot x positions.
//! - `describe` resolves exact code, then category, then `"Unknown"`.

use super::table::{JEL_CATEGORIES, JEL_CODE_DESCRIPTIONS};
use crate::model::code::ClassificationCode;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Description returned when neither the code nor its letter is registered.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";
/// Category name returned for unregistered letters.
pub const UNKNOWN_CATEGORY: &str = "Unknown category";

static CODE_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| JEL_CODE_DESCRIPTIONS.iter().copied().collect());

static LETTER_AXIS: Lazy<Vec<&'static str>> =
    Lazy::new(|| JEL_CATEGORIES.iter().map(|(letter, _)| *letter).collect());

/// Ordered category letters along the plot x axis.
pub fn letter_axis() -> &'static [&'static str] {
    LETTER_AXIS.as_slice()
}

/// Zero-based x position of `letter`, or `None` when unregistered.
pub fn axis_index(letter: &str) -> Option<usize> {
    LETTER_AXIS
        .iter()
        .position(|known| known.eq_ignore_ascii_case(letter))
}

/// Splits raw code text into `(letter, number)`.
///
/// Returns `None` for text that is not `letters + digits` with a number of
/// at most 99.
pub fn parse_code(code: &str) -> Option<(String, u8)> {
    ClassificationCode::parse(code)
        .ok()
        .map(|parsed| (parsed.letter().to_string(), parsed.number()))
}

/// Formats a letter/number pair as a code string with a two-digit number.
pub fn format_code(letter: &str, number: u8) -> String {
    format!("{}{number:02}", letter.to_ascii_uppercase())
}

/// Human-readable name of a top-level category.
pub fn category_name(letter: &str) -> String {
    category_lookup(letter)
        .unwrap_or(UNKNOWN_CATEGORY)
        .to_string()
}

/// Display description for raw code text.
///
/// Falls back to the category name for unregistered codes with a known
/// letter, and to [`UNKNOWN_DESCRIPTION`] otherwise.
pub fn describe(code: &str) -> String {
    match ClassificationCode::parse(code) {
        Ok(parsed) => describe_code(&parsed),
        Err(_) => UNKNOWN_DESCRIPTION.to_string(),
    }
}

/// Same as [`describe`] for an already parsed code.
pub fn describe_code(code: &ClassificationCode) -> String {
    let key = code.to_string();
    if let Some(description) = CODE_INDEX.get(key.as_str()) {
        return (*description).to_string();
    }
    category_lookup(code.letter())
        .unwrap_or(UNKNOWN_DESCRIPTION)
        .to_string()
}

fn category_lookup(letter: &str) -> Option<&'static str> {
    JEL_CATEGORIES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(letter.trim()))
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::{axis_index, category_lookup, letter_axis};
    use crate::taxonomy::table::JEL_CODE_DESCRIPTIONS;

    #[test]
    fn axis_has_twenty_letters_ending_in_y_z() {
        let axis = letter_axis();
        assert_eq!(axis.len(), 20);
        assert_eq!(axis.first(), Some(&"A"));
        assert_eq!(&axis[18..], &["Y", "Z"]);
        assert_eq!(axis_index("r"), Some(17));
        assert_eq!(axis_index("S"), None);
    }

    #[test]
    fn every_registered_code_belongs_to_a_known_category() {
        for (code, description) in JEL_CODE_DESCRIPTIONS {
            assert!(!description.is_empty(), "{code} has empty description");
            assert!(
                category_lookup(&code[..1]).is_some(),
                "{code} has unregistered letter"
            );
        }
    }
}
