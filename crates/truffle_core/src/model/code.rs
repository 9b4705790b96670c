//! Classification (JEL) code value type.
//!
//! # Responsibility
//! - Parse raw code strings such as `J24` into a typed letter/number pair.
//! - Render codes with a zero-padded two-digit number.
//!
//! # Invariants
//! - `letter` is non-empty, ASCII alphabetic and uppercase.
//! - `number` is always within `0..=99`.
//! - Whether the letter is a registered category is not checked here; see
//!   `taxonomy::jel`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Largest numeric part accepted by a classification code.
pub const MAX_CODE_NUMBER: u8 = 99;

static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)([0-9]+)$").expect("valid code regex"));

/// Two-part classification identifier (`letter` + `number`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassificationCode {
    letter: String,
    number: u8,
}

/// Parse failure for raw classification code text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeParseError {
    /// Input was blank after trimming.
    Empty,
    /// Input is not `letters` followed by `digits`.
    Malformed(String),
    /// Numeric part is larger than [`MAX_CODE_NUMBER`].
    NumberOutOfRange(String),
}

impl Display for CodeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "classification code must not be empty"),
            Self::Malformed(value) => write!(
                f,
                "classification code is malformed: `{value}` (expected letters followed by digits)"
            ),
            Self::NumberOutOfRange(value) => write!(
                f,
                "classification code number is out of range: `{value}` (expected 0..={MAX_CODE_NUMBER})"
            ),
        }
    }
}

impl Error for CodeParseError {}

impl ClassificationCode {
    /// Builds a code from already-split parts.
    ///
    /// The letter is normalized to uppercase.
    pub fn new(letter: &str, number: u8) -> Result<Self, CodeParseError> {
        let letter = letter.trim();
        if letter.is_empty() {
            return Err(CodeParseError::Empty);
        }
        if !letter.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(CodeParseError::Malformed(letter.to_string()));
        }
        if number > MAX_CODE_NUMBER {
            return Err(CodeParseError::NumberOutOfRange(format!("{letter}{number}")));
        }
        Ok(Self {
            letter: letter.to_ascii_uppercase(),
            number,
        })
    }

    /// Parses raw code text such as `D91` or `a5`.
    pub fn parse(raw: &str) -> Result<Self, CodeParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CodeParseError::Empty);
        }

        let caps = CODE_RE
            .captures(trimmed)
            .ok_or_else(|| CodeParseError::Malformed(trimmed.to_string()))?;
        let letter = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let digits = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

        // Long digit runs overflow u8 parsing; report them as out of range.
        let number = digits
            .parse::<u8>()
            .ok()
            .filter(|value| *value <= MAX_CODE_NUMBER)
            .ok_or_else(|| CodeParseError::NumberOutOfRange(trimmed.to_string()))?;

        Self::new(letter, number)
    }

    /// Leading category letter(s), uppercase.
    pub fn letter(&self) -> &str {
        &self.letter
    }

    /// Single leading letter naming the broad category (`Z` for `ZZ99`).
    pub fn category_letter(&self) -> &str {
        &self.letter[..1]
    }

    /// Numeric subcategory in `0..=99`.
    pub fn number(&self) -> u8 {
        self.number
    }
}

impl Display for ClassificationCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:02}", self.letter, self.number)
    }
}

impl FromStr for ClassificationCode {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClassificationCode {
    type Error = CodeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClassificationCode> for String {
    fn from(value: ClassificationCode) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassificationCode, CodeParseError};

    #[test]
    fn parse_splits_letter_and_number() {
        let code = ClassificationCode::parse("J24").unwrap();
        assert_eq!(code.letter(), "J");
        assert_eq!(code.number(), 24);
    }

    #[test]
    fn display_pads_single_digit_numbers() {
        let code = ClassificationCode::parse("a5").unwrap();
        assert_eq!(code.to_string(), "A05");
    }

    #[test]
    fn parse_keeps_multi_letter_prefix() {
        let code = ClassificationCode::parse("ZZ99").unwrap();
        assert_eq!(code.letter(), "ZZ");
        assert_eq!(code.category_letter(), "Z");
        assert_eq!(code.number(), 99);
    }

    #[test]
    fn parse_rejects_malformed_and_out_of_range_input() {
        assert_eq!(ClassificationCode::parse("  "), Err(CodeParseError::Empty));
        assert!(matches!(
            ClassificationCode::parse("12A"),
            Err(CodeParseError::Malformed(_))
        ));
        assert!(matches!(
            ClassificationCode::parse("A100"),
            Err(CodeParseError::NumberOutOfRange(_))
        ));
        assert!(matches!(
            ClassificationCode::parse("A99999999999"),
            Err(CodeParseError::NumberOutOfRange(_))
        ));
    }

    #[test]
    fn serde_uses_plain_string_form() {
        let code = ClassificationCode::parse("E52").unwrap();
        let json = serde_json::to_value(&code).unwrap();
        assert_eq!(json, "E52");

        let err = serde_json::from_value::<ClassificationCode>(serde_json::json!("E-52"))
            .unwrap_err();
        assert!(err.to_string().contains("malformed"));
    }
}
