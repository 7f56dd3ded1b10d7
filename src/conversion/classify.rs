//! Input token classification

use thiserror::Error;

/// Classification impossible: the input was empty or whitespace-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input is empty")]
pub struct EmptyInput;

/// Independent facts about a trimmed input token.
///
/// The facts are not exclusive: "101" is simultaneously a valid binary,
/// decimal, and hex digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // independent facts, not mode flags
pub struct Classification {
    /// Exactly one character, of any kind.
    pub is_single_char: bool,
    /// Every character is '0' or '1'.
    pub is_binary: bool,
    /// Every character is an ASCII digit.
    pub is_decimal: bool,
    /// Every character is an ASCII hex digit, either case.
    pub is_hex: bool,
}

/// Classify a raw input string.
///
/// Surrounding whitespace is trimmed first; an input that trims to nothing
/// has no classification.
pub fn classify(raw: &str) -> Result<Classification, EmptyInput> {
    let token = raw.trim();
    if token.is_empty() {
        return Err(EmptyInput);
    }
    Ok(Classification {
        is_single_char: token.chars().count() == 1,
        is_binary: token.chars().all(|c| c == '0' || c == '1'),
        is_decimal: token.chars().all(|c| c.is_ascii_digit()),
        is_hex: token.chars().all(|c| c.is_ascii_hexdigit()),
    })
}
