//! Conversion arithmetic and value rendering

use super::Op;
use thiserror::Error;

/// A performed conversion: the operation's label and the rendered value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub label: &'static str,
    pub value: String,
}

/// Errors from a single conversion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("input contains characters outside the expected digit set")]
    InvalidDigits,
    #[error("value exceeds the supported integer range")]
    Overflow,
    #[error("input is not a single character")]
    NotSingleChar,
}

/// Perform one conversion on a raw input string.
///
/// The trimmed token is re-derived here rather than trusting a previously
/// computed classification, so a stale or missing classification can never
/// change the arithmetic.
pub fn convert(raw: &str, op: Op) -> Result<Conversion, ConvertError> {
    let token = raw.trim();
    let value = match op {
        Op::CharToAscii => char_code(token)?,
        // Binary and decimal input parse on the 32-bit range
        Op::BinaryToDecimal => parse_i32(token, 2)?.to_string(),
        Op::BinaryToHex => format!("{:x}", parse_i32(token, 2)?),
        Op::DecimalToBinary => format!("{:b}", parse_i32(token, 10)?),
        Op::DecimalToHex => format!("{:x}", parse_i32(token, 10)?),
        // Hex input parses on the wider 64-bit range
        Op::HexToBinary => format!("{:b}", parse_i64_hex(token)?),
        Op::HexToDecimal => parse_i64_hex(token)?.to_string(),
    };
    Ok(Conversion {
        label: op.label(),
        value,
    })
}

/// Decimal code point of the token's single character.
fn char_code(token: &str) -> Result<String, ConvertError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(u32::from(c).to_string()),
        _ => Err(ConvertError::NotSingleChar),
    }
}

fn parse_i32(token: &str, radix: u32) -> Result<i32, ConvertError> {
    check_digits(token, radix)?;
    i32::from_str_radix(token, radix).map_err(|_| ConvertError::Overflow)
}

fn parse_i64_hex(token: &str) -> Result<i64, ConvertError> {
    check_digits(token, 16)?;
    i64::from_str_radix(token, 16).map_err(|_| ConvertError::Overflow)
}

/// Every character must be a digit of `radix`. Sign characters are not
/// digits, and an empty token has none, so both fail here before any parse
/// error could be mistaken for overflow.
fn check_digits(token: &str, radix: u32) -> Result<(), ConvertError> {
    if token.is_empty() || !token.chars().all(|c| c.is_digit(radix)) {
        return Err(ConvertError::InvalidDigits);
    }
    Ok(())
}
