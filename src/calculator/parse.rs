//! @acp:module "Token Parser"
//! @acp:summary "Splits comma-delimited input and parses integer tokens"
//! @acp:domain calculator
//! @acp:layer parser

use crate::error::{CalcError, Result};

/// Token delimiter
pub const DELIMITER: char = ',';

/// Whitespace tolerated around a number: space and U+0009..=U+000D
fn is_token_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Split input into raw tokens, whitespace untouched
pub fn tokenize(input: &str) -> impl Iterator<Item = &str> {
    input.split(DELIMITER)
}

/// @acp:summary "Parse one token as a base-10 signed integer"
///
/// ASCII whitespace around the number is tolerated, an optional sign is
/// accepted. Empty or whitespace-only tokens are malformed. Errors carry the
/// trimmed token text.
pub fn parse_token(token: &str) -> Result<i64> {
    let trimmed = token.trim_matches(is_token_whitespace);
    trimmed
        .parse::<i64>()
        .map_err(|_| CalcError::format(trimmed))
}

/// Parse every token and add them up in encounter order.
///
/// Stops at the first malformed token.
pub fn sum_tokens(input: &str) -> Result<i64> {
    tokenize(input).try_fold(0i64, |total, token| {
        let value = parse_token(token)?;
        total.checked_add(value).ok_or(CalcError::Overflow)
    })
}
