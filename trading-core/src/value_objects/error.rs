use thiserror::Error;

/// Errors produced when parsing fixed-point values from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty string")]
    Empty,

    #[error("invalid numeric literal: {0:?}")]
    InvalidLiteral(String),

    #[error("value out of range: {0:?}")]
    Overflow(String),
}

/// Parse a decimal literal into an integer scaled by `10^decimals`.
///
/// Digits beyond `decimals` are truncated, not rounded.
pub(crate) fn parse_fixed_point(input: &str, decimals: u8) -> Result<i64, ParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let invalid = || ParseError::InvalidLiteral(s.to_string());
    let overflow = || ParseError::Overflow(s.to_string());

    let (negative, body) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (int_str, frac_str) = body.split_once('.').unwrap_or((body, ""));
    if int_str.is_empty() && frac_str.is_empty() {
        return Err(invalid());
    }
    if !int_str.bytes().all(|b| b.is_ascii_digit()) || !frac_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let scale = 10i64.pow(decimals as u32);
    let int_part: i64 = if int_str.is_empty() {
        0
    } else {
        int_str.parse().map_err(|_| overflow())?
    };

    let digits = &frac_str[..frac_str.len().min(decimals as usize)];
    let frac_scaled = if digits.is_empty() {
        0
    } else {
        let frac: i64 = digits.parse().map_err(|_| invalid())?;
        frac * 10i64.pow((decimals as usize - digits.len()) as u32)
    };

    let raw = int_part
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac_scaled))
        .ok_or_else(overflow)?;

    Ok(if negative { -raw } else { raw })
}
