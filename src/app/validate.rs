//! Size input validation.

use std::num::IntErrorKind;

use crate::error::InputError;

/// Parse the size input's text into squares per side.
///
/// The text is read the way a JavaScript number field is: decimal with an
/// optional fraction or exponent (`"4.0"` and `"1e1"` are whole numbers), or
/// an unsigned `0x`, `0o` or `0b` integer literal. Non-numbers and fractions
/// are rejected before the range check.
pub fn parse_size(text: &str, max: u32) -> Result<u32, InputError> {
    let trimmed = text.trim();
    let whole = match radix_literal(trimmed) {
        Some(literal) => literal.ok_or_else(|| InputError::NonIntegerSize(text.to_string()))?,
        None => decimal(trimmed).ok_or_else(|| InputError::NonIntegerSize(text.to_string()))?,
    };

    if whole > i64::from(max) {
        return Err(InputError::SizeTooLarge { value: whole, max });
    }
    u32::try_from(whole)
        .ok()
        .filter(|&side| side > 0)
        .ok_or(InputError::SizeNotPositive(whole))
}

/// `None` when `text` has no radix prefix; `Some(None)` when the digits after
/// one are invalid. Values past `i64::MAX` saturate.
fn radix_literal(text: &str) -> Option<Option<i64>> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = text.get(2..)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }
    let value = match u64::from_str_radix(digits, radix) {
        Ok(value) => i64::try_from(value).unwrap_or(i64::MAX),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(_) => return Some(None),
    };
    Some(Some(value))
}

/// Whole decimal value, or `None` for non-numbers, fractions and infinities.
fn decimal(text: &str) -> Option<i64> {
    let value: f64 = text.parse().ok()?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    // Whole and finite; `as` saturates anything beyond i64.
    #[allow(clippy::cast_possible_truncation)]
    let whole = value as i64;
    Some(whole)
}
