use std::num::IntErrorKind;

use crate::error::InputError;
use crate::game::COLS;

pub const PROMPT: &str = "Pick a spot: ";

/// Parse a 1-based column typed by the player into a board column index.
pub fn parse_column(input: &str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    // Integers too wide for i64 are still numbers, just out of range
    let number: i64 = trimmed.parse().map_err(|err: std::num::ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow => InputError::OutOfRange(i64::MAX),
        IntErrorKind::NegOverflow => InputError::OutOfRange(i64::MIN),
        _ => InputError::NotANumber(trimmed.to_string()),
    })?;

    if (1..=COLS as i64).contains(&number) {
        Ok(number as usize - 1)
    } else {
        Err(InputError::OutOfRange(number))
    }
}
