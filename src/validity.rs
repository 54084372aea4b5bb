//! Structural MPIN validation.

use thiserror::Error;

/// Accepted MPIN lengths.
pub const VALID_LENGTHS: [usize; 2] = [4, 6];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MpinError {
    #[error("MPIN must contain only digits")]
    NonNumeric,
    #[error("MPIN must be 4 or 6 digits, got {0}")]
    InvalidLength(usize),
}

/// Validates the shape of an MPIN.
///
/// # Errors
///
/// Returns error if:
/// - Any character is not an ASCII digit
/// - Length is not exactly 4 or 6 (the empty string is `InvalidLength(0)`)
pub fn validate_mpin(mpin: &str) -> Result<(), MpinError> {
    if !mpin.chars().all(|c| c.is_ascii_digit()) {
        return Err(MpinError::NonNumeric);
    }
    if !VALID_LENGTHS.contains(&mpin.len()) {
        return Err(MpinError::InvalidLength(mpin.len()));
    }
    Ok(())
}

/// Returns `true` if the MPIN is all digits and 4 or 6 long.
pub fn is_valid_mpin(mpin: &str) -> bool {
    validate_mpin(mpin).is_ok()
}
