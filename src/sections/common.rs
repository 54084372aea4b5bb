//! Commonly used section - checks if the MPIN is a popular value.

use crate::common::is_commonly_used;
use crate::types::{Demographics, WeakReason};
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks if the MPIN is in the commonly used set.
///
/// # Returns
/// - `Some(WeakReason::CommonlyUsed)` if the MPIN is commonly used
/// - `None` otherwise
pub fn commonly_used_section(mpin: &SecretString, _demographics: &Demographics) -> SectionResult {
    is_commonly_used(mpin.expose_secret()).then_some(WeakReason::CommonlyUsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commonly_used_section_common_mpin() {
        let mpin = SecretString::new("1111".to_string().into());
        let result = commonly_used_section(&mpin, &Demographics::new());
        assert_eq!(result, Some(WeakReason::CommonlyUsed));
    }

    #[test]
    fn test_commonly_used_section_ignores_demographics() {
        let mpin = SecretString::new("1313".to_string().into());
        let demographics = Demographics::new().with_dob("13-13-2013");
        let result = commonly_used_section(&mpin, &demographics);
        assert_eq!(result, None);
    }
}
