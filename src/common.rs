//! Commonly used MPIN values.
//!
//! Holds the fixed set of MPINs that are chosen disproportionately often,
//! independent of any personal data.

use std::collections::HashSet;
use std::sync::LazyLock;

// Only 4-digit values; 6-digit MPINs have no equivalent list.
const COMMON_MPIN_VALUES: [&str; 14] = [
    "1234", "0000", "1111", "1212", "1122", "2222", "3333", "4444", "5555", "6666", "7777",
    "8888", "9999", "4321",
];

static COMMON_MPINS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_MPIN_VALUES.into_iter().collect());

/// Checks if an MPIN is in the commonly used set.
///
/// Exact string match: no trimming, and leading zeros are significant.
pub fn is_commonly_used(mpin: &str) -> bool {
    COMMON_MPINS.contains(mpin)
}

/// Returns the commonly used values in a stable order.
pub fn common_mpins() -> impl Iterator<Item = &'static str> {
    COMMON_MPIN_VALUES.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_commonly_used_true() {
        assert!(is_commonly_used("1234"));
        assert!(is_commonly_used("0000"));
        assert!(is_commonly_used("4321"));
        assert!(is_commonly_used("1122"));
    }

    #[test]
    fn test_is_commonly_used_false() {
        assert!(!is_commonly_used("1313"));
        assert!(!is_commonly_used("4567"));
    }

    #[test]
    fn test_no_normalization() {
        assert!(!is_commonly_used("000"));
        assert!(!is_commonly_used("000000"));
        assert!(!is_commonly_used(" 1234"));
        assert!(!is_commonly_used("123456"));
    }

    #[test]
    fn test_common_mpins_are_four_digits() {
        assert_eq!(common_mpins().count(), 14);
        assert!(common_mpins().all(|m| m.len() == 4 && m.chars().all(|c| c.is_ascii_digit())));
        assert!(common_mpins().all(is_commonly_used));
    }
}
