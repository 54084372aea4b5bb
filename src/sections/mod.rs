//! MPIN evaluation sections
//!
//! Each section runs one independent check and yields at most one reason.

mod common;
mod demographic;

use secrecy::SecretString;

use crate::types::{Demographics, WeakReason};

pub use common::commonly_used_section;
pub use demographic::{anniversary_section, dob_self_section, dob_spouse_section};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section matched, MPIN is weak for this reason
/// - `None` - Section passed
pub type SectionResult = Option<WeakReason>;

/// Signature shared by every section.
pub type Section = fn(&SecretString, &Demographics) -> SectionResult;
