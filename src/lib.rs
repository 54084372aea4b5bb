//! MPIN strength evaluation library
//!
//! This library classifies a 4 or 6 digit MPIN as weak when it is one of
//! the commonly used values or can be derived from the holder's personal
//! dates (own date of birth, spouse's date of birth, wedding anniversary).
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation for UI event loops
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Enables serialization of evaluation results
//!
//! # Example
//!
//! ```rust
//! use mpin_strength::{check_mpin, Demographics, MpinStrength, WeakReason};
//! use secrecy::SecretString;
//!
//! let mpin = SecretString::new("0201".to_string().into());
//! let demographics = Demographics::new().with_dob("02-01-1998");
//!
//! let evaluation = check_mpin(&mpin, &demographics).expect("MPIN is well formed");
//!
//! assert_eq!(evaluation.strength(), MpinStrength::Weak);
//! assert_eq!(evaluation.reasons(), &[WeakReason::DemographicDobSelf]);
//! ```

// Internal modules
mod common;
mod dates;
mod evaluator;
mod sections;
mod types;
mod validity;

// Public API
pub use common::{common_mpins, is_commonly_used};
pub use dates::{DateComponent, DateParseError, DateParts, date_variants};
pub use evaluator::{check_mpin, evaluate_mpin};
pub use types::{DemographicSource, Demographics, MpinEvaluation, MpinStrength, WeakReason};
pub use validity::{MpinError, VALID_LENGTHS, is_valid_mpin, validate_mpin};

#[cfg(feature = "async")]
pub use evaluator::check_mpin_tx;
