//! Evaluation result and input types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Final classification of an MPIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum MpinStrength {
    Strong,
    Weak,
}

impl MpinStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            MpinStrength::Strong => "STRONG",
            MpinStrength::Weak => "WEAK",
        }
    }
}

impl fmt::Display for MpinStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an MPIN was classified as weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum WeakReason {
    /// The MPIN is one of the commonly used values.
    CommonlyUsed,
    /// Derived from the holder's own date of birth.
    DemographicDobSelf,
    /// Derived from the spouse's date of birth.
    DemographicDobSpouse,
    /// Derived from the wedding anniversary.
    DemographicAnniversary,
}

impl WeakReason {
    /// Stable tag for the reason, e.g. `COMMONLY_USED`.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeakReason::CommonlyUsed => "COMMONLY_USED",
            WeakReason::DemographicDobSelf => "DEMOGRAPHIC_DOB_SELF",
            WeakReason::DemographicDobSpouse => "DEMOGRAPHIC_DOB_SPOUSE",
            WeakReason::DemographicAnniversary => "DEMOGRAPHIC_ANNIVERSARY",
        }
    }

    /// Human readable message for presentation layers.
    pub fn description(&self) -> &'static str {
        match self {
            WeakReason::CommonlyUsed => "MPIN is one of the most commonly used values",
            WeakReason::DemographicDobSelf => "MPIN can be derived from your date of birth",
            WeakReason::DemographicDobSpouse => {
                "MPIN can be derived from your spouse's date of birth"
            }
            WeakReason::DemographicAnniversary => "MPIN can be derived from your anniversary",
        }
    }
}

impl fmt::Display for WeakReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single MPIN evaluation.
///
/// The strength is derived from the reasons: an evaluation is
/// [`MpinStrength::Weak`] exactly when at least one reason fired.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MpinEvaluation {
    strength: MpinStrength,
    reasons: Vec<WeakReason>,
}

impl MpinEvaluation {
    pub fn from_reasons(reasons: Vec<WeakReason>) -> Self {
        let strength = if reasons.is_empty() {
            MpinStrength::Strong
        } else {
            MpinStrength::Weak
        };
        Self { strength, reasons }
    }

    pub fn strength(&self) -> MpinStrength {
        self.strength
    }

    /// Triggered reasons, in evaluation order.
    pub fn reasons(&self) -> &[WeakReason] {
        &self.reasons
    }

    pub fn is_weak(&self) -> bool {
        self.strength == MpinStrength::Weak
    }

    pub fn has_reason(&self, reason: WeakReason) -> bool {
        self.reasons.contains(&reason)
    }
}

/// Which demographic date a variant was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemographicSource {
    DobSelf,
    DobSpouse,
    Anniversary,
}

impl DemographicSource {
    pub const ALL: [DemographicSource; 3] = [
        DemographicSource::DobSelf,
        DemographicSource::DobSpouse,
        DemographicSource::Anniversary,
    ];

    pub fn reason(&self) -> WeakReason {
        match self {
            DemographicSource::DobSelf => WeakReason::DemographicDobSelf,
            DemographicSource::DobSpouse => WeakReason::DemographicDobSpouse,
            DemographicSource::Anniversary => WeakReason::DemographicAnniversary,
        }
    }
}

/// Personal dates of the MPIN holder, each in `DD-MM-YYYY` form.
///
/// Absent dates are `None` and contribute no variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Demographics {
    pub dob: Option<String>,
    pub spouse_dob: Option<String>,
    pub anniversary: Option<String>,
}

impl Demographics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dob(mut self, dob: impl Into<String>) -> Self {
        self.dob = Some(dob.into());
        self
    }

    pub fn with_spouse_dob(mut self, spouse_dob: impl Into<String>) -> Self {
        self.spouse_dob = Some(spouse_dob.into());
        self
    }

    pub fn with_anniversary(mut self, anniversary: impl Into<String>) -> Self {
        self.anniversary = Some(anniversary.into());
        self
    }

    pub fn get(&self, source: DemographicSource) -> Option<&str> {
        match source {
            DemographicSource::DobSelf => self.dob.as_deref(),
            DemographicSource::DobSpouse => self.spouse_dob.as_deref(),
            DemographicSource::Anniversary => self.anniversary.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_without_reasons_is_strong() {
        let evaluation = MpinEvaluation::from_reasons(vec![]);
        assert_eq!(evaluation.strength(), MpinStrength::Strong);
        assert!(!evaluation.is_weak());
        assert!(evaluation.reasons().is_empty());
    }

    #[test]
    fn test_evaluation_with_reasons_is_weak() {
        let evaluation = MpinEvaluation::from_reasons(vec![
            WeakReason::CommonlyUsed,
            WeakReason::DemographicAnniversary,
        ]);
        assert_eq!(evaluation.strength(), MpinStrength::Weak);
        assert!(evaluation.has_reason(WeakReason::CommonlyUsed));
        assert!(!evaluation.has_reason(WeakReason::DemographicDobSelf));
    }

    #[test]
    fn test_reason_tags() {
        assert_eq!(WeakReason::CommonlyUsed.to_string(), "COMMONLY_USED");
        assert_eq!(WeakReason::DemographicDobSelf.to_string(), "DEMOGRAPHIC_DOB_SELF");
        assert_eq!(WeakReason::DemographicDobSpouse.to_string(), "DEMOGRAPHIC_DOB_SPOUSE");
        assert_eq!(
            WeakReason::DemographicAnniversary.to_string(),
            "DEMOGRAPHIC_ANNIVERSARY"
        );
        assert_eq!(MpinStrength::Weak.to_string(), "WEAK");
        assert_eq!(MpinStrength::Strong.to_string(), "STRONG");
    }

    #[test]
    fn test_demographics_builder() {
        let demographics = Demographics::new()
            .with_dob("02-01-1998")
            .with_anniversary("09-09-2020");

        assert_eq!(demographics.get(DemographicSource::DobSelf), Some("02-01-1998"));
        assert_eq!(demographics.get(DemographicSource::DobSpouse), None);
        assert_eq!(
            demographics.get(DemographicSource::Anniversary),
            Some("09-09-2020")
        );
    }

    #[test]
    fn test_source_reason_mapping() {
        let reasons: Vec<_> = DemographicSource::ALL.iter().map(|s| s.reason()).collect();
        assert_eq!(
            reasons,
            vec![
                WeakReason::DemographicDobSelf,
                WeakReason::DemographicDobSpouse,
                WeakReason::DemographicAnniversary,
            ]
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_evaluation_json_shape() {
        let evaluation = MpinEvaluation::from_reasons(vec![
            WeakReason::CommonlyUsed,
            WeakReason::DemographicDobSelf,
        ]);
        let json = serde_json::to_value(&evaluation).expect("Failed to serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "strength": "WEAK",
                "reasons": ["COMMONLY_USED", "DEMOGRAPHIC_DOB_SELF"],
            })
        );
    }

    #[test]
    fn test_demographics_missing_fields_default_to_none() {
        let demographics: Demographics =
            serde_json::from_str(r#"{"dob": "02-01-1998"}"#).expect("Failed to deserialize");
        assert_eq!(demographics, Demographics::new().with_dob("02-01-1998"));
    }
}
