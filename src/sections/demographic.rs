//! Demographic sections - check if the MPIN derives from a personal date.

use crate::dates::date_variants;
use crate::types::{DemographicSource, Demographics};
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

fn demographic_section(
    mpin: &SecretString,
    demographics: &Demographics,
    source: DemographicSource,
) -> SectionResult {
    let mpin = mpin.expose_secret();
    date_variants(demographics.get(source))
        .iter()
        .any(|variant| variant == mpin)
        .then_some(source.reason())
}

/// Checks the MPIN against variants of the holder's date of birth.
pub fn dob_self_section(mpin: &SecretString, demographics: &Demographics) -> SectionResult {
    demographic_section(mpin, demographics, DemographicSource::DobSelf)
}

/// Checks the MPIN against variants of the spouse's date of birth.
pub fn dob_spouse_section(mpin: &SecretString, demographics: &Demographics) -> SectionResult {
    demographic_section(mpin, demographics, DemographicSource::DobSpouse)
}

/// Checks the MPIN against variants of the anniversary.
pub fn anniversary_section(mpin: &SecretString, demographics: &Demographics) -> SectionResult {
    demographic_section(mpin, demographics, DemographicSource::Anniversary)
}
