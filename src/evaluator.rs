//! MPIN strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::sections::{
    Section, anniversary_section, commonly_used_section, dob_self_section, dob_spouse_section,
};
use crate::types::{Demographics, MpinEvaluation};
use crate::validity::{MpinError, validate_mpin};

/// Evaluates an MPIN against common values and the holder's dates.
///
/// The MPIN is not validated here; use [`check_mpin`] to reject
/// structurally invalid input first.
///
/// # Arguments
/// * `mpin` - The MPIN to evaluate
/// * `demographics` - Optional personal dates in `DD-MM-YYYY` form
///
/// # Returns
/// A `MpinEvaluation` with every triggered reason, in check order.
pub fn evaluate_mpin(mpin: &SecretString, demographics: &Demographics) -> MpinEvaluation {
    // Orchestrator: every section runs, reasons accumulate
    let sections: [(&str, Section); 4] = [
        ("commonly_used", commonly_used_section),
        ("dob_self", dob_self_section),
        ("dob_spouse", dob_spouse_section),
        ("anniversary", anniversary_section),
    ];

    let mut reasons = Vec::new();
    for (_section_name, section_fn) in sections {
        if let Some(reason) = section_fn(mpin, demographics) {
            #[cfg(feature = "tracing")]
            tracing::debug!("MPIN section {} matched: {}", _section_name, reason);
            reasons.push(reason);
        }
    }

    MpinEvaluation::from_reasons(reasons)
}

/// Validates an MPIN and evaluates it only if it is well formed.
///
/// # Errors
///
/// Returns `MpinError` if the MPIN is not 4 or 6 ASCII digits.
pub fn check_mpin(
    mpin: &SecretString,
    demographics: &Demographics,
) -> Result<MpinEvaluation, MpinError> {
    if let Err(e) = validate_mpin(mpin.expose_secret()) {
        #[cfg(feature = "tracing")]
        tracing::info!("MPIN rejected before evaluation: {}", e);
        return Err(e);
    }
    Ok(evaluate_mpin(mpin, demographics))
}

/// Async version that sends the check outcome via channel.
#[cfg(feature = "async")]
pub async fn check_mpin_tx(
    mpin: &SecretString,
    demographics: Demographics,
    tx: mpsc::Sender<Result<MpinEvaluation, MpinError>>,
) {
    let outcome = check_mpin(mpin, &demographics);

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send MPIN evaluation result: {}", _e);
    }
}
