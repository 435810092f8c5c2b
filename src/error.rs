//! Error types for the calculation engine
//!
//! The calculators themselves never fail. Errors only arise at the edges:
//! parsing enumerated labels, caller-side validation, and file I/O.

use thiserror::Error;

/// Result alias used throughout the crate
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Error)]
pub enum CalcError {
    /// Frequency label outside Daily/Weekly/Monthly/Quarterly/Semi-Annually/Yearly/Annually
    #[error("Unknown frequency: {0}")]
    UnknownFrequency(String),

    #[error("Unknown interest payout: {0}")]
    UnknownPayout(String),

    #[error("Unknown loan period unit: {0}")]
    UnknownLoanUnit(String),

    /// T-bills are only issued at 91, 182 and 364 days
    #[error("Unsupported T-bill maturity: {0} days (expected 91, 182 or 364)")]
    UnsupportedMaturity(u32),

    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl CalcError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Reject negative or non-finite amounts and rates
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalcError::invalid(field, format!("must not be negative (got {})", value)));
    }
    Ok(())
}

/// Reject zero-length periods, which make the closed forms divide by zero
pub(crate) fn ensure_positive_period(field: &'static str, value: u32) -> CalcResult<()> {
    if value == 0 {
        return Err(CalcError::invalid(field, "must be at least 1"));
    }
    Ok(())
}
