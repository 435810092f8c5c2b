//! Retirement corpus projection with inflation adjustment

use crate::error::{ensure_non_negative, CalcResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementPlannerInputs {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_balance: f64,
    pub monthly_contribution: f64,

    /// Expected nominal annual return in percent
    pub expected_return: f64,

    /// Expected annual inflation in percent
    pub inflation_rate: f64,
}

impl RetirementPlannerInputs {
    /// Zero when already at or past retirement age
    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }

    /// Retirement age at or below current age is valid and yields an empty projection
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("currentBalance", self.current_balance)?;
        ensure_non_negative("monthlyContribution", self.monthly_contribution)?;
        ensure_non_negative("expectedReturn", self.expected_return)?;
        ensure_non_negative("inflationRate", self.inflation_rate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementProjectionRow {
    pub year: u32,
    /// Age at the end of this year
    pub age: u32,
    pub start_balance: f64,
    pub contribution: f64,
    pub interest: f64,
    pub end_balance: f64,
    /// End balance in today's money
    pub inflation_adjusted_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementPlannerOutputs {
    pub projected_corpus_nominal: f64,
    pub projected_corpus_real: f64,

    /// Inflation-adjusted return in percent, `(1 + r) / (1 + i) - 1`. Informational only
    pub real_return: f64,

    pub yearly_projection: Vec<RetirementProjectionRow>,
}

/// Grow the balance once a year, crediting interest on the opening balance and
/// then the year's contributions as an end-of-year deposit.
pub fn compute(inputs: &RetirementPlannerInputs) -> RetirementPlannerOutputs {
    let years = inputs.years_to_retirement();
    let r = inputs.expected_return / 100.0;
    let inflation = inputs.inflation_rate / 100.0;
    let annual_contribution = inputs.monthly_contribution * 12.0;
    let real_return = (1.0 + r) / (1.0 + inflation) - 1.0;

    log::debug!(
        "Retirement: age {} -> {} balance={:.2} monthly={:.2} return={}% inflation={}%",
        inputs.current_age,
        inputs.retirement_age,
        inputs.current_balance,
        inputs.monthly_contribution,
        inputs.expected_return,
        inputs.inflation_rate,
    );
    if years == 0 {
        log::debug!("No years to retirement, corpus is the current balance");
    }

    let mut yearly_projection = Vec::with_capacity(years as usize);
    let mut balance = inputs.current_balance;
    for year in 1..=years {
        let start_balance = balance;
        let interest = balance * r;
        balance += interest + annual_contribution;

        yearly_projection.push(RetirementProjectionRow {
            year,
            age: inputs.current_age + year,
            start_balance,
            contribution: annual_contribution,
            interest,
            end_balance: balance,
            inflation_adjusted_value: balance / (1.0 + inflation).powi(year as i32),
        });
    }

    RetirementPlannerOutputs {
        projected_corpus_nominal: balance,
        projected_corpus_real: balance / (1.0 + inflation).powi(years as i32),
        real_return: real_return * 100.0,
        yearly_projection,
    }
}
