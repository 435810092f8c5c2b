//! Compound interest growth with periodic, optionally escalating, contributions

use crate::error::{ensure_non_negative, ensure_positive_period, CalcResult};
use crate::frequency::Frequency;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInterestInputs {
    pub initial_investment: f64,

    /// Amount added at each contribution date
    pub contribution_amount: f64,

    pub contribution_frequency: Frequency,

    /// Annual rate in percent (6.5 = 6.5%)
    pub annual_interest_rate: f64,

    pub investment_period_years: u32,

    pub compounding_frequency: Frequency,

    /// Yearly step-up of the contribution, in percent. None = flat contributions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_deposit_increment: Option<f64>,
}

impl CompoundInterestInputs {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("initialInvestment", self.initial_investment)?;
        ensure_non_negative("contributionAmount", self.contribution_amount)?;
        ensure_non_negative("annualInterestRate", self.annual_interest_rate)?;
        ensure_positive_period("investmentPeriodYears", self.investment_period_years)?;
        if let Some(increment) = self.annual_deposit_increment {
            ensure_non_negative("annualDepositIncrement", increment)?;
        }
        Ok(())
    }
}

/// One year of growth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInterestRow {
    pub year: u32,
    pub starting_balance: f64,
    pub contribution: f64,
    pub interest_earned: f64,
    pub ending_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInterestOutputs {
    pub final_amount: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
    pub annual_breakdown: Vec<CompoundInterestRow>,
}

/// Project the investment year by year.
///
/// Each year the opening balance compounds `n` times and the year's contributions
/// accumulate through the annuity factor
/// `((1 + r/n)^n - 1) / ((1 + r/n)^(n/f) - 1)`, where `f` is the number of
/// contributions per year. With a zero rate the balance is just the sum of deposits
/// and no per-year breakdown is produced.
pub fn compute(inputs: &CompoundInterestInputs) -> CompoundInterestOutputs {
    let r = inputs.annual_interest_rate / 100.0;
    let n = inputs.compounding_frequency.periods_per_year() as f64;
    let f = inputs.contribution_frequency.periods_per_year() as f64;
    let years = inputs.investment_period_years;
    let increment = inputs.annual_deposit_increment.unwrap_or(0.0) / 100.0;

    log::debug!(
        "Compound interest: initial={:.2} contribution={:.2} x{} rate={}% years={} compounding={}",
        inputs.initial_investment,
        inputs.contribution_amount,
        f,
        inputs.annual_interest_rate,
        years,
        inputs.compounding_frequency,
    );

    if r == 0.0 {
        log::debug!("Zero rate, using straight sum of contributions");
        let total_contributions = inputs.contribution_amount * f * years as f64;
        return CompoundInterestOutputs {
            final_amount: inputs.initial_investment + total_contributions,
            total_contributions,
            total_interest: 0.0,
            annual_breakdown: Vec::new(),
        };
    }

    let growth_per_period = 1.0 + r / n;
    let year_growth = growth_per_period.powf(n);
    let interval_growth = growth_per_period.powf(n / f);
    let annuity_factor = (year_growth - 1.0) / (interval_growth - 1.0);

    let mut annual_breakdown = Vec::with_capacity(years as usize);
    let mut balance = inputs.initial_investment;
    let mut total_contributions = 0.0;

    for year in 1..=years {
        let year_start = balance;

        // Step-up compounds: year 3 pays contribution * (1 + g)^2
        let step_up = (1.0 + increment).powi(year as i32 - 1);
        let adjusted_contribution = inputs.contribution_amount * step_up;
        let year_contributions = adjusted_contribution * f;

        let year_end = year_start * year_growth + year_contributions * annuity_factor;
        let interest_earned = year_end - year_start - year_contributions;

        total_contributions += year_contributions;
        balance = year_end;

        annual_breakdown.push(CompoundInterestRow {
            year,
            starting_balance: year_start,
            contribution: year_contributions,
            interest_earned,
            ending_balance: year_end,
        });
    }

    CompoundInterestOutputs {
        final_amount: balance,
        total_contributions,
        total_interest: balance - inputs.initial_investment - total_contributions,
        annual_breakdown,
    }
}
