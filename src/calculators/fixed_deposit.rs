//! Fixed deposit maturity value and payout schedule

use crate::error::{ensure_non_negative, ensure_positive_period, CalcResult};
use crate::frequency::InterestPayout;
use chrono::{Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Cumulative deposits compound quarterly regardless of payout mode
const CUMULATIVE_COMPOUNDING_PER_YEAR: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedDepositInputs {
    pub deposit_amount: f64,

    /// Annual rate in percent
    pub annual_interest_rate: f64,

    /// Tenure in years
    pub tenure: u32,

    pub interest_payout: InterestPayout,
}

impl FixedDepositInputs {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("depositAmount", self.deposit_amount)?;
        ensure_non_negative("annualInterestRate", self.annual_interest_rate)?;
        ensure_positive_period("tenure", self.tenure)
    }
}

/// One quarter (cumulative) or one payout period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedDepositRow {
    /// "Q2 Y1" for cumulative deposits, "Period 2 Y1" for payouts
    pub period: String,
    pub interest_paid: f64,
    pub balance: f64,
    pub payout_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedDepositOutputs {
    pub maturity_value: f64,
    pub total_interest: f64,

    /// Interest paid each period; absent for cumulative deposits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periodic_payout_amount: Option<f64>,

    pub breakdown: Vec<FixedDepositRow>,
}

/// Compute the deposit with payout dates counted from today
pub fn compute(inputs: &FixedDepositInputs) -> FixedDepositOutputs {
    compute_as_of(inputs, Local::now().date_naive())
}

/// Compute the deposit with payout dates counted from `as_of`
pub fn compute_as_of(inputs: &FixedDepositInputs, as_of: NaiveDate) -> FixedDepositOutputs {
    log::debug!(
        "Fixed deposit: amount={:.2} rate={}% tenure={}y payout={}",
        inputs.deposit_amount,
        inputs.annual_interest_rate,
        inputs.tenure,
        inputs.interest_payout,
    );

    let r = inputs.annual_interest_rate / 100.0;

    match inputs.interest_payout.payouts_per_year() {
        None => cumulative(inputs.deposit_amount, r, inputs.tenure, as_of),
        Some(payouts_per_year) => {
            periodic(inputs.deposit_amount, r, inputs.tenure, payouts_per_year, as_of)
        }
    }
}

fn cumulative(deposit: f64, r: f64, tenure: u32, as_of: NaiveDate) -> FixedDepositOutputs {
    let m = CUMULATIVE_COMPOUNDING_PER_YEAR;
    let quarterly_rate = r / m as f64;
    let total_periods = m * tenure;

    let maturity_value = deposit * (1.0 + quarterly_rate).powi(total_periods as i32);

    let mut breakdown = Vec::with_capacity(total_periods as usize);
    let mut balance = deposit;
    for period in 1..=total_periods {
        let interest = balance * quarterly_rate;
        balance += interest;

        breakdown.push(FixedDepositRow {
            period: format!("Q{} Y{}", period_in_year(period, m), year_of(period, m)),
            interest_paid: interest,
            balance,
            payout_date: add_months(as_of, period * 3),
        });
    }

    FixedDepositOutputs {
        maturity_value,
        total_interest: maturity_value - deposit,
        periodic_payout_amount: None,
        breakdown,
    }
}

/// Simple interest on the principal, paid out; principal returned at maturity
fn periodic(
    deposit: f64,
    r: f64,
    tenure: u32,
    payouts_per_year: u32,
    as_of: NaiveDate,
) -> FixedDepositOutputs {
    let payout = deposit * r / payouts_per_year as f64;
    let total_payouts = payouts_per_year * tenure;
    let months_per_payout = 12 / payouts_per_year;

    let breakdown = (1..=total_payouts)
        .map(|period| FixedDepositRow {
            period: format!(
                "Period {} Y{}",
                period_in_year(period, payouts_per_year),
                year_of(period, payouts_per_year)
            ),
            interest_paid: payout,
            balance: deposit,
            payout_date: add_months(as_of, period * months_per_payout),
        })
        .collect();

    FixedDepositOutputs {
        maturity_value: deposit,
        total_interest: payout * payouts_per_year as f64 * tenure as f64,
        periodic_payout_amount: Some(payout),
        breakdown,
    }
}

/// 1-based position of `period` within its year
fn period_in_year(period: u32, per_year: u32) -> u32 {
    (period - 1) % per_year + 1
}

fn year_of(period: u32, per_year: u32) -> u32 {
    period.div_ceil(per_year)
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    fn inputs(payout: InterestPayout) -> FixedDepositInputs {
        FixedDepositInputs {
            deposit_amount: 10_000.0,
            annual_interest_rate: 6.5,
            tenure: 5,
            interest_payout: payout,
        }
    }

    #[test]
    fn test_monthly_payout_scenario() {
        let result = compute_as_of(&inputs(InterestPayout::Monthly), as_of());

        let payout = result.periodic_payout_amount.unwrap();
        assert_relative_eq!(payout, 54.1667, epsilon = 1e-4);
        assert_eq!(result.maturity_value, 10_000.0);
        assert_relative_eq!(result.total_interest, 3_250.0, epsilon = 1e-9);
        assert_eq!(result.breakdown.len(), 60);
    }

    #[test]
    fn test_periodic_interest_reconciles() {
        for (payout_mode, per_year) in [
            (InterestPayout::Monthly, 12.0),
            (InterestPayout::Quarterly, 4.0),
            (InterestPayout::Annually, 1.0),
        ] {
            let input = inputs(payout_mode);
            let result = compute_as_of(&input, as_of());
            let payout = result.periodic_payout_amount.unwrap();

            assert_eq!(result.total_interest, payout * per_year * 5.0);
            assert_eq!(result.maturity_value, input.deposit_amount);
            assert!(result.breakdown.iter().all(|row| row.balance == input.deposit_amount));
        }
    }

    #[test]
    fn test_periodic_labels_and_dates() {
        let result = compute_as_of(&inputs(InterestPayout::Quarterly), as_of());
        assert_eq!(result.breakdown.len(), 20);
        assert_eq!(result.breakdown[0].period, "Period 1 Y1");
        assert_eq!(result.breakdown[3].period, "Period 4 Y1");
        assert_eq!(result.breakdown[4].period, "Period 1 Y2");

        // Month-end dates clamp to the target month's last day
        assert_eq!(result.breakdown[0].payout_date, NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());
        assert_eq!(result.breakdown[3].payout_date, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    }

    #[test]
    fn test_cumulative_compounds_quarterly() {
        let result = compute_as_of(&inputs(InterestPayout::Cumulative), as_of());

        let expected = 10_000.0 * (1.0 + 0.065 / 4.0_f64).powi(20);
        assert_relative_eq!(result.maturity_value, expected, max_relative = 1e-12);
        assert_relative_eq!(result.total_interest, expected - 10_000.0, max_relative = 1e-12);
        assert_eq!(result.periodic_payout_amount, None);

        assert_eq!(result.breakdown.len(), 20);
        assert_eq!(result.breakdown[0].period, "Q1 Y1");
        assert_eq!(result.breakdown[19].period, "Q4 Y5");
        assert_relative_eq!(result.breakdown[0].interest_paid, 162.5, epsilon = 1e-9);

        let last = result.breakdown.last().unwrap();
        assert_relative_eq!(last.balance, result.maturity_value, max_relative = 1e-12);
    }

    #[test]
    fn test_cumulative_output_omits_payout_in_json() {
        let result = compute_as_of(&inputs(InterestPayout::Cumulative), as_of());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("periodicPayoutAmount").is_none());
        assert_eq!(json["breakdown"][0]["payoutDate"], "2024-04-30");
    }
}
