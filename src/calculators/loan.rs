//! Loan EMI and amortization schedule

use crate::error::{ensure_non_negative, ensure_positive_period, CalcError, CalcResult};
use crate::frequency::LoanPeriodUnit;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Balances below this are floating-point residue and clamp to zero
const BALANCE_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInputs {
    pub loan_amount: f64,

    /// Annual rate in percent
    pub annual_interest_rate: f64,

    pub loan_period: u32,
    pub loan_period_unit: LoanPeriodUnit,

    /// Enables the debt-to-income ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_income: Option<f64>,

    /// Date of disbursement; payment dates are omitted without it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl LoanInputs {
    /// Term normalized to months
    pub fn months(&self) -> u32 {
        self.loan_period_unit.to_months(self.loan_period)
    }

    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("loanAmount", self.loan_amount)?;
        ensure_non_negative("annualInterestRate", self.annual_interest_rate)?;
        ensure_positive_period("loanPeriod", self.loan_period)?;
        if self.loan_period_unit == LoanPeriodUnit::Years && self.loan_period > u32::MAX / 12 {
            return Err(CalcError::invalid("loanPeriod", "term in months exceeds u32 range"));
        }
        if let Some(income) = self.annual_income {
            ensure_non_negative("annualIncome", income)?;
        }
        Ok(())
    }
}

/// One month of the amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    pub period: u32,
    pub emi: f64,
    pub interest: f64,
    pub principal: f64,
    pub remaining_balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanOutputs {
    #[serde(rename = "monthlyEMI")]
    pub monthly_emi: f64,
    pub total_interest: f64,
    pub total_repayment: f64,
    pub amortization_schedule: Vec<AmortizationRow>,

    /// Annual EMI as a percentage of annual income
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt_to_income_ratio: Option<f64>,
}

/// Equated monthly installment for `principal` over `months` at monthly rate `r`
pub fn emi(principal: f64, r: f64, months: u32) -> f64 {
    if r == 0.0 {
        return principal / months as f64;
    }
    let growth = (1.0 + r).powi(months as i32);
    principal * r * growth / (growth - 1.0)
}

pub fn compute(inputs: &LoanInputs) -> LoanOutputs {
    let principal = inputs.loan_amount;
    let r = inputs.annual_interest_rate / 12.0 / 100.0;
    let n = inputs.months();

    log::debug!(
        "Loan: amount={:.2} rate={}% months={}",
        principal,
        inputs.annual_interest_rate,
        n,
    );

    let monthly_emi = emi(principal, r, n);

    let mut amortization_schedule = Vec::with_capacity(n as usize);
    let mut remaining_balance = principal;
    for period in 1..=n {
        let interest = remaining_balance * r;
        let principal_paid = monthly_emi - interest;
        remaining_balance -= principal_paid;

        if remaining_balance < BALANCE_EPSILON {
            remaining_balance = 0.0;
        }

        amortization_schedule.push(AmortizationRow {
            period,
            emi: monthly_emi,
            interest,
            principal: principal_paid,
            remaining_balance,
            payment_date: inputs
                .start_date
                .and_then(|start| start.checked_add_months(Months::new(period))),
        });
    }

    let total_repayment = monthly_emi * n as f64;

    // Zero income carries no ratio
    let debt_to_income_ratio = inputs
        .annual_income
        .filter(|income| *income > 0.0)
        .map(|income| monthly_emi * 12.0 / income * 100.0);

    LoanOutputs {
        monthly_emi,
        total_interest: total_repayment - principal,
        total_repayment,
        amortization_schedule,
        debt_to_income_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs(rate: f64) -> LoanInputs {
        LoanInputs {
            loan_amount: 50_000.0,
            annual_interest_rate: rate,
            loan_period: 5,
            loan_period_unit: LoanPeriodUnit::Years,
            annual_income: None,
            start_date: None,
        }
    }

    #[test]
    fn test_five_year_car_loan() {
        let result = compute(&inputs(8.5));

        assert_eq!(result.amortization_schedule.len(), 60);
        assert!((result.monthly_emi - 1026.05).abs() < 0.5, "EMI {}", result.monthly_emi);
        assert!((result.total_repayment - 61_563.0).abs() < 30.0);
        assert!((result.total_interest - 11_563.0).abs() < 30.0);
        assert_relative_eq!(result.total_interest, result.total_repayment - 50_000.0);
        assert_eq!(result.debt_to_income_ratio, None);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let result = compute(&inputs(0.0));

        assert_relative_eq!(result.monthly_emi, 50_000.0 / 60.0);
        assert_relative_eq!(result.total_interest, 0.0, epsilon = 1e-9);
        assert_eq!(result.amortization_schedule.last().unwrap().remaining_balance, 0.0);
        assert!(result.amortization_schedule.iter().all(|row| row.interest == 0.0));
    }

    #[test]
    fn test_each_payment_splits_into_principal_and_interest() {
        let result = compute(&inputs(12.0));

        for row in &result.amortization_schedule {
            assert_relative_eq!(row.principal + row.interest, row.emi, epsilon = 1e-9);
            assert!(row.remaining_balance >= 0.0);
        }

        let principal_repaid: f64 = result.amortization_schedule.iter().map(|r| r.principal).sum();
        assert_relative_eq!(principal_repaid, 50_000.0, epsilon = 1e-6);
        assert_eq!(result.amortization_schedule.last().unwrap().remaining_balance, 0.0);
    }

    #[test]
    fn test_oversized_term() {
        let mut input = inputs(8.5);
        input.loan_period = u32::MAX / 12 + 1;
        assert_eq!(input.months(), u32::MAX);
        assert!(input.validate().is_err());

        input.loan_period = u32::MAX / 12;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_term_in_months() {
        let mut input = inputs(10.0);
        input.loan_period = 18;
        input.loan_period_unit = LoanPeriodUnit::Months;
        let result = compute(&input);
        assert_eq!(result.amortization_schedule.len(), 18);
    }

    #[test]
    fn test_debt_to_income_ratio() {
        let mut input = inputs(8.5);
        input.annual_income = Some(60_000.0);
        let result = compute(&input);

        let ratio = result.debt_to_income_ratio.unwrap();
        assert_relative_eq!(ratio, result.monthly_emi * 12.0 / 60_000.0 * 100.0);

        input.annual_income = Some(0.0);
        assert_eq!(compute(&input).debt_to_income_ratio, None);
    }

    #[test]
    fn test_payment_dates_follow_start_date() {
        let mut input = inputs(8.5);
        input.start_date = NaiveDate::from_ymd_opt(2024, 1, 15);
        let result = compute(&input);

        assert_eq!(
            result.amortization_schedule[0].payment_date,
            NaiveDate::from_ymd_opt(2024, 2, 15)
        );
        assert_eq!(
            result.amortization_schedule[59].payment_date,
            NaiveDate::from_ymd_opt(2029, 1, 15)
        );
    }

    #[test]
    fn test_emi_json_name() {
        let json = serde_json::to_value(compute(&inputs(8.5))).unwrap();
        assert!(json.get("monthlyEMI").is_some());
        assert!(json.get("debtToIncomeRatio").is_none());
    }
}
