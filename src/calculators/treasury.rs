//! Treasury bill discounted price and effective yield

use crate::error::{ensure_non_negative, CalcResult};
use crate::frequency::MaturityPeriod;
use serde::{Deserialize, Serialize};

const DAYS_PER_YEAR: f64 = 365.0;

/// How the quoted rate converts face value into a purchase price
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountConvention {
    /// Price = face / (1 + r * d / 365)
    #[default]
    TrueDiscount,
    /// Price = face * (1 - r * d / 365)
    BankDiscount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryBillsInputs {
    /// Face value received at maturity
    pub investment_amount: f64,
    pub maturity_period_days: MaturityPeriod,
    /// Annual discount rate in percent
    pub annual_interest_rate: f64,
    #[serde(default)]
    pub discount_convention: DiscountConvention,
}

impl TreasuryBillsInputs {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("investmentAmount", self.investment_amount)?;
        ensure_non_negative("annualInterestRate", self.annual_interest_rate)
    }
}

/// Explanatory step shown alongside the figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationStep {
    pub step: String,
    pub value: String,
    pub explanation: String,
}

impl ExplanationStep {
    fn new(step: &str, value: String, explanation: String) -> Self {
        Self {
            step: step.to_string(),
            value,
            explanation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryBillsOutputs {
    pub discounted_price: f64,
    pub profit: f64,
    /// Annualized return on the purchase price, in percent
    pub effective_yield: f64,
    pub breakdown: Vec<ExplanationStep>,
}

pub fn compute(inputs: &TreasuryBillsInputs) -> TreasuryBillsOutputs {
    let face = inputs.investment_amount;
    let r = inputs.annual_interest_rate / 100.0;
    let days = inputs.maturity_period_days.days();
    let d = days as f64;

    log::debug!(
        "Treasury bill: face={:.2} days={} rate={}% convention={:?}",
        face,
        days,
        inputs.annual_interest_rate,
        inputs.discount_convention,
    );

    let (discounted_price, price_formula) = match inputs.discount_convention {
        DiscountConvention::TrueDiscount => (
            face / (1.0 + r * d / DAYS_PER_YEAR),
            format!("Purchase price = {} / (1 + ({:.4} × {} / 365))", face, r, days),
        ),
        DiscountConvention::BankDiscount => (
            face * (1.0 - r * d / DAYS_PER_YEAR),
            format!("Purchase price = {} × (1 - ({:.4} × {} / 365))", face, r, days),
        ),
    };

    let profit = face - discounted_price;
    // A zero face value prices at zero; report no yield rather than 0/0
    let effective_yield = if discounted_price > 0.0 {
        profit / discounted_price * (DAYS_PER_YEAR / d) * 100.0
    } else {
        0.0
    };

    let breakdown = vec![
        ExplanationStep::new(
            "Face Value",
            format!("{:.2}", face),
            "The amount you will receive at maturity".to_string(),
        ),
        ExplanationStep::new(
            "Discount Rate",
            format!("{}%", inputs.annual_interest_rate),
            "Annual interest rate used for discounting".to_string(),
        ),
        ExplanationStep::new(
            "Maturity Period",
            format!("{} days", days),
            "Time until the T-bill matures".to_string(),
        ),
        ExplanationStep::new("Discounted Price", format!("{:.2}", discounted_price), price_formula),
        ExplanationStep::new(
            "Profit",
            format!("{:.2}", profit),
            format!("Face Value - Purchase Price = {} - {:.2}", face, discounted_price),
        ),
        ExplanationStep::new(
            "Effective Annual Yield",
            format!("{:.2}%", effective_yield),
            format!(
                "Annualized return = ({:.2} / {:.2}) × (365 / {}) × 100",
                profit, discounted_price, days
            ),
        ),
    ];

    TreasuryBillsOutputs {
        discounted_price,
        profit,
        effective_yield,
        breakdown,
    }
}
