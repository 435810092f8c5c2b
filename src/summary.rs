//! Headline figures for a calculation
//!
//! A compact view of any output without its breakdown, suitable for printing
//! or handing to a downstream commentary service as JSON.

use crate::calculators::{CalculatorId, CalculatorOutputs};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub calculator_id: CalculatorId,
    pub figures: Vec<Figure>,
    pub breakdown_rows: usize,
}

impl ResultSummary {
    /// Look up a figure by label
    pub fn get(&self, label: &str) -> Option<f64> {
        self.figures.iter().find(|f| f.label == label).map(|f| f.value)
    }
}

fn figures(pairs: &[(&str, f64)]) -> Vec<Figure> {
    pairs
        .iter()
        .map(|(label, value)| Figure {
            label: label.to_string(),
            value: *value,
        })
        .collect()
}

impl CalculatorOutputs {
    pub fn summary(&self) -> ResultSummary {
        let figures = match self {
            CalculatorOutputs::CompoundInterest(out) => figures(&[
                ("Final Amount", out.final_amount),
                ("Total Contributions", out.total_contributions),
                ("Total Interest", out.total_interest),
            ]),
            CalculatorOutputs::FixedDeposit(out) => {
                let mut list = figures(&[
                    ("Maturity Value", out.maturity_value),
                    ("Total Interest", out.total_interest),
                ]);
                if let Some(payout) = out.periodic_payout_amount {
                    list.extend(figures(&[("Periodic Payout", payout)]));
                }
                list
            }
            CalculatorOutputs::TreasuryBills(out) => figures(&[
                ("Discounted Price", out.discounted_price),
                ("Profit", out.profit),
                ("Effective Yield %", out.effective_yield),
            ]),
            CalculatorOutputs::Loans(out) => {
                let mut list = figures(&[
                    ("Monthly EMI", out.monthly_emi),
                    ("Total Interest", out.total_interest),
                    ("Total Repayment", out.total_repayment),
                ]);
                if let Some(ratio) = out.debt_to_income_ratio {
                    list.extend(figures(&[("Debt-to-Income %", ratio)]));
                }
                list
            }
            CalculatorOutputs::RetirementPlanner(out) => figures(&[
                ("Projected Corpus (Nominal)", out.projected_corpus_nominal),
                ("Projected Corpus (Real)", out.projected_corpus_real),
                ("Real Return %", out.real_return),
            ]),
        };

        ResultSummary {
            calculator_id: self.calculator_id(),
            figures,
            breakdown_rows: self.breakdown_len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::calculators::fixed_deposit::{self, FixedDepositInputs};
    use crate::calculators::CalculatorOutputs;
    use crate::frequency::InterestPayout;
    use chrono::NaiveDate;

    fn deposit(payout: InterestPayout) -> CalculatorOutputs {
        let inputs = FixedDepositInputs {
            deposit_amount: 10_000.0,
            annual_interest_rate: 6.5,
            tenure: 5,
            interest_payout: payout,
        };
        let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        CalculatorOutputs::FixedDeposit(fixed_deposit::compute_as_of(&inputs, as_of))
    }

    #[test]
    fn test_optional_figures_only_when_present() {
        let periodic = deposit(InterestPayout::Monthly).summary();
        assert_eq!(periodic.figures.len(), 3);
        assert_eq!(periodic.get("Maturity Value"), Some(10_000.0));
        assert!(periodic.get("Periodic Payout").is_some());
        assert_eq!(periodic.breakdown_rows, 60);

        let cumulative = deposit(InterestPayout::Cumulative).summary();
        assert_eq!(cumulative.figures.len(), 2);
        assert_eq!(cumulative.get("Periodic Payout"), None);
    }

    #[test]
    fn test_summary_json() {
        let json = serde_json::to_value(deposit(InterestPayout::Annually).summary()).unwrap();
        assert_eq!(json["calculatorId"], "fixedDeposit");
        assert_eq!(json["figures"][0]["label"], "Maturity Value");
        assert_eq!(json["breakdownRows"], 5);
    }
}
