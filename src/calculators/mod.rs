//! The five calculators and dispatch over them
//!
//! Every calculator exposes `compute(&Inputs) -> Outputs`: synchronous, pure and
//! infallible for well-typed input. `CalculatorInputs` wraps any of the five input
//! records so callers can route a request by calculator id.

pub mod compound;
pub mod fixed_deposit;
pub mod loan;
pub mod retirement;
pub mod treasury;

pub use compound::{CompoundInterestInputs, CompoundInterestOutputs, CompoundInterestRow};
pub use fixed_deposit::{FixedDepositInputs, FixedDepositOutputs, FixedDepositRow};
pub use loan::{AmortizationRow, LoanInputs, LoanOutputs};
pub use retirement::{RetirementPlannerInputs, RetirementPlannerOutputs, RetirementProjectionRow};
pub use treasury::{DiscountConvention, ExplanationStep, TreasuryBillsInputs, TreasuryBillsOutputs};

use crate::error::CalcResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a calculator, as used by history and scenario storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculatorId {
    CompoundInterest,
    FixedDeposit,
    TreasuryBills,
    Loans,
    RetirementPlanner,
}

impl CalculatorId {
    pub const ALL: [CalculatorId; 5] = [
        CalculatorId::CompoundInterest,
        CalculatorId::FixedDeposit,
        CalculatorId::TreasuryBills,
        CalculatorId::Loans,
        CalculatorId::RetirementPlanner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorId::CompoundInterest => "compoundInterest",
            CalculatorId::FixedDeposit => "fixedDeposit",
            CalculatorId::TreasuryBills => "treasuryBills",
            CalculatorId::Loans => "loans",
            CalculatorId::RetirementPlanner => "retirementPlanner",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CalculatorId::CompoundInterest => "Compound Interest",
            CalculatorId::FixedDeposit => "Fixed Deposit",
            CalculatorId::TreasuryBills => "Treasury Bills",
            CalculatorId::Loans => "Loans",
            CalculatorId::RetirementPlanner => "Retirement Planner",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CalculatorId::CompoundInterest => {
                "Projects investment growth with periodic contributions and compounding."
            }
            CalculatorId::FixedDeposit => {
                "Calculates maturity amounts for deposit with different payout options."
            }
            CalculatorId::TreasuryBills => {
                "Calculates discounted purchase price and effective yield for T-bills."
            }
            CalculatorId::Loans => "EMI, amortization schedule and affordability insights.",
            CalculatorId::RetirementPlanner => {
                "Estimate retirement corpus and real value after inflation."
            }
        }
    }
}

impl fmt::Display for CalculatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for any calculator.
///
/// JSON form: `{"calculatorId": "loans", "inputs": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculatorId", content = "inputs", rename_all = "camelCase")]
pub enum CalculatorInputs {
    CompoundInterest(CompoundInterestInputs),
    FixedDeposit(FixedDepositInputs),
    TreasuryBills(TreasuryBillsInputs),
    Loans(LoanInputs),
    RetirementPlanner(RetirementPlannerInputs),
}

impl CalculatorInputs {
    pub fn calculator_id(&self) -> CalculatorId {
        match self {
            CalculatorInputs::CompoundInterest(_) => CalculatorId::CompoundInterest,
            CalculatorInputs::FixedDeposit(_) => CalculatorId::FixedDeposit,
            CalculatorInputs::TreasuryBills(_) => CalculatorId::TreasuryBills,
            CalculatorInputs::Loans(_) => CalculatorId::Loans,
            CalculatorInputs::RetirementPlanner(_) => CalculatorId::RetirementPlanner,
        }
    }

    /// Caller-side checks: positive periods and non-negative amounts
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            CalculatorInputs::CompoundInterest(inputs) => inputs.validate(),
            CalculatorInputs::FixedDeposit(inputs) => inputs.validate(),
            CalculatorInputs::TreasuryBills(inputs) => inputs.validate(),
            CalculatorInputs::Loans(inputs) => inputs.validate(),
            CalculatorInputs::RetirementPlanner(inputs) => inputs.validate(),
        }
    }

    pub fn compute(&self) -> CalculatorOutputs {
        match self {
            CalculatorInputs::CompoundInterest(inputs) => {
                CalculatorOutputs::CompoundInterest(compound::compute(inputs))
            }
            CalculatorInputs::FixedDeposit(inputs) => {
                CalculatorOutputs::FixedDeposit(fixed_deposit::compute(inputs))
            }
            CalculatorInputs::TreasuryBills(inputs) => {
                CalculatorOutputs::TreasuryBills(treasury::compute(inputs))
            }
            CalculatorInputs::Loans(inputs) => CalculatorOutputs::Loans(loan::compute(inputs)),
            CalculatorInputs::RetirementPlanner(inputs) => {
                CalculatorOutputs::RetirementPlanner(retirement::compute(inputs))
            }
        }
    }
}

/// Outputs of any calculator, tagged the same way as [`CalculatorInputs`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculatorId", content = "results", rename_all = "camelCase")]
pub enum CalculatorOutputs {
    CompoundInterest(CompoundInterestOutputs),
    FixedDeposit(FixedDepositOutputs),
    TreasuryBills(TreasuryBillsOutputs),
    Loans(LoanOutputs),
    RetirementPlanner(RetirementPlannerOutputs),
}

impl CalculatorOutputs {
    pub fn calculator_id(&self) -> CalculatorId {
        match self {
            CalculatorOutputs::CompoundInterest(_) => CalculatorId::CompoundInterest,
            CalculatorOutputs::FixedDeposit(_) => CalculatorId::FixedDeposit,
            CalculatorOutputs::TreasuryBills(_) => CalculatorId::TreasuryBills,
            CalculatorOutputs::Loans(_) => CalculatorId::Loans,
            CalculatorOutputs::RetirementPlanner(_) => CalculatorId::RetirementPlanner,
        }
    }

    /// Number of rows in the period-by-period breakdown
    pub fn breakdown_len(&self) -> usize {
        match self {
            CalculatorOutputs::CompoundInterest(out) => out.annual_breakdown.len(),
            CalculatorOutputs::FixedDeposit(out) => out.breakdown.len(),
            CalculatorOutputs::TreasuryBills(out) => out.breakdown.len(),
            CalculatorOutputs::Loans(out) => out.amortization_schedule.len(),
            CalculatorOutputs::RetirementPlanner(out) => out.yearly_projection.len(),
        }
    }
}
