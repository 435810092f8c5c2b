//! fincalc - Personal finance projection engine
//!
//! This library provides:
//! - Compound interest growth with escalating periodic contributions
//! - Fixed deposit maturity and payout schedules
//! - Treasury bill discount pricing and effective yield
//! - Loan EMI and amortization schedules
//! - Inflation-adjusted retirement corpus projections
//!
//! Every calculator is a pure, synchronous `compute(&Inputs) -> Outputs`.

pub mod error;
pub mod frequency;
pub mod calculators;
pub mod summary;
pub mod scenario;
pub mod export;

// Re-export commonly used types
pub use error::{CalcError, CalcResult};
pub use frequency::{Frequency, InterestPayout, LoanPeriodUnit, MaturityPeriod};
pub use calculators::{CalculatorId, CalculatorInputs, CalculatorOutputs};
pub use summary::ResultSummary;
pub use scenario::ScenarioRunner;
