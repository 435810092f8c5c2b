//! Batch runner for many independent calculations
//!
//! Each calculation is single-threaded and shares nothing, so a batch fans out
//! across requests with rayon and collects results back in request order.

use crate::calculators::{CalculatorInputs, CalculatorOutputs};
use crate::error::CalcResult;
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// Outcome of one request in a batch
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    /// Position of the request in the batch
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<CalculatorOutputs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Runs calculation requests, optionally validating them first
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let results = runner.run_batch(&requests);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    validate: bool,
}

impl ScenarioRunner {
    /// Runner that validates each request before computing it
    pub fn new() -> Self {
        Self { validate: true }
    }

    /// Runner that computes requests as given
    pub fn unchecked() -> Self {
        Self { validate: false }
    }

    pub fn run(&self, request: &CalculatorInputs) -> CalcResult<CalculatorOutputs> {
        if self.validate {
            request.validate()?;
        }
        Ok(request.compute())
    }

    /// Run every request in parallel, keeping input order
    pub fn run_batch(&self, requests: &[CalculatorInputs]) -> Vec<BatchItem> {
        log::info!("Running batch of {} calculations", requests.len());

        requests
            .par_iter()
            .enumerate()
            .map(|(index, request)| match self.run(request) {
                Ok(outputs) => BatchItem {
                    index,
                    outputs: Some(outputs),
                    error: None,
                },
                Err(e) => {
                    log::warn!("Request {} ({}) rejected: {}", index, request.calculator_id(), e);
                    BatchItem {
                        index,
                        outputs: None,
                        error: Some(e.to_string()),
                    }
                }
            })
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a single request from a JSON file
pub fn load_request<P: AsRef<Path>>(path: P) -> CalcResult<CalculatorInputs> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Load a JSON array of requests
pub fn load_requests<P: AsRef<Path>>(path: P) -> CalcResult<Vec<CalculatorInputs>> {
    let text = std::fs::read_to_string(path)?;
    load_requests_from_str(&text)
}

pub fn load_requests_from_str(text: &str) -> CalcResult<Vec<CalculatorInputs>> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::CalculatorId;

    const BATCH: &str = r#"[
        {"calculatorId": "loans", "inputs": {
            "loanAmount": 20000, "annualInterestRate": 9,
            "loanPeriod": 24, "loanPeriodUnit": "Months"}},
        {"calculatorId": "treasuryBills", "inputs": {
            "investmentAmount": 1000, "maturityPeriodDays": 91, "annualInterestRate": 25}},
        {"calculatorId": "retirementPlanner", "inputs": {
            "currentAge": 60, "retirementAge": 55, "currentBalance": 1000,
            "monthlyContribution": 10, "expectedReturn": 5, "inflationRate": 2}},
        {"calculatorId": "compoundInterest", "inputs": {
            "initialInvestment": 100, "contributionAmount": 10,
            "contributionFrequency": "Monthly", "annualInterestRate": 5,
            "investmentPeriodYears": 3, "compoundingFrequency": "Annually"}}
    ]"#;

    #[test]
    fn test_batch_keeps_order() {
        let requests = load_requests_from_str(BATCH).unwrap();
        let results = ScenarioRunner::new().run_batch(&requests);

        assert_eq!(results.len(), 4);
        for (i, item) in results.iter().enumerate() {
            assert_eq!(item.index, i);
        }

        let first = results[0].outputs.as_ref().unwrap();
        assert_eq!(first.calculator_id(), CalculatorId::Loans);
        assert_eq!(first.breakdown_len(), 24);

        assert_eq!(
            results[3].outputs.as_ref().unwrap().calculator_id(),
            CalculatorId::CompoundInterest
        );
    }

    #[test]
    fn test_already_retired_runs_under_validation() {
        let requests = load_requests_from_str(BATCH).unwrap();
        let checked = ScenarioRunner::new().run_batch(&requests);

        assert!(checked[2].error.is_none());
        match checked[2].outputs.as_ref().unwrap() {
            CalculatorOutputs::RetirementPlanner(out) => {
                assert!(out.yearly_projection.is_empty());
                assert_eq!(out.projected_corpus_nominal, 1_000.0);
            }
            other => panic!("unexpected outputs {:?}", other.calculator_id()),
        }
    }

    #[test]
    fn test_validation_failure_is_reported_per_item() {
        let requests = load_requests_from_str(
            r#"[
            {"calculatorId": "loans", "inputs": {
                "loanAmount": 20000, "annualInterestRate": 9,
                "loanPeriod": 0, "loanPeriodUnit": "Months"}},
            {"calculatorId": "treasuryBills", "inputs": {
                "investmentAmount": 1000, "maturityPeriodDays": 182, "annualInterestRate": 10}}
        ]"#,
        )
        .unwrap();

        let checked = ScenarioRunner::new().run_batch(&requests);
        assert!(checked[0].outputs.is_none());
        assert!(checked[0].error.as_deref().unwrap().contains("loanPeriod"));
        assert!(checked[1].outputs.is_some());

        // Without validation the zero-length loan yields an empty schedule
        let unchecked = ScenarioRunner::unchecked().run_batch(&requests);
        assert_eq!(unchecked[0].outputs.as_ref().unwrap().breakdown_len(), 0);
    }

    #[test]
    fn test_malformed_batch() {
        let text = r#"[{"calculatorId": "mortgage", "inputs": {}}]"#;
        assert!(load_requests_from_str(text).is_err());
    }
}
