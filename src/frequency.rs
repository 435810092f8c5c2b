//! Periods-per-year lookup shared by the calculators

use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Contribution or compounding frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    #[serde(rename = "Semi-Annually")]
    SemiAnnually,
    /// Accepts both "Yearly" and "Annually"
    #[serde(alias = "Yearly")]
    Annually,
}

impl Frequency {
    /// Number of periods in one year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Daily => 365,
            Frequency::Weekly => 52,
            Frequency::Monthly => 12,
            Frequency::Quarterly => 4,
            Frequency::SemiAnnually => 2,
            Frequency::Annually => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::SemiAnnually => "Semi-Annually",
            Frequency::Annually => "Annually",
        }
    }

    /// Lenient parse: unknown labels fall back to Monthly
    pub fn parse_or_monthly(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            log::warn!("Unrecognized frequency {:?}, defaulting to Monthly", label);
            Frequency::Monthly
        })
    }
}

impl FromStr for Frequency {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim() {
            "Daily" => Ok(Frequency::Daily),
            "Weekly" => Ok(Frequency::Weekly),
            "Monthly" => Ok(Frequency::Monthly),
            "Quarterly" => Ok(Frequency::Quarterly),
            "Semi-Annually" => Ok(Frequency::SemiAnnually),
            "Yearly" | "Annually" => Ok(Frequency::Annually),
            other => Err(CalcError::UnknownFrequency(other.to_string())),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a fixed deposit pays its interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestPayout {
    /// Interest compounds and is paid out at maturity
    Cumulative,
    Monthly,
    Quarterly,
    Annually,
}

impl InterestPayout {
    /// Payouts per year, or None for cumulative deposits
    pub fn payouts_per_year(&self) -> Option<u32> {
        match self {
            InterestPayout::Cumulative => None,
            InterestPayout::Monthly => Some(12),
            InterestPayout::Quarterly => Some(4),
            InterestPayout::Annually => Some(1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InterestPayout::Cumulative => "Cumulative",
            InterestPayout::Monthly => "Monthly",
            InterestPayout::Quarterly => "Quarterly",
            InterestPayout::Annually => "Annually",
        }
    }
}

impl FromStr for InterestPayout {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim() {
            "Cumulative" => Ok(InterestPayout::Cumulative),
            "Monthly" => Ok(InterestPayout::Monthly),
            "Quarterly" => Ok(InterestPayout::Quarterly),
            "Annually" | "Yearly" => Ok(InterestPayout::Annually),
            other => Err(CalcError::UnknownPayout(other.to_string())),
        }
    }
}

impl fmt::Display for InterestPayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit the loan term is entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanPeriodUnit {
    Years,
    Months,
}

impl LoanPeriodUnit {
    /// Normalize a term to months, saturating at `u32::MAX`
    pub fn to_months(&self, period: u32) -> u32 {
        match self {
            LoanPeriodUnit::Years => period.saturating_mul(12),
            LoanPeriodUnit::Months => period,
        }
    }
}

impl FromStr for LoanPeriodUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim() {
            "Years" => Ok(LoanPeriodUnit::Years),
            "Months" => Ok(LoanPeriodUnit::Months),
            other => Err(CalcError::UnknownLoanUnit(other.to_string())),
        }
    }
}

/// T-bill tenor; serialized as the day count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum MaturityPeriod {
    Days91,
    Days182,
    Days364,
}

impl MaturityPeriod {
    pub fn days(&self) -> u32 {
        match self {
            MaturityPeriod::Days91 => 91,
            MaturityPeriod::Days182 => 182,
            MaturityPeriod::Days364 => 364,
        }
    }
}

impl TryFrom<u32> for MaturityPeriod {
    type Error = CalcError;

    fn try_from(days: u32) -> CalcResult<Self> {
        match days {
            91 => Ok(MaturityPeriod::Days91),
            182 => Ok(MaturityPeriod::Days182),
            364 => Ok(MaturityPeriod::Days364),
            other => Err(CalcError::UnsupportedMaturity(other)),
        }
    }
}

impl From<MaturityPeriod> for u32 {
    fn from(period: MaturityPeriod) -> u32 {
        period.days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        assert_eq!(Frequency::Daily.periods_per_year(), 365);
        assert_eq!(Frequency::Weekly.periods_per_year(), 52);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::SemiAnnually.periods_per_year(), 2);
        assert_eq!(Frequency::Annually.periods_per_year(), 1);
    }

    #[test]
    fn test_yearly_and_annually_are_the_same() {
        assert_eq!("Yearly".parse::<Frequency>().unwrap(), Frequency::Annually);
        assert_eq!("Annually".parse::<Frequency>().unwrap(), Frequency::Annually);

        let parsed: Frequency = serde_json::from_str("\"Yearly\"").unwrap();
        assert_eq!(parsed, Frequency::Annually);
        let semi: Frequency = serde_json::from_str("\"Semi-Annually\"").unwrap();
        assert_eq!(semi, Frequency::SemiAnnually);
    }

    #[test]
    fn test_unknown_frequency() {
        assert!(matches!(
            "Fortnightly".parse::<Frequency>(),
            Err(CalcError::UnknownFrequency(_))
        ));
        assert_eq!(Frequency::parse_or_monthly("Fortnightly"), Frequency::Monthly);
        assert_eq!(Frequency::parse_or_monthly("Weekly"), Frequency::Weekly);
    }

    #[test]
    fn test_payouts_and_loan_units() {
        assert_eq!(InterestPayout::Cumulative.payouts_per_year(), None);
        assert_eq!(InterestPayout::Quarterly.payouts_per_year(), Some(4));
        assert_eq!(LoanPeriodUnit::Years.to_months(5), 60);
        assert_eq!(LoanPeriodUnit::Months.to_months(18), 18);
        assert_eq!(LoanPeriodUnit::Years.to_months(u32::MAX / 12 + 1), u32::MAX);
        assert!("Decades".parse::<LoanPeriodUnit>().is_err());
    }

    #[test]
    fn test_maturity_period_serde() {
        let period: MaturityPeriod = serde_json::from_str("182").unwrap();
        assert_eq!(period, MaturityPeriod::Days182);
        assert_eq!(serde_json::to_string(&MaturityPeriod::Days364).unwrap(), "364");
        assert!(serde_json::from_str::<MaturityPeriod>("90").is_err());
        assert!(MaturityPeriod::try_from(0).is_err());
    }
}
