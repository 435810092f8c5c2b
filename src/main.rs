//! fincalc CLI
//!
//! Command-line front end for the five calculators

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fincalc::calculators::{
    CalculatorInputs, CalculatorOutputs, CompoundInterestInputs, DiscountConvention,
    FixedDepositInputs, LoanInputs, RetirementPlannerInputs, TreasuryBillsInputs,
};
use fincalc::{
    export, scenario, CalculatorId, Frequency, InterestPayout, LoanPeriodUnit, MaturityPeriod,
    ScenarioRunner,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fincalc")]
#[command(author, version, about = "Personal finance projections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct OutputArgs {
    /// Print the full result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write the breakdown table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Breakdown rows to print
    #[arg(long, default_value = "12")]
    rows: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Compound interest with periodic contributions
    Compound {
        #[arg(long)]
        initial: f64,
        #[arg(long, default_value = "0")]
        contribution: f64,
        #[arg(long, default_value = "Monthly")]
        contribution_frequency: Frequency,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
        #[arg(long, default_value = "Monthly")]
        compounding: Frequency,
        /// Yearly contribution step-up in percent
        #[arg(long)]
        increment: Option<f64>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fixed deposit maturity and payouts
    Deposit {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        rate: f64,
        /// Tenure in years
        #[arg(long)]
        tenure: u32,
        #[arg(long, default_value = "Cumulative")]
        payout: InterestPayout,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Treasury bill price and yield
    Tbill {
        /// Face value
        #[arg(long)]
        amount: f64,
        /// 91, 182 or 364
        #[arg(long, default_value = "91")]
        days: u32,
        #[arg(long)]
        rate: f64,
        /// Price with the bank discount instead of the true discount
        #[arg(long)]
        bank_discount: bool,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Loan EMI and amortization schedule
    Loan {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        period: u32,
        #[arg(long, default_value = "Years")]
        unit: LoanPeriodUnit,
        #[arg(long)]
        income: Option<f64>,
        /// First disbursement date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<chrono::NaiveDate>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Retirement corpus projection
    Retirement {
        #[arg(long)]
        current_age: u32,
        #[arg(long)]
        retirement_age: u32,
        #[arg(long, default_value = "0")]
        balance: f64,
        #[arg(long, default_value = "0")]
        monthly: f64,
        /// Expected annual return in percent
        #[arg(long)]
        expected_return: f64,
        #[arg(long, default_value = "0")]
        inflation: f64,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run a single JSON request file
    Run {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run a JSON array of requests in parallel and print results as JSON
    Batch { path: PathBuf },

    /// List the available calculators
    List,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let (request, output) = match cli.command {
        Commands::Compound {
            initial,
            contribution,
            contribution_frequency,
            rate,
            years,
            compounding,
            increment,
            output,
        } => (
            CalculatorInputs::CompoundInterest(CompoundInterestInputs {
                initial_investment: initial,
                contribution_amount: contribution,
                contribution_frequency,
                annual_interest_rate: rate,
                investment_period_years: years,
                compounding_frequency: compounding,
                annual_deposit_increment: increment,
            }),
            output,
        ),
        Commands::Deposit { amount, rate, tenure, payout, output } => (
            CalculatorInputs::FixedDeposit(FixedDepositInputs {
                deposit_amount: amount,
                annual_interest_rate: rate,
                tenure,
                interest_payout: payout,
            }),
            output,
        ),
        Commands::Tbill { amount, days, rate, bank_discount, output } => (
            CalculatorInputs::TreasuryBills(TreasuryBillsInputs {
                investment_amount: amount,
                maturity_period_days: MaturityPeriod::try_from(days)?,
                annual_interest_rate: rate,
                discount_convention: if bank_discount {
                    DiscountConvention::BankDiscount
                } else {
                    DiscountConvention::TrueDiscount
                },
            }),
            output,
        ),
        Commands::Loan { amount, rate, period, unit, income, start_date, output } => (
            CalculatorInputs::Loans(LoanInputs {
                loan_amount: amount,
                annual_interest_rate: rate,
                loan_period: period,
                loan_period_unit: unit,
                annual_income: income,
                start_date,
            }),
            output,
        ),
        Commands::Retirement {
            current_age,
            retirement_age,
            balance,
            monthly,
            expected_return,
            inflation,
            output,
        } => (
            CalculatorInputs::RetirementPlanner(RetirementPlannerInputs {
                current_age,
                retirement_age,
                current_balance: balance,
                monthly_contribution: monthly,
                expected_return,
                inflation_rate: inflation,
            }),
            output,
        ),
        Commands::Run { path, output } => {
            let request = scenario::load_request(&path)
                .with_context(|| format!("Failed to load request from {}", path.display()))?;
            (request, output)
        }
        Commands::Batch { path } => {
            let requests = scenario::load_requests(&path)
                .with_context(|| format!("Failed to load requests from {}", path.display()))?;
            let results = ScenarioRunner::new().run_batch(&requests);
            println!("{}", serde_json::to_string_pretty(&results)?);
            return Ok(());
        }
        Commands::List => {
            for id in CalculatorId::ALL {
                println!("{:<18} {:<20} {}", id.as_str(), id.title(), id.description());
            }
            return Ok(());
        }
    };

    let outputs = ScenarioRunner::new().run(&request)?;

    if let Some(path) = &output.csv {
        export::write_breakdown_file(&outputs, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Breakdown written to {}", path.display());
    }

    if output.json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
    } else {
        print_report(&outputs, output.rows);
    }

    Ok(())
}

fn print_report(outputs: &CalculatorOutputs, rows: usize) {
    let summary = outputs.summary();
    let id = summary.calculator_id;

    println!("{}", id.title());
    println!("{}\n", "=".repeat(id.title().len()));
    for figure in &summary.figures {
        println!("  {:<28} {:>16.2}", figure.label, figure.value);
    }
    println!();

    match outputs {
        CalculatorOutputs::CompoundInterest(out) => {
            println!(
                "{:>5} {:>16} {:>14} {:>14} {:>16}",
                "Year", "Start", "Contribution", "Interest", "End"
            );
            for row in out.annual_breakdown.iter().take(rows) {
                println!(
                    "{:>5} {:>16.2} {:>14.2} {:>14.2} {:>16.2}",
                    row.year,
                    row.starting_balance,
                    row.contribution,
                    row.interest_earned,
                    row.ending_balance
                );
            }
        }
        CalculatorOutputs::FixedDeposit(out) => {
            println!("{:<14} {:>12} {:>16} {:>12}", "Period", "Interest", "Balance", "Payout Date");
            for row in out.breakdown.iter().take(rows) {
                println!(
                    "{:<14} {:>12.2} {:>16.2} {:>12}",
                    row.period, row.interest_paid, row.balance, row.payout_date
                );
            }
        }
        CalculatorOutputs::TreasuryBills(out) => {
            for step in &out.breakdown {
                println!("  {:<24} {:>12}  {}", step.step, step.value, step.explanation);
            }
        }
        CalculatorOutputs::Loans(out) => {
            println!(
                "{:>6} {:>12} {:>12} {:>12} {:>16}",
                "Month", "EMI", "Interest", "Principal", "Balance"
            );
            for row in out.amortization_schedule.iter().take(rows) {
                println!(
                    "{:>6} {:>12.2} {:>12.2} {:>12.2} {:>16.2}",
                    row.period, row.emi, row.interest, row.principal, row.remaining_balance
                );
            }
        }
        CalculatorOutputs::RetirementPlanner(out) => {
            println!(
                "{:>5} {:>4} {:>16} {:>12} {:>14} {:>16} {:>16}",
                "Year", "Age", "Start", "Contrib", "Interest", "End", "Real"
            );
            for row in out.yearly_projection.iter().take(rows) {
                println!(
                    "{:>5} {:>4} {:>16.2} {:>12.2} {:>14.2} {:>16.2} {:>16.2}",
                    row.year,
                    row.age,
                    row.start_balance,
                    row.contribution,
                    row.interest,
                    row.end_balance,
                    row.inflation_adjusted_value
                );
            }
        }
    }

    let total = outputs.breakdown_len();
    if total > rows && !matches!(outputs, CalculatorOutputs::TreasuryBills(_)) {
        println!("... ({} more rows)", total - rows);
    }
}
