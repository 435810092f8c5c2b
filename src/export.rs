//! CSV export of breakdown tables

use crate::calculators::CalculatorOutputs;
use crate::error::CalcResult;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the period-by-period breakdown of `outputs` as CSV with a header row
pub fn write_breakdown_csv<W: Write>(outputs: &CalculatorOutputs, writer: W) -> CalcResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    match outputs {
        CalculatorOutputs::CompoundInterest(out) => {
            write_rows(&mut csv_writer, &out.annual_breakdown)?
        }
        CalculatorOutputs::FixedDeposit(out) => write_rows(&mut csv_writer, &out.breakdown)?,
        CalculatorOutputs::TreasuryBills(out) => write_rows(&mut csv_writer, &out.breakdown)?,
        CalculatorOutputs::Loans(out) => write_rows(&mut csv_writer, &out.amortization_schedule)?,
        CalculatorOutputs::RetirementPlanner(out) => {
            write_rows(&mut csv_writer, &out.yearly_projection)?
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the breakdown to a file, replacing it if present
pub fn write_breakdown_file<P: AsRef<Path>>(
    outputs: &CalculatorOutputs,
    path: P,
) -> CalcResult<()> {
    let file = File::create(path)?;
    write_breakdown_csv(outputs, file)
}

fn write_rows<W: Write, T: Serialize>(writer: &mut csv::Writer<W>, rows: &[T]) -> CalcResult<()> {
    for row in rows {
        writer.serialize(row)?;
    }
    Ok(())
}
