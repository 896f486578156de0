//! CSV export of projection output

use super::series::ProjectionResult;
use crate::error::SimulatorError;
use std::io::Write;
use std::path::Path;

/// Write the 24-month series with a profit column
pub fn write_monthly_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<(), SimulatorError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Month", "Revenue", "Expenses", "Profit", "Utilization"])?;

    let profits = result.monthly_profit();
    for (point, profit) in result.monthly_series.iter().zip(profits) {
        csv.write_record([
            point.month_label.clone(),
            format!("{:.2}", point.revenue),
            format!("{:.2}", point.expenses),
            format!("{:.2}", profit),
            format!("{:.4}", point.utilization),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the yearly comparison rows as serialized by serde
pub fn write_yearly_csv<W: Write>(writer: W, result: &ProjectionResult) -> Result<(), SimulatorError> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in &result.yearly_comparison {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn save_monthly_csv<P: AsRef<Path>>(path: P, result: &ProjectionResult) -> Result<(), SimulatorError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_monthly_csv(file, result)
}

pub fn save_yearly_csv<P: AsRef<Path>>(path: P, result: &ProjectionResult) -> Result<(), SimulatorError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_yearly_csv(file, result)
}
