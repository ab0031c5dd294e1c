#![allow(dead_code)]

use std::io::{Error, Write};
use tempfile::NamedTempFile;

/// Writes an operation script with the standard header followed by `rows`.
pub fn write_script(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "type, amount")?;
    for row in rows {
        writeln!(file, "{}", row)?;
    }
    file.flush()?;
    Ok(file)
}

/// Writes `deposits` deposits of `deposit_amount` followed by `withdrawals`
/// withdrawals of `withdraw_amount`.
pub fn generate_script(
    deposits: usize,
    deposit_amount: f64,
    withdrawals: usize,
    withdraw_amount: f64,
) -> Result<NamedTempFile, Error> {
    let file = NamedTempFile::new()?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file.reopen()?);
    wtr.write_record(["type", "amount"])?;

    for _ in 0..deposits {
        wtr.write_record(["deposit", deposit_amount.to_string().as_str()])?;
    }
    for _ in 0..withdrawals {
        wtr.write_record(["withdraw", withdraw_amount.to_string().as_str()])?;
    }

    wtr.flush()?;
    Ok(file)
}
