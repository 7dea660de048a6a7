use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use super::Table;
use crate::domain::ClientError;

/// Write a table as CSV (header row first)
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<(), ClientError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(table.headers())?;
    for row in table.rows() {
        wtr.write_record(row)?;
    }
    wtr.flush()
        .map_err(|e| ClientError::Storage(format!("CSV flush failed: {}", e)))?;
    Ok(())
}

/// Export to a file, or to stdout when `target` is `-`
pub fn export_csv(table: &Table, target: &Path) -> Result<(), ClientError> {
    if target.as_os_str() == "-" {
        return write_csv(table, io::stdout().lock());
    }

    let file = File::create(target)
        .map_err(|e| ClientError::Storage(format!("{}: {}", target.display(), e)))?;
    write_csv(table, file)?;
    tracing::info!("Exported {} rows to {:?}", table.len(), target);
    Ok(())
}
