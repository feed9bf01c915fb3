// CSV export of the currently filtered cars

use anyhow::{Context, Result};
use std::io::Write;

use crate::models::VehicleRecord;

// Writes a header row followed by one row per record, in the given order
pub fn write_csv<W: Write>(records: &[VehicleRecord], writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer
            .serialize(record)
            .with_context(|| format!("Failed to write CSV row for car {}", record.id))?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;
    tracing::info!(rows = records.len(), "Exported cars to CSV");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn writes_header_and_rows_in_order() {
        let catalog = Catalog::seeded();
        let records = &catalog.records()[3..];
        let mut out = Vec::new();
        assert_eq!(write_csv(records, &mut out).unwrap(), 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id,brand,model,price,fuelType,seats,image,description");
        assert!(lines[1].starts_with("4,Tesla,Model 3,50000,Electric,5,"));
        assert!(lines[2].starts_with("5,BMW,X5,65000,Diesel,7,"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_export_writes_nothing() {
        let mut out = Vec::new();
        assert_eq!(write_csv(&[], &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }
}
