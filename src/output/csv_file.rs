// src/output/csv_file.rs

use crate::process::date_parser::parse_year_month_day;
use crate::process::table::{Cell, Table};
use anyhow::{anyhow, Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::{fs, path::Path};
use tracing::info;

/// Write `table` as CSV: header row, then one line per row.
///
/// Dates are written as `YYYY-MM-DD`, numbers in their JSON form, booleans as
/// `true`/`false`. Missing parent directories are created first.
pub fn write_csv(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {:?}", parent))?;
            info!("created directory {}", parent.display());
        }
    }

    info!("saving {} rows to {}", table.len(), path.display());
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("opening {:?} for writing", path))?;

    wtr.write_record(table.columns())
        .with_context(|| format!("writing header to {:?}", path))?;
    for (i, row) in table.rows().iter().enumerate() {
        wtr.serialize(row)
            .with_context(|| format!("writing row {} to {:?}", i, path))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {:?}", path))?;

    Ok(())
}

/// Read a file produced by [`write_csv`] back into a [`Table`].
///
/// Every value comes back as text except `date_column`, which is parsed as
/// `YYYY-MM-DD`.
pub fn read_csv(path: impl AsRef<Path>, date_column: Option<&str>) -> Result<Table> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {:?}", path))?;

    let columns: Vec<String> = rdr
        .headers()
        .with_context(|| format!("reading header of {:?}", path))?
        .iter()
        .map(str::to_string)
        .collect();
    let date_idx = date_column.and_then(|name| columns.iter().position(|c| c == name));

    let mut table = Table::new(columns);
    for (i, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("CSV parse error in {:?} at record {}", path, i))?;
        let row = record
            .iter()
            .enumerate()
            .map(|(col, field)| {
                if Some(col) == date_idx {
                    parse_year_month_day(field)
                        .map(Cell::Date)
                        .ok_or_else(|| anyhow!("bad date {:?} at record {}", field, i))
                } else {
                    Ok(Cell::Text(field.to_string()))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        table.push_row(row);
    }

    Ok(table)
}
