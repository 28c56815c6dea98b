// src/process/mod.rs

pub mod date_parser;
pub mod profile;
pub mod table;

use self::date_parser::DateFormat;
use self::profile::{Profile, EIA_TIMESERIES};
use self::table::{Cell, Table};
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// The response does not have the layout the profile expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("response has no `{path}` key")]
    MissingKey { path: String },

    #[error("`{path}` holds {found}, expected a list of records")]
    NotAList { path: String, found: &'static str },

    #[error("element {index} of `{path}` is {found}, expected a record object")]
    NotARecord {
        path: String,
        index: usize,
        found: &'static str,
    },

    #[error("no record carries a `{column}` field")]
    MissingColumn { column: String },
}

/// Why a single record was left out of the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowRejection {
    #[error("missing value in column `{column}`")]
    Missing { column: String },

    #[error("fields `{first}` and `{second}` both map to column `{column}`")]
    Conflict {
        column: String,
        first: String,
        second: String,
    },

    #[error("`{value}` in column `{column}` is not a {format} date")]
    InvalidDate {
        column: String,
        value: String,
        format: DateFormat,
    },
}

/// Normalize an EIA v2 time-series response.
pub fn normalize(raw: &Value) -> Result<Table, ShapeError> {
    normalize_with(&EIA_TIMESERIES, raw)
}

/// Turn the record list found at `profile.record_path` into a [`Table`].
///
/// Fields are renamed per the profile; columns appear in order of first
/// appearance across records. A record holding two fields that land on the
/// same column (`period` and `date`) is dropped. Rows with an unparseable date or a missing value
/// in any column are dropped and logged, never fatal. Row order is kept.
#[instrument(level = "debug", skip_all, fields(profile = profile.name))]
pub fn normalize_with(profile: &Profile, raw: &Value) -> Result<Table, ShapeError> {
    // 1) locate and validate the record list
    let records = extract_records(profile, raw)?;

    // 2) collect the renamed header
    let mut columns: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for record in &records {
        for field in record.keys() {
            let name = profile.rename(field);
            if !index.contains_key(name) {
                index.insert(name.to_string(), columns.len());
                columns.push(name.to_string());
            }
        }
    }

    let date_idx = match profile.date_column {
        Some(dc) if !records.is_empty() => {
            let idx = index
                .get(dc.name)
                .copied()
                .ok_or_else(|| ShapeError::MissingColumn {
                    column: dc.name.to_string(),
                })?;
            Some((idx, dc.format))
        }
        _ => None,
    };

    // 3) convert, validate and keep the clean rows
    let mut table = Table::new(columns);
    let mut dropped = 0usize;
    for (i, record) in records.iter().enumerate() {
        match normalize_row(profile, record, table.columns(), &index, date_idx) {
            Ok(row) => table.push_row(row),
            Err(reason) => {
                debug!(row = i, %reason, "dropping row");
                dropped += 1;
            }
        }
    }

    info!(
        kept = table.len(),
        dropped,
        columns = table.columns().len(),
        "normalized records"
    );
    Ok(table)
}

fn extract_records<'a>(
    profile: &Profile,
    raw: &'a Value,
) -> Result<Vec<&'a Map<String, Value>>, ShapeError> {
    let mut cur = raw;
    for (depth, key) in profile.record_path.iter().enumerate() {
        cur = cur.get(key).ok_or_else(|| ShapeError::MissingKey {
            path: profile.record_path[..=depth].join("."),
        })?;
    }

    let path = profile.record_path_display();
    let list = cur.as_array().ok_or_else(|| ShapeError::NotAList {
        path: path.clone(),
        found: kind(cur),
    })?;

    list.iter()
        .enumerate()
        .map(|(index, v)| {
            v.as_object().ok_or_else(|| ShapeError::NotARecord {
                path: path.clone(),
                index,
                found: kind(v),
            })
        })
        .collect()
}

fn normalize_row(
    profile: &Profile,
    record: &Map<String, Value>,
    columns: &[String],
    index: &HashMap<String, usize>,
    date_idx: Option<(usize, DateFormat)>,
) -> Result<Vec<Cell>, RowRejection> {
    let mut slots: Vec<Option<Cell>> = vec![None; columns.len()];
    let mut sources: Vec<Option<&str>> = vec![None; columns.len()];
    for (field, value) in record {
        // every renamed field was registered while building the header
        if let Some(&idx) = index.get(profile.rename(field)) {
            if let Some(first) = sources[idx] {
                return Err(RowRejection::Conflict {
                    column: columns[idx].clone(),
                    first: first.to_string(),
                    second: field.clone(),
                });
            }
            sources[idx] = Some(field.as_str());
            slots[idx] = to_cell(value);
        }
    }

    if let Some((idx, format)) = date_idx {
        if let Some(cell) = slots[idx].take() {
            let parsed = match &cell {
                Cell::Text(s) => format.parse(s),
                _ => None,
            };
            match parsed {
                Some(date) => slots[idx] = Some(Cell::Date(date)),
                None => {
                    return Err(RowRejection::InvalidDate {
                        column: columns[idx].clone(),
                        value: cell.to_string(),
                        format,
                    })
                }
            }
        }
    }

    slots
        .into_iter()
        .zip(columns)
        .map(|(slot, column)| {
            slot.ok_or_else(|| RowRejection::Missing {
                column: column.clone(),
            })
        })
        .collect()
}

/// JSON scalar → cell; `null` is missing. Nested values keep their JSON text.
fn to_cell(value: &Value) -> Option<Cell> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cell::Text(s.clone())),
        Value::Number(n) => Some(Cell::Number(n.clone())),
        Value::Bool(b) => Some(Cell::Bool(*b)),
        Value::Array(_) | Value::Object(_) => Some(Cell::Text(value.to_string())),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
