pub mod csv_file;

use crate::process::table::Table;
use std::fmt::Write;

pub use csv_file::{read_csv, write_csv};

/// First `head` rows followed by the table shape, ready for stdout.
pub fn summary(table: &Table, head: usize) -> String {
    let (rows, cols) = table.shape();
    let mut out = String::new();
    let _ = writeln!(out, "First {} records retrieved and cleaned:", head.min(rows));
    let _ = write!(out, "{}", table.head(head));
    let _ = writeln!(out);
    let _ = writeln!(out, "Final table shape: ({}, {})", rows, cols);
    out
}
