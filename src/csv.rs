// src/csv.rs
use std::io::{self, Write};

use crate::data::PopulationRecord;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// `ID,Movie` export: header row, then records sorted by ID ascending.
pub fn population_to_csv(records: &[PopulationRecord]) -> String {
    let mut sorted: Vec<&PopulationRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.id);

    let mut buf: Vec<u8> = Vec::new();
    let _ = write_row(&mut buf, &[s!("ID"), s!("Movie")], ',');
    for r in sorted {
        let _ = write_row(&mut buf, &[r.id.to_string(), r.movie.clone()], ',');
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
