//! Sheet extractor - turns one sheet's cell range into a `SheetTable`

use crate::filter;
use crate::types::SheetTable;
use calamine::{Data, Range};

/// Extract the named sheet into a table, or `None` if the sheet name
/// carries the exclusion marker.
///
/// The first row of the sheet's used range defines the columns; blank
/// header cells are skipped, so trailing ragged headers never become
/// columns. Data cells are read positionally against the established
/// column list and anything past the header width is dropped. Every value
/// is extracted as a string: empty and error cells become `""`. Rows where
/// every cell came out empty are not kept.
pub fn extract_sheet(name: &str, range: &Range<Data>) -> Option<SheetTable> {
    if filter::is_excluded_name(name) {
        return None;
    }

    let mut table = SheetTable::new(name);
    let (height, width) = range.get_size();
    if height == 0 {
        return Some(table);
    }

    // Header row: blank cells do not become columns
    for col in 0..width {
        if let Some(cell) = range.get((0, col)) {
            let header = cell_to_string(cell);
            if !header.is_empty() {
                table.columns.push(header);
            }
        }
    }

    // Data rows, aligned against the established columns
    for row in 1..height {
        let mut values = Vec::with_capacity(table.columns.len());
        for col in 0..width {
            if col >= table.columns.len() {
                break;
            }
            let value = range.get((row, col)).map(cell_to_string).unwrap_or_default();
            values.push(value);
        }

        if values.iter().any(|v| !v.is_empty()) {
            table.rows.push(values);
        }
    }

    Some(table)
}

/// String rendition of a cell. No type inference: numbers and booleans
/// become their display form, error cells become `""` like empty ones.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}
