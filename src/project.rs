//! Post-extraction filtering and JSON projection.
//!
//! Filtering happens in a fixed order the rest of the pipeline depends on:
//! columns that are empty across every row go first, then columns whose
//! name carries the exclusion marker. Only what survives is serialized.

use crate::error::SheetpackResult;
use crate::filter;
use crate::types::SheetTable;
use serde_json::{Map, Value};

/// Rebuild `table` with pruned columns removed.
///
/// Two passes, in order: content prune (columns empty in every row), then
/// name prune (columns starting with `~`). The result is a fresh table -
/// the input is never mutated in place.
pub fn prune_table(table: &SheetTable) -> SheetTable {
    // Pass 1: content prune
    let kept: Vec<usize> = (0..table.columns.len())
        .filter(|&col| table.rows.iter().any(|row| !row[col].is_empty()))
        .collect();

    // Pass 2: name prune
    let kept: Vec<usize> = kept
        .into_iter()
        .filter(|&col| !filter::is_excluded_name(&table.columns[col]))
        .collect();

    SheetTable {
        name: table.name.clone(),
        columns: kept.iter().map(|&col| table.columns[col].clone()).collect(),
        rows: table
            .rows
            .iter()
            .map(|row| kept.iter().map(|&col| row[col].clone()).collect())
            .collect(),
    }
}

/// Serialize a table to a JSON array-of-objects string.
///
/// Keys are the post-filter column names in column order, values are the
/// cell strings verbatim. Zero rows serialize to `[]`. No envelope, no
/// type coercion - `"10"` stays a string.
pub fn project(table: &SheetTable) -> SheetpackResult<String> {
    let filtered = prune_table(table);

    let mut rows = Vec::with_capacity(filtered.rows.len());
    for row in &filtered.rows {
        let mut object = Map::new();
        for (column, value) in filtered.columns.iter().zip(row) {
            object.insert(column.clone(), Value::String(value.clone()));
        }
        rows.push(Value::Object(object));
    }

    Ok(serde_json::to_string(&Value::Array(rows))?)
}
