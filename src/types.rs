//==============================================================================
// Extracted sheet data
//==============================================================================

/// One sheet pulled out of a workbook: an ordered column list plus data rows.
///
/// Rows are positional - `rows[r][c]` belongs to `columns[c]`. Every value is
/// a string; empty cells are `""`. Rows where every cell is empty are never
/// stored (the extractor drops them).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTable {
    /// Sheet name as it appears in the workbook
    pub name: String,
    /// Column names from the header row, in sheet order
    pub columns: Vec<String>,
    /// Data rows, each aligned with `columns`
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Create an empty table for the named sheet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True if the table holds no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

//==============================================================================
// Conversion run outcome
//==============================================================================

/// Aggregate outcome of one conversion run.
///
/// `convert_directory` returns exactly one `Ok(report)` or `Err(error)`
/// per run; a report means every attempted file converted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Workbook files found in the input directory
    pub files_discovered: usize,
    /// Files dropped by the incremental filter (outputs already up to date)
    pub files_skipped: usize,
    /// Files fully converted
    pub files_converted: usize,
    /// JSON files written across all converted workbooks
    pub sheets_written: usize,
}

impl ConversionReport {
    /// One-line human summary of the run
    pub fn summary(&self) -> String {
        format!(
            "{} found, {} skipped, {} converted, {} json files written",
            self.files_discovered, self.files_skipped, self.files_converted, self.sheets_written
        )
    }
}
