//! Name filtering rules shared across discovery, extraction and output.
//!
//! A leading `~` marks a file, sheet or column as excluded from processing.
//! Spreadsheet editors keep a transient `~$` lock file next to an open
//! workbook; those never count as input. Plain prefix/suffix checks are
//! enough here - no patterns.

/// Marker prefix excluding a file, sheet or column from conversion
pub const EXCLUSION_MARKER: char = '~';

/// Prefix of transient lock files created by spreadsheet editors
pub const LOCK_FILE_PREFIX: &str = "~$";

/// True if the name is excluded from processing (`~Hidden`, `~Notes`, ...)
pub fn is_excluded_name(name: &str) -> bool {
    name.starts_with(EXCLUSION_MARKER)
}

/// True if the file name is an editor lock file (`~$budget.xlsx`)
pub fn is_lock_file(file_name: &str) -> bool {
    file_name.starts_with(LOCK_FILE_PREFIX)
}

/// True if the file name is a candidate workbook.
///
/// Extensions are matched case-sensitively: `.xls` and `.xlsx` only.
/// Lock files are never candidates, whatever their extension.
pub fn is_workbook_file(file_name: &str) -> bool {
    if is_lock_file(file_name) {
        return false;
    }
    file_name.ends_with(".xls") || file_name.ends_with(".xlsx")
}

/// Output file name for a sheet: the sheet name with all spaces removed,
/// plus the `.json` extension. `"Enemy Stats"` becomes `"EnemyStats.json"`.
pub fn output_file_name(sheet_name: &str) -> String {
    format!("{}.json", sheet_name.replace(' ', ""))
}
