//! Sheetpack - spreadsheet workbooks in, per-sheet JSON data assets out.
//!
//! This library converts Excel workbooks (binary `.xls` and OpenXML
//! `.xlsx`) into one JSON file per sheet, for use as data-import assets in
//! a game-development pipeline.
//!
//! # Conventions
//!
//! - Each sheet becomes `<SheetNameWithoutSpaces>.json`, an array of
//!   objects keyed by the sheet's header row, every value a string.
//! - A leading `~` on a file, sheet or column name excludes it.
//! - Columns that are empty in every row and rows where every cell is
//!   empty never reach the output.
//!
//! # Example
//!
//! ```no_run
//! use sheetpack::convert_directory;
//! use std::path::Path;
//!
//! let report = convert_directory(Path::new("data/sheets"), Path::new("assets/data"), false)?;
//! println!("{} json files written", report.sheets_written);
//! # Ok::<(), sheetpack::SheetpackError>(())
//! ```
//!
//! Incremental mode skips workbooks whose every sheet already has an
//! output file newer than the workbook:
//!
//! ```no_run
//! use sheetpack::convert_directory;
//! use std::path::Path;
//!
//! let report = convert_directory(Path::new("data/sheets"), Path::new("assets/data"), true)?;
//! println!("{} files skipped", report.files_skipped);
//! # Ok::<(), sheetpack::SheetpackError>(())
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod excel;
pub mod filter;
pub mod project;
pub mod types;

// Re-export commonly used items
pub use convert::{convert_directory, convert_file, discover_workbooks, is_stale};
pub use error::{SheetpackError, SheetpackResult};
pub use types::{ConversionReport, SheetTable};
