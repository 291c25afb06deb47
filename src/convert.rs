//! Conversion orchestrator.
//!
//! Discovers workbook files in an input directory, optionally narrows the
//! list to files whose outputs are stale, and converts each surviving file
//! sheet-by-sheet into per-sheet JSON documents. Processing is sequential
//! and stops at the first file-level failure; outputs already written stay
//! in place.

use crate::error::SheetpackResult;
use crate::excel::{extract_sheet, Workbook};
use crate::filter;
use crate::project::project;
use crate::types::ConversionReport;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// List candidate workbook files in `input_dir`.
///
/// A candidate ends in `.xls` or `.xlsx` (case-sensitive) and is not an
/// editor lock file. Order is directory-enumeration order - no sort is
/// applied. An unreadable directory is a fatal error.
pub fn discover_workbooks(input_dir: &Path) -> SheetpackResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if filter::is_workbook_file(file_name) && entry.path().is_file() {
            files.push(entry.path());
        }
    }
    Ok(files)
}

/// True if any non-excluded sheet of `file` lacks an up-to-date output.
///
/// Only sheet names are enumerated - no row data is read. A sheet is up to
/// date when its expected output file exists and is at least as new as the
/// source workbook. A workbook with zero non-excluded sheets is vacuously
/// up to date.
pub fn is_stale(file: &Path, output_dir: &Path) -> SheetpackResult<bool> {
    let workbook = Workbook::open(file)?;
    let source_modified = fs::metadata(file)?.modified()?;

    for sheet_name in workbook.sheet_names() {
        if filter::is_excluded_name(&sheet_name) {
            continue;
        }
        let output = output_dir.join(filter::output_file_name(&sheet_name));
        match fs::metadata(&output) {
            Ok(metadata) => {
                if source_modified > metadata.modified()? {
                    return Ok(true);
                }
            }
            Err(_) => return Ok(true),
        }
    }

    Ok(false)
}

/// Convert one workbook, writing a JSON file per surviving sheet.
///
/// Returns the paths written. Existing files at those paths are
/// overwritten unconditionally; the output directory is created on demand.
pub fn convert_file(file: &Path, output_dir: &Path) -> SheetpackResult<Vec<PathBuf>> {
    info!("processing {}", file.display());

    let mut workbook = Workbook::open(file)?;
    let mut written = Vec::new();

    for sheet_name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&sheet_name)?;
        let Some(table) = extract_sheet(&sheet_name, &range) else {
            continue;
        };

        let json = project(&table)?;

        fs::create_dir_all(output_dir)?;
        let output = output_dir.join(filter::output_file_name(&table.name));
        fs::write(&output, &json)?;
        info!("wrote {}", output.display());
        written.push(output);
    }

    Ok(written)
}

/// Convert every candidate workbook in `input_dir` into `output_dir`.
///
/// With `modified_only`, files whose every relevant output is already up
/// to date are skipped. Stops at the first file that fails; the error is
/// returned and remaining files are not attempted.
pub fn convert_directory(
    input_dir: &Path,
    output_dir: &Path,
    modified_only: bool,
) -> SheetpackResult<ConversionReport> {
    let candidates = discover_workbooks(input_dir)?;
    info!("{} workbook files found in {}", candidates.len(), input_dir.display());

    let mut report = ConversionReport {
        files_discovered: candidates.len(),
        ..Default::default()
    };

    let process_list: Vec<PathBuf> = if modified_only {
        let mut stale = Vec::new();
        for file in candidates {
            if is_stale(&file, output_dir)? {
                stale.push(file);
            } else {
                report.files_skipped += 1;
            }
        }
        if stale.is_empty() {
            info!("no workbook changes since last conversion");
        } else {
            info!("{} workbook files updated/added since last conversion", stale.len());
        }
        stale
    } else {
        candidates
    };

    for file in &process_list {
        match convert_file(file, output_dir) {
            Ok(written) => {
                report.files_converted += 1;
                report.sheets_written += written.len();
            }
            Err(e) => {
                error!("failed to convert {}: {}", file.display(), e);
                return Err(e);
            }
        }
    }

    info!("conversion finished: {}", report.summary());
    Ok(report)
}
