//! Workbook reader - extension-selected decoding of .xls and .xlsx files

use crate::error::{SheetpackError, SheetpackResult};
use calamine::{open_workbook, Data, Range, Reader, Xls, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// An open workbook, decoded as binary-legacy or OpenXML depending on the
/// file extension. One workbook is held open at a time; the handle is
/// dropped before the next file is processed.
pub enum Workbook {
    /// '97-2003 binary format (*.xls)
    Binary(Xls<BufReader<File>>),
    /// 2007+ OpenXML format (*.xlsx)
    OpenXml(Xlsx<BufReader<File>>),
}

impl Workbook {
    /// Open the workbook at `path`, selecting the decoder from the file
    /// extension. Extensions are case-sensitive, matching file discovery.
    /// Any other extension is an unsupported format.
    pub fn open<P: AsRef<Path>>(path: P) -> SheetpackResult<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        if file_name.ends_with(".xlsx") {
            let workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
                SheetpackError::Workbook(format!("failed to open {}: {}", path.display(), e))
            })?;
            Ok(Workbook::OpenXml(workbook))
        } else if file_name.ends_with(".xls") {
            let workbook: Xls<_> = open_workbook(path).map_err(|e| {
                SheetpackError::Workbook(format!("failed to open {}: {}", path.display(), e))
            })?;
            Ok(Workbook::Binary(workbook))
        } else {
            Err(SheetpackError::UnsupportedFormat(path.to_path_buf()))
        }
    }

    /// Sheet names in workbook order. Cheap - no row data is read.
    pub fn sheet_names(&self) -> Vec<String> {
        match self {
            Workbook::Binary(workbook) => workbook.sheet_names().to_vec(),
            Workbook::OpenXml(workbook) => workbook.sheet_names().to_vec(),
        }
    }

    /// Cell range of the named sheet
    pub fn worksheet_range(&mut self, name: &str) -> SheetpackResult<Range<Data>> {
        match self {
            Workbook::Binary(workbook) => workbook.worksheet_range(name).map_err(|e| {
                SheetpackError::Sheet(format!("failed to read sheet '{}': {}", name, e))
            }),
            Workbook::OpenXml(workbook) => workbook.worksheet_range(name).map_err(|e| {
                SheetpackError::Sheet(format!("failed to read sheet '{}': {}", name, e))
            }),
        }
    }
}
