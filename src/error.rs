use std::path::PathBuf;
use thiserror::Error;

pub type SheetpackResult<T> = Result<T, SheetpackError>;

#[derive(Error, Debug)]
pub enum SheetpackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported workbook format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("workbook error: {0}")]
    Workbook(String),

    #[error("sheet error: {0}")]
    Sheet(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("config error: {0}")]
    Config(String),
}
