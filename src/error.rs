use thiserror::Error;

pub type CopyResult<T> = Result<T, CopyError>;

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Sheet '{sheet}' not found in {file}")]
    SheetNotFound { sheet: String, file: String },

    #[error("Invalid cell reference '{0}'")]
    CellRef(String),
}
