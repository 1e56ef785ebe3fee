use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColumnError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown format '{requested}' (valid formats: {valid})")]
    UnknownFormat { requested: String, valid: String },

    #[error("Column name '{0}' is not bound")]
    UnboundName(String),

    #[error("Invalid field reference: '{0}'")]
    InvalidFieldReference(String),
}
