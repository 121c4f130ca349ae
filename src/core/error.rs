use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GainsError {
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("unable to read input {}", path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed transaction record: {0}")]
    MalformedRecordStructure(#[from] serde_json::Error),
    #[error("malformed transaction record: restricted stock lot is missing {field}")]
    MissingField { field: &'static str },
    #[error("invalid date in {field}: {value:?} (expected MM/DD/YYYY)")]
    InvalidDateFormat { field: &'static str, value: String },
    #[error("invalid amount in {field}: {value:?}")]
    InvalidMonetaryFormat { field: &'static str, value: String },
    #[error("amount out of range computing {0}")]
    AmountOverflow(&'static str),
}

impl GainsError {
    /// Map an io error from opening `path`, keeping not-found distinct
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            GainsError::FileNotFound { path }
        } else {
            GainsError::UnreadableInput { path, source }
        }
    }
}
