use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("cannot parse {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },

    #[error("Serialization error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Filter longer than {max} characters")]
    FilterTooLong { max: usize },

    #[error("Invalid filter: {0}")]
    Filter(#[from] regex::Error),

    #[error("Duplicate id in tree: {id}")]
    DuplicateId { id: String },
}

pub type Result<T> = std::result::Result<T, LocatorError>;
