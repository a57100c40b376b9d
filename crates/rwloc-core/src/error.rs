// crates/rwloc-core/src/error.rs
use crate::model::Level;
use thiserror::Error;

/// Errors raised while building a [`LocationIndex`](crate::LocationIndex).
///
/// Every variant is a load-time failure. Queries on a built index never fail:
/// a missing entity is `None` and an empty listing is an empty `Vec`.
#[derive(Debug, Error)]
pub enum RwLocError {
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset contains no location records")]
    EmptyDataset,

    #[error("Inconsistent {level} {code}: {detail}")]
    Inconsistent {
        level: Level,
        code: String,
        detail: String,
    },

    #[error("Compressed dataset {0} requires the `compact` feature")]
    CompressionUnsupported(String),
}

pub type Result<T> = std::result::Result<T, RwLocError>;
