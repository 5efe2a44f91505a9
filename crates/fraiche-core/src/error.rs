#[derive(Debug, thiserror::Error)]
pub enum FraicheError {
    #[error("catalog request failed: {0}")]
    Catalog(#[from] reqwest::Error),

    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("local product table is invalid: {0}")]
    LocalTable(String),

    #[error("unknown category '{name}'. Available: {available}")]
    UnknownCategory { name: String, available: String },

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
