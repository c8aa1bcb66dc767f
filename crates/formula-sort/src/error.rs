pub type SortResult<T> = Result<T, SortError>;

#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("key/payload length mismatch: {keys} keys, {payload} payload records")]
    LengthMismatch { keys: usize, payload: usize },

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("invalid dataset json: {0}")]
    Json(#[from] serde_json::Error),
}
