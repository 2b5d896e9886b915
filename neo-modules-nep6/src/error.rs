use thiserror::Error;

#[derive(Debug, Error)]
pub enum Nep6Error {
    #[error("invalid NEP-6 JSON: {0}")]
    Json(#[from] serde_json::Error),
}
