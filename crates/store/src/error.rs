use std::io;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed save file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} holds {value}, which is not a tile value")]
    InvalidTile { field: String, value: u32 },
    #[error("invalid history: {0}")]
    InvalidHistory(String),
    #[error("invalid accumulated time {0}")]
    InvalidTime(f64),
}
