use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaymarkError {
    #[error("Kind mismatch: {0}")]
    KindMismatch(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Flat index not found: {0}")]
    IndexNotFound(usize),

    #[error("Not found: {0}")]
    NotFound(String),
}
