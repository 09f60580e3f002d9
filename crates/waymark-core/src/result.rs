use crate::error::WaymarkError;

pub type WaymarkResult<T> = Result<T, WaymarkError>;
