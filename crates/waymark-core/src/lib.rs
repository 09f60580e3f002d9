pub mod error;
pub mod result;
pub mod traits;

pub use error::WaymarkError;
pub use result::WaymarkResult;
pub use traits::DataSource;
