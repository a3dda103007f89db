pub mod errors;
pub mod types;

pub use errors::{BridgeError, ConfigError, KioskError};
pub use types::{Color, Offset, Rect, Size};

pub type Result<T> = std::result::Result<T, KioskError>;
