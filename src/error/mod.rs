/// Centralized error handling for nashor
pub mod nashor;

pub use self::nashor::{NashorError, Result};
