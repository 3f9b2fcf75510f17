// Pipeline module - engine and query keys only
// Concrete sources and transformers live in their own modules

pub mod core;
pub mod keys;

// Re-export core types
pub use self::core::*;
pub use self::keys::*;
