// Utilities
pub mod error;
pub mod formatter;
