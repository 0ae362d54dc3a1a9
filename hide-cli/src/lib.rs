//! Library entry for hide-cli used by integration tests and embedding.

pub mod commands;

// Re-export commonly used items
pub use crate::commands::{decode, encode, inspect};
