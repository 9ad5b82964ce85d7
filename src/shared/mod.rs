/// Shared utilities used across all layers
pub mod chunking;
pub mod error;
pub mod result;

#[cfg(test)]
pub(crate) mod testing;

pub use result::Result;
