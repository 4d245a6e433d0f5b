#![cfg(test)]

/// Shared fixture and helpers
pub mod utils;
