//! Foundational data structures, error types, and codec options.

pub mod error;
pub mod models;
pub mod options;
