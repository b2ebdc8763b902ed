//! Error types for the Stride domain core

use thiserror::Error;

/// Domain-level error types
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),
}
