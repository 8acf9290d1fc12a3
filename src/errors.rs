//! Error types for the crate.
//!
//! This module defines low-level backend errors returned by the concrete
//! arkworks backends as well as the high-level `Error` type returned by the
//! field, polynomial and commitment APIs.
//!
//! The errors are implemented with `thiserror` so they are easy to convert
//! and debug in higher-level code.
//!
//! # Examples
//!
//! ```rust
//! use kzg_multiopen::{Error, FieldElement, Fr, inverse};
//!
//! assert!(matches!(inverse(&Fr::zero()), Err(Error::DivisionByZero)));
//! ```

use thiserror::Error;

/// Errors bubbled up from backend implementations (arkworks curves).
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("unsupported curve: {0}")]
    UnsupportedCurve(&'static str),
    #[error("unsupported backend feature: {0}")]
    UnsupportedFeature(&'static str),
    #[error("serialization failure: {0}")]
    Serialization(&'static str),
    #[error("math error: {0}")]
    Math(&'static str),
}

/// High-level errors returned by the field, polynomial and commitment APIs.
///
/// Every variant is a precondition violation detected where it happens.
/// Nothing is retried and nothing is silently recovered.
#[derive(Debug, Error)]
pub enum Error {
    /// Inverse of zero, or polynomial division by the zero polynomial.
    #[error("division by zero")]
    DivisionByZero,
    /// The polynomial does not fit in the reference string.
    #[error("polynomial degree {degree} exceeds the supported maximum {max}")]
    DegreeExceeded { degree: usize, max: usize },
    /// Duplicate x-coordinates, or an empty set where points are required.
    #[error("invalid opening set: {0}")]
    InvalidOpeningSet(String),
    /// The claimed evaluations do not match the polynomial being opened.
    #[error("opening values do not match the committed polynomial")]
    OpeningMismatch,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}
