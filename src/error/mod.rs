//! Error types for the mapper.
//!
//! This module provides:
//! - `RecordError`: Why a single record was rejected (never fatal)
//! - `Stage`: Indicates where a stream failure occurred
//! - `StreamError`: A fatal failure of the input, output or diagnostic stream

use std::fmt;

use thiserror::Error;

use crate::format::quote_field;

/// Why a record produced no output line.
///
/// Every variant is record-scoped: the engine counts it and moves on to
/// the next record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// The record has fewer fields than the layout requires
    #[error("record has {found} field(s), at least {required} required")]
    TooFewFields { found: usize, required: usize },

    /// A designated field holds the null marker
    #[error("field {field} is a null marker")]
    NullMarker { field: usize },

    /// A designated field is empty after trimming
    #[error("field {field} is empty")]
    EmptyField { field: usize },

    /// A designated field is not a decimal number
    #[error("could not convert string to float: {}", quote_field(.value))]
    InvalidFloat { field: usize, value: String },

    /// The popularity value parsed, but is NaN or infinite
    #[error("cannot convert float {} to integer", describe_non_finite(.value))]
    NotAnInteger { field: usize, value: f64 },
}

impl RecordError {
    /// Whether this rejection is written to the diagnostic stream.
    ///
    /// Only numeric failures are reported; structural, null and empty
    /// rejections are silent.
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            RecordError::InvalidFloat { .. } | RecordError::NotAnInteger { .. }
        )
    }
}

fn describe_non_finite(value: &f64) -> &'static str {
    if value.is_nan() { "NaN" } else { "infinity" }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the stream
    Open,
    /// Error while reading a record
    Read,
    /// Error while writing a line
    Write,
    /// Error while flushing buffered output
    Flush,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Read => write!(f, "Read"),
            Stage::Write => write!(f, "Write"),
            Stage::Flush => write!(f, "Flush"),
        }
    }
}

/// A stream failure that stops the run.
#[derive(Debug)]
pub struct StreamError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the stream ("-" for stdin/stdout, "stderr", ...)
    pub target: String,
    /// The underlying error
    pub error: Box<dyn std::error::Error + Send + Sync>,
}

impl StreamError {
    pub(crate) fn new(
        stage: Stage,
        target: impl Into<String>,
        error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            stage,
            target: target.into(),
            error: error.into(),
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.target, self.error)
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}
