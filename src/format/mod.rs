//! Textual rendering of records.
//!
//! This module provides:
//! - `OutputRecord`: The mapped (popularity, followers) pair and its line form
//! - `render_decimal`: Natural decimal text of a float
//! - `render_integral`: Digits of an integral float, without a fraction
//! - `render_fields` / `quote_field`: The field-sequence text used in diagnostics

mod decimal;
mod fields;

use std::fmt;

pub use decimal::{render_decimal, render_integral};
pub use fields::{quote_field, render_fields};

/// One accepted record, keyed by popularity.
///
/// `popularity` is already truncated toward zero; it is kept as a float
/// because its magnitude is not bounded by any integer type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputRecord {
    pub popularity: f64,
    pub followers: f64,
}

impl OutputRecord {
    pub fn new(popularity: f64, followers: f64) -> Self {
        Self {
            popularity,
            followers,
        }
    }
}

/// Renders `<popularity>\t<followers>` without a line terminator.
impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}",
            render_integral(self.popularity),
            render_decimal(self.followers)
        )
    }
}
