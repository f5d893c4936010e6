//! Counters for a mapper run.

use crate::error::RecordError;

/// What a run did with its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Whether a header record was read
    pub header_seen: bool,

    /// Data records read after the header
    pub records: usize,

    /// Records written to the output stream
    pub emitted: usize,

    /// Records skipped for having too few fields
    pub too_few_fields: usize,

    /// Records skipped for a null marker
    pub null_marker: usize,

    /// Records skipped for an empty designated field
    pub empty_field: usize,

    /// Records skipped for a numeric parse failure
    pub invalid_number: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records skipped for any reason.
    pub fn skipped(&self) -> usize {
        self.too_few_fields + self.null_marker + self.empty_field + self.invalid_number
    }

    pub(crate) fn record_skip(&mut self, reason: &RecordError) {
        match reason {
            RecordError::TooFewFields { .. } => self.too_few_fields += 1,
            RecordError::NullMarker { .. } => self.null_marker += 1,
            RecordError::EmptyField { .. } => self.empty_field += 1,
            RecordError::InvalidFloat { .. } | RecordError::NotAnInteger { .. } => {
                self.invalid_number += 1
            }
        }
    }
}
