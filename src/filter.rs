//! Per-record validation and extraction.

use csv::StringRecord;

use crate::config::FieldLayout;
use crate::error::RecordError;
use crate::format::OutputRecord;

/// Map one data record to its output pair, or say why it has none.
///
/// Checks run in a fixed order: field count, null markers on both
/// designated fields, emptiness on both, then followers is parsed before
/// popularity. The first failing check decides the rejection.
pub fn map_record(record: &StringRecord, layout: &FieldLayout) -> Result<OutputRecord, RecordError> {
    if record.len() < layout.min_fields {
        return Err(RecordError::TooFewFields {
            found: record.len(),
            required: layout.min_fields,
        });
    }

    let followers_raw = designated_field(record, layout.followers)?;
    let popularity_raw = designated_field(record, layout.popularity)?;

    for (field, raw) in [
        (layout.followers, followers_raw),
        (layout.popularity, popularity_raw),
    ] {
        if layout.is_null_marker(raw) {
            return Err(RecordError::NullMarker { field });
        }
    }
    for (field, raw) in [
        (layout.followers, followers_raw),
        (layout.popularity, popularity_raw),
    ] {
        if raw.is_empty() {
            return Err(RecordError::EmptyField { field });
        }
    }

    let followers = parse_decimal(layout.followers, followers_raw)?;
    let popularity = truncate_toward_zero(
        layout.popularity,
        parse_decimal(layout.popularity, popularity_raw)?,
    )?;

    Ok(OutputRecord::new(popularity, followers))
}

fn designated_field(record: &StringRecord, index: usize) -> Result<&str, RecordError> {
    record
        .get(index)
        .map(str::trim)
        .ok_or(RecordError::TooFewFields {
            found: record.len(),
            required: index + 1,
        })
}

/// Parse a trimmed field as a float.
///
/// Accepts what `f64::from_str` accepts, which includes `inf` and `nan`
/// spelled in any case, plus single underscores between digits
/// (`1_000`).
pub fn parse_decimal(field: usize, raw: &str) -> Result<f64, RecordError> {
    let invalid = || RecordError::InvalidFloat {
        field,
        value: raw.to_string(),
    };

    if !raw.contains('_') {
        return raw.parse::<f64>().map_err(|_| invalid());
    }
    if !underscores_between_digits(raw) {
        return Err(invalid());
    }
    raw.replace('_', "").parse::<f64>().map_err(|_| invalid())
}

fn underscores_between_digits(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    })
}

/// Truncate toward zero.
///
/// The result is integral but unbounded, so it stays an `f64`. NaN and
/// infinities have no integer counterpart and are rejected.
pub fn truncate_toward_zero(field: usize, value: f64) -> Result<f64, RecordError> {
    if !value.is_finite() {
        return Err(RecordError::NotAnInteger { field, value });
    }
    Ok(value.trunc())
}
