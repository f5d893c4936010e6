//! Line-aware CSV record reader.

use std::collections::VecDeque;
use std::io::BufRead;

use csv::StringRecord;

/// Reads CSV records one physical line at a time.
///
/// A record is one line, extended over following lines only while a quoted
/// field is still open. A blank line is a record with no fields, so the
/// header is always the first line of input whatever it holds.
pub struct RecordReader<R> {
    inner: R,
    delimiter: u8,
    pending: VecDeque<StringRecord>,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R, delimiter: u8) -> Self {
        Self {
            inner,
            delimiter,
            pending: VecDeque::new(),
        }
    }

    /// Read the next record into `record`.
    ///
    /// Returns `Ok(false)` at end of input. Input that is not UTF-8 is an
    /// error.
    pub fn read_record(&mut self, record: &mut StringRecord) -> csv::Result<bool> {
        if self.pending.is_empty() && !self.fill()? {
            return Ok(false);
        }
        match self.pending.pop_front() {
            Some(next) => {
                *record = next;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn fill(&mut self) -> csv::Result<bool> {
        let mut logical = String::new();
        if self.inner.read_line(&mut logical)? == 0 {
            return Ok(false);
        }
        while ends_inside_quotes(&logical, self.delimiter) {
            if self.inner.read_line(&mut logical)? == 0 {
                break;
            }
        }

        let body = strip_terminator(&logical);
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(body.as_bytes());
        for parsed in rdr.records() {
            self.pending.push_back(parsed?);
        }
        // csv drops empty lines; here they are records of their own
        if self.pending.is_empty() {
            self.pending.push_back(StringRecord::new());
        }
        Ok(true)
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Whether the text so far leaves a quoted field open.
///
/// A quote only opens a field at its very start; `""` inside a quoted field
/// is an escaped quote, and after the closing quote further quotes are
/// literal.
pub(crate) fn ends_inside_quotes(text: &str, delimiter: u8) -> bool {
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut bytes = text.bytes().peekable();

    while let Some(b) = bytes.next() {
        if in_quotes {
            if b == b'"' {
                if bytes.peek() == Some(&b'"') {
                    bytes.next();
                } else {
                    in_quotes = false;
                }
            }
        } else if at_field_start && b == b'"' {
            in_quotes = true;
            at_field_start = false;
        } else {
            at_field_start = b == delimiter || b == b'\n' || b == b'\r';
        }
    }
    in_quotes
}

