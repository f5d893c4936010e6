//! Synchronous engine running the record loop.

use std::io::{BufRead, BufReader, BufWriter, LineWriter, Write};

use csv::StringRecord;

use crate::config::{FieldLayout, InputSpec, OutputSpec};
use crate::error::{Stage, StreamError};
use crate::filter::map_record;
use crate::format::render_fields;
use crate::io::RecordReader;
use crate::stats::RunSummary;

/// Reads records from one input and writes mapped pairs and diagnostics
/// to two independent outputs.
pub struct MapperEngine {
    layout: FieldLayout,
    input: InputSpec,
    output: OutputSpec,
    diagnostics: OutputSpec,
}

impl MapperEngine {
    pub fn new(
        layout: FieldLayout,
        input: InputSpec,
        output: OutputSpec,
        diagnostics: OutputSpec,
    ) -> Self {
        Self {
            layout,
            input,
            output,
            diagnostics,
        }
    }

    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    pub fn input(&self) -> &InputSpec {
        &self.input
    }

    pub fn output(&self) -> &OutputSpec {
        &self.output
    }

    pub fn diagnostics(&self) -> &OutputSpec {
        &self.diagnostics
    }

    /// Process the whole input.
    ///
    /// The first line is consumed as a header and never inspected, even when
    /// it is blank. Every later record, blank lines included, is echoed to
    /// the diagnostic stream, then mapped or skipped. Record-level rejections never end the run; only a failure
    /// of one of the three streams does. Both outputs are flushed before
    /// returning, also when the run fails part-way.
    pub fn run(&self) -> Result<RunSummary, StreamError> {
        let reader = self
            .input
            .provider
            .open()
            .map_err(|e| StreamError::new(Stage::Open, &self.input.raw, e))?;
        let mut output = LineSink::new(
            &self.output.raw,
            BufWriter::new(self.open_target(&self.output)?),
        );
        let mut diagnostics = LineSink::new(
            &self.diagnostics.raw,
            LineWriter::new(self.open_target(&self.diagnostics)?),
        );

        let mut rdr = RecordReader::new(BufReader::new(reader), self.layout.delimiter);

        let mut summary = RunSummary::new();
        let processed = self.process(&mut rdr, &mut output, &mut diagnostics, &mut summary);
        let output_flushed = output.flush();
        let diagnostics_flushed = diagnostics.flush();

        processed?;
        output_flushed?;
        diagnostics_flushed?;
        Ok(summary)
    }

    fn process<R, O, D>(
        &self,
        rdr: &mut RecordReader<R>,
        output: &mut LineSink<O>,
        diagnostics: &mut LineSink<D>,
        summary: &mut RunSummary,
    ) -> Result<(), StreamError>
    where
        R: BufRead,
        O: Write,
        D: Write,
    {
        let mut record = StringRecord::new();

        if !self.read_next(rdr, &mut record)? {
            return Ok(());
        }
        summary.header_seen = true;

        while self.read_next(rdr, &mut record)? {
            summary.records += 1;
            diagnostics.write_line(format_args!("DEBUG row: {}", render_fields(record.iter())))?;

            match map_record(&record, &self.layout) {
                Ok(mapped) => {
                    output.write_line(format_args!("{mapped}"))?;
                    summary.emitted += 1;
                }
                Err(reason) => {
                    if reason.is_reported() {
                        diagnostics.write_line(format_args!("DEBUG error: {reason}"))?;
                    }
                    summary.record_skip(&reason);
                }
            }
        }

        Ok(())
    }

    fn read_next<R: BufRead>(
        &self,
        rdr: &mut RecordReader<R>,
        record: &mut StringRecord,
    ) -> Result<bool, StreamError> {
        rdr.read_record(record)
            .map_err(|e| StreamError::new(Stage::Read, &self.input.raw, e))
    }

    fn open_target(&self, spec: &OutputSpec) -> Result<Box<dyn Write + Send>, StreamError> {
        spec.target
            .open()
            .map_err(|e| StreamError::new(Stage::Open, &spec.raw, e))
    }
}

/// A buffered writer that tags its failures with the stream name.
struct LineSink<W: Write> {
    target: String,
    writer: W,
}

impl<W: Write> LineSink<W> {
    fn new(target: &str, writer: W) -> Self {
        Self {
            target: target.to_string(),
            writer,
        }
    }

    fn write_line(&mut self, line: std::fmt::Arguments<'_>) -> Result<(), StreamError> {
        writeln!(self.writer, "{line}")
            .map_err(|e| StreamError::new(Stage::Write, &self.target, e))
    }

    fn flush(&mut self) -> Result<(), StreamError> {
        self.writer
            .flush()
            .map_err(|e| StreamError::new(Stage::Flush, &self.target, e))
    }
}
