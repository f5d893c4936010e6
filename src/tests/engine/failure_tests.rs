//! Stream failures end the run; record failures never do.

use std::io::{self, Read, Write};
use std::sync::Arc;

use crate::error::Stage;
use crate::{InMemorySink, InMemorySource, InputProvider, MapperBuilder, OutputTarget};

#[derive(Debug)]
struct UnopenableInput;

impl InputProvider for UnopenableInput {
    fn id(&self) -> &str {
        "missing"
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no such input"))
    }
}

#[derive(Debug)]
struct ClosedPipe;

impl OutputTarget for ClosedPipe {
    fn id(&self) -> &str {
        "closed"
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(ClosedPipeWriter))
    }
}

struct ClosedPipeWriter;

impl Write for ClosedPipeWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
    }
}

#[test]
fn input_open_failure_is_reported_with_target() {
    let err = MapperBuilder::new()
        .with_input(Arc::new(UnopenableInput))
        .with_output(Arc::new(InMemorySink::new("out")))
        .with_diagnostics(Arc::new(InMemorySink::new("diag")))
        .build()
        .run()
        .expect_err("open should fail");

    assert_eq!(err.stage, Stage::Open);
    assert_eq!(err.target, "missing");
    assert!(err.to_string().starts_with("[Open] missing: "));
}

#[test]
fn invalid_utf8_is_a_read_failure_after_flushing_earlier_output() {
    let out = InMemorySink::new("out");
    let diag = InMemorySink::new("diag");
    let mut data = b"h\n1,5,a,b,2\n2,".to_vec();
    data.extend_from_slice(&[0xff, 0xfe]);
    data.extend_from_slice(b",a,b,1\n");

    let err = MapperBuilder::new()
        .with_input(Arc::new(InMemorySource::new("bytes", data)))
        .with_output(Arc::new(out.clone()))
        .with_diagnostics(Arc::new(diag.clone()))
        .build()
        .run()
        .expect_err("invalid utf-8 should stop the run");

    assert_eq!(err.stage, Stage::Read);
    assert_eq!(err.target, "bytes");
    assert_eq!(out.contents_string(), "2\t5.0\n");
    assert_eq!(diag.lines(), vec!["DEBUG row: ['1', '5', 'a', 'b', '2']"]);
}

#[test]
fn closed_output_fails_the_run() {
    let err = MapperBuilder::new()
        .with_input(Arc::new(InMemorySource::from_string(
            "in",
            "h\n1,5,a,b,2\n",
        )))
        .with_output(Arc::new(ClosedPipe))
        .with_diagnostics(Arc::new(InMemorySink::new("diag")))
        .build()
        .run()
        .expect_err("closed output should fail");

    // Mapped lines sit in the output buffer until the final flush.
    assert_eq!(err.stage, Stage::Flush);
    assert_eq!(err.target, "closed");
}

#[test]
fn closed_diagnostics_fail_on_first_echo() {
    let out = InMemorySink::new("out");

    let err = MapperBuilder::new()
        .with_input(Arc::new(InMemorySource::from_string(
            "in",
            "h\n1,5,a,b,2\n",
        )))
        .with_output(Arc::new(out.clone()))
        .with_diagnostics(Arc::new(ClosedPipe))
        .build()
        .run()
        .expect_err("closed diagnostics should fail");

    assert_eq!(err.stage, Stage::Write);
    assert_eq!(err.target, "closed");
    assert_eq!(out.contents_string(), "");
}

#[test]
fn malformed_records_never_fail_the_run() {
    let input = "h\n\"unterminated,1,2\n,,,,\nnull,null,null,null,null\n";

    let summary = MapperBuilder::new()
        .with_input(Arc::new(InMemorySource::from_string("in", input)))
        .with_output(Arc::new(InMemorySink::new("out")))
        .with_diagnostics(Arc::new(InMemorySink::new("diag")))
        .build()
        .run()
        .expect("record problems are not stream failures");

    assert_eq!(summary.emitted, 0);
}
