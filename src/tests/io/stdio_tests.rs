//! Tests for standard stream providers.

use crate::{InputProvider, OutputTarget, StderrOutput, StdinInput, StdoutOutput};

#[test]
fn standard_streams_use_conventional_ids() {
    assert_eq!(StdinInput::new().id(), "-");
    assert_eq!(StdoutOutput::new().id(), "-");
    assert_eq!(StderrOutput::default().id(), "stderr");
}

#[test]
fn standard_outputs_open() {
    assert!(StdoutOutput::new().open().is_ok());
    assert!(StderrOutput::new().open().is_ok());
}
