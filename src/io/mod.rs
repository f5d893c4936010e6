//! Stream abstractions for the record input and the two output channels.
//!
//! This module provides:
//! - `InputProvider`: Trait for the record source
//! - `OutputTarget`: Trait for the result and diagnostic sinks
//! - `RecordReader`: Line-aware CSV record decoding
//! - Standard implementations for stdin, stdout and stderr
//! - In-memory implementations for testing

mod input;
mod memory;
mod output;
pub(crate) mod records;
mod std_io;

pub use input::InputProvider;
pub use memory::{InMemorySink, InMemorySource};
pub use output::OutputTarget;
pub use records::RecordReader;
pub use std_io::{StderrOutput, StdinInput, StdoutOutput};
