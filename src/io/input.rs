//! Input provider trait definition.

use std::fmt::Debug;
use std::io::Read;

/// Source of delimited text records.
///
/// The engine opens the provider once per run and reads it to exhaustion.
pub trait InputProvider: Send + Sync + Debug {
    /// Identifier used in error messages.
    ///
    /// Convention: "-" for stdin.
    fn id(&self) -> &str;

    /// Open a readable stream positioned at the first byte of input.
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>>;
}
