//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

/// Line-oriented sink for mapped records or diagnostics.
///
/// The engine wraps the opened stream in its own buffer, so
/// implementations should hand out the raw handle.
pub trait OutputTarget: Send + Sync + Debug {
    /// Identifier used in error messages.
    ///
    /// Convention: "-" for stdout, "stderr" for stderr.
    fn id(&self) -> &str;

    /// Open the target for writing.
    fn open(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
