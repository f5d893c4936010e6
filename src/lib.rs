//! # popularity-mapper
//!
//! The map phase of a batch pipeline over a CSV of accounts.
//!
//! ## Overview
//!
//! Each data record of the input yields at most one output line,
//! `<popularity>\t<followers>`, keyed by the integer popularity so that a
//! downstream reducer can aggregate followers per popularity value.
//!
//! - The first record is a header and is discarded without inspection.
//! - Every later record is echoed to the diagnostic stream as
//!   `DEBUG row: [...]` before it is validated.
//! - Records with fewer than five fields, a `null` marker or an empty value
//!   in a designated field are skipped silently.
//! - Records whose designated fields are not numeric are skipped with a
//!   `DEBUG error: <message>` line.
//! - Popularity is parsed as a decimal and truncated toward zero.
//!
//! Results and diagnostics go to two independent sinks and are never
//! mixed. Only a failure of a stream itself ends a run early.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use popularity_mapper::MapperBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // stdin -> stdout, diagnostics on stderr
//!     let summary = MapperBuilder::new().build().run()?;
//!     assert_eq!(summary.records, summary.emitted + summary.skipped());
//!     Ok(())
//! }
//! ```
//!
//! ## Testing with in-memory streams
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use popularity_mapper::{InMemorySink, InMemorySource, MapperBuilder};
//!
//! let out = InMemorySink::new("out");
//! let diag = InMemorySink::new("diag");
//! MapperBuilder::new()
//!     .with_input(Arc::new(InMemorySource::from_string("in", "h\n1,2,3,4,5\n")))
//!     .with_output(Arc::new(out.clone()))
//!     .with_diagnostics(Arc::new(diag.clone()))
//!     .build()
//!     .run()?;
//! assert_eq!(out.contents_string(), "5\t2.0\n");
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod format;
pub mod io;
pub mod stats;

pub use builder::MapperBuilder;
pub use config::{FieldLayout, InputSpec, OutputSpec};
pub use engine::MapperEngine;
pub use error::{RecordError, Stage, StreamError};
pub use filter::map_record;
pub use format::{OutputRecord, render_decimal, render_fields, render_integral};
pub use io::{
    InMemorySink, InMemorySource, InputProvider, OutputTarget, StderrOutput, StdinInput,
    StdoutOutput,
};
pub use stats::RunSummary;
