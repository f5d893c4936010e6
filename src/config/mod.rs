//! Configuration types for the mapper.
//!
//! This module provides:
//! - `InputSpec`: Binding of the record source
//! - `OutputSpec`: Binding of the result or diagnostic sink
//! - `FieldLayout`: Positional layout of the designated fields

mod layout;
mod spec;

pub use layout::FieldLayout;
pub use spec::{InputSpec, OutputSpec};
