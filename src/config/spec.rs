//! Input and output stream bindings.

use std::sync::Arc;

use crate::io::{InputProvider, OutputTarget};

/// Binding of the record source.
#[derive(Debug, Clone)]
pub struct InputSpec {
    /// Name used in error messages
    pub raw: String,
    /// The input provider implementation
    pub provider: Arc<dyn InputProvider>,
}

impl InputSpec {
    pub fn new(raw: impl Into<String>, provider: Arc<dyn InputProvider>) -> Self {
        Self {
            raw: raw.into(),
            provider,
        }
    }

    /// Bind a provider under its own id.
    pub fn from_provider(provider: Arc<dyn InputProvider>) -> Self {
        let raw = provider.id().to_string();
        Self::new(raw, provider)
    }
}

/// Binding of an output sink.
#[derive(Debug, Clone)]
pub struct OutputSpec {
    /// Name used in error messages
    pub raw: String,
    /// The output target implementation
    pub target: Arc<dyn OutputTarget>,
}

impl OutputSpec {
    pub fn new(raw: impl Into<String>, target: Arc<dyn OutputTarget>) -> Self {
        Self {
            raw: raw.into(),
            target,
        }
    }

    /// Bind a target under its own id.
    pub fn from_target(target: Arc<dyn OutputTarget>) -> Self {
        let raw = target.id().to_string();
        Self::new(raw, target)
    }
}
