//! Builder for creating MapperEngine instances.

use std::sync::Arc;

use crate::config::{FieldLayout, InputSpec, OutputSpec};
use crate::engine::MapperEngine;
use crate::io::{InputProvider, OutputTarget, StderrOutput, StdinInput, StdoutOutput};

/// Assembles a [`MapperEngine`].
///
/// Streams left unset fall back to stdin, stdout and stderr; the layout
/// falls back to [`FieldLayout::default`].
#[derive(Debug, Default)]
pub struct MapperBuilder {
    layout: Option<FieldLayout>,
    input: Option<InputSpec>,
    output: Option<OutputSpec>,
    diagnostics: Option<OutputSpec>,
}

impl MapperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: FieldLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_input(mut self, provider: Arc<dyn InputProvider>) -> Self {
        self.input = Some(InputSpec::from_provider(provider));
        self
    }

    pub fn with_output(mut self, target: Arc<dyn OutputTarget>) -> Self {
        self.output = Some(OutputSpec::from_target(target));
        self
    }

    pub fn with_diagnostics(mut self, target: Arc<dyn OutputTarget>) -> Self {
        self.diagnostics = Some(OutputSpec::from_target(target));
        self
    }

    pub fn with_input_spec(mut self, spec: InputSpec) -> Self {
        self.input = Some(spec);
        self
    }

    pub fn with_output_spec(mut self, spec: OutputSpec) -> Self {
        self.output = Some(spec);
        self
    }

    pub fn with_diagnostics_spec(mut self, spec: OutputSpec) -> Self {
        self.diagnostics = Some(spec);
        self
    }

    pub fn build(self) -> MapperEngine {
        let input = self
            .input
            .unwrap_or_else(|| InputSpec::from_provider(Arc::new(StdinInput::new())));
        let output = self
            .output
            .unwrap_or_else(|| OutputSpec::from_target(Arc::new(StdoutOutput::new())));
        let diagnostics = self
            .diagnostics
            .unwrap_or_else(|| OutputSpec::from_target(Arc::new(StderrOutput::new())));

        MapperEngine::new(self.layout.unwrap_or_default(), input, output, diagnostics)
    }
}
