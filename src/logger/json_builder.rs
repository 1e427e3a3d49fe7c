//! JSONL sink options, kept off the main `LoggerBuilder`.

use super::LoggerBuilder;
use crate::output::JsonOutput;
use std::path::PathBuf;

pub struct JsonBuilder {
    pub(super) parent: LoggerBuilder,
    pub(super) output: JsonOutput,
}

impl JsonBuilder {
    /// The state-dir default doesn't suit containers or shared hosts.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = self.output.path(path);
        self
    }

    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Box::new(self.output));
        self.parent
    }
}
