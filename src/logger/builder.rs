//! Stepwise construction: each sink with options of its own gets a sub-builder
//! that hands the parent back from `done()`.

use super::Logger;
use super::json_builder::JsonBuilder;
use crate::fmt::{DEFAULT_TAG, Palette};
use crate::output::{ConsoleOutput, FileOutput, JsonOutput, Output, Render, Stream};
use std::path::PathBuf;

pub struct LoggerBuilder {
    pub(super) palette: Palette,
    pub(super) tag: String,
    pub(super) context: Option<String>,
    pub(super) outputs: Vec<Box<dyn Output>>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Stock palette, `[MDT]` tag, no context, no outputs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            palette: Palette::new(),
            tag: DEFAULT_TAG.to_string(),
            context: None,
            outputs: Vec::new(),
        }
    }

    #[must_use]
    pub const fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// The host's name for the running resource. Treated as opaque text.
    #[must_use]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn console(self) -> ConsoleBuilder {
        ConsoleBuilder {
            parent: self,
            output: ConsoleOutput::new(),
        }
    }

    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder {
            parent: self,
            output: FileOutput::new(),
        }
    }

    #[must_use]
    pub fn json(self) -> JsonBuilder {
        JsonBuilder {
            parent: self,
            output: JsonOutput::new(),
        }
    }

    /// Any sink the built-in ones don't cover, including test doubles.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.outputs.push(Box::new(output));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            palette: self.palette,
            tag: self.tag,
            context: self.context,
            outputs: self.outputs,
        }
    }
}

pub struct ConsoleBuilder {
    parent: LoggerBuilder,
    output: ConsoleOutput,
}

impl ConsoleBuilder {
    #[must_use]
    pub const fn stream(mut self, stream: Stream) -> Self {
        self.output = self.output.stream(stream);
        self
    }

    /// Plain terminals show carets literally; `Render::Ansi` or `Render::Plain` fix that.
    #[must_use]
    pub const fn render(mut self, render: Render) -> Self {
        self.output = self.output.render(render);
        self
    }

    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Box::new(self.output));
        self.parent
    }
}

pub struct FileBuilder {
    parent: LoggerBuilder,
    output: FileOutput,
}

impl FileBuilder {
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = self.output.path(path);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.output = self.output.timestamp_format(format);
        self
    }

    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Box::new(self.output));
        self.parent
    }
}
