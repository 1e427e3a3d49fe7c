//! The host console. Stderr by default, since that is the process's diagnostic stream.

use super::{LogRecord, Output};
use crate::fmt::{render_ansi, strip_tokens};
use std::borrow::Cow;
use std::io::{self, Write};

/// Which standard stream receives the lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    #[default]
    Stderr,
    Stdout,
}

/// How caret tokens reach the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Render {
    /// Verbatim. The host console colors them itself.
    #[default]
    Caret,
    /// Translated to ANSI for an ordinary terminal.
    Ansi,
    /// Removed, for pipes and log collectors.
    Plain,
}

#[derive(Debug, Clone, Default)]
pub struct ConsoleOutput {
    stream: Stream,
    render: Render,
}

impl ConsoleOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }

    #[must_use]
    pub const fn render(mut self, render: Render) -> Self {
        self.render = render;
        self
    }

    fn render_line<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match self.render {
            Render::Caret => Cow::Borrowed(line),
            Render::Ansi => Cow::Owned(render_ansi(line)),
            Render::Plain => Cow::Owned(strip_tokens(line)),
        }
    }
}

impl Output for ConsoleOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let mut buf = self.render_line(&record.line).into_owned();
        buf.push('\n');

        // One write_all on a locked handle keeps concurrent lines from interleaving.
        match self.stream {
            Stream::Stderr => io::stderr().lock().write_all(buf.as_bytes())?,
            Stream::Stdout => io::stdout().lock().write_all(buf.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stderr => io::stderr().flush()?,
            Stream::Stdout => io::stdout().flush()?,
        }
        Ok(())
    }
}
