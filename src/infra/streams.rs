//! # Output Streams / 输出流
//!
//! The two sinks a reporter writes to, and the stream sets that back them.
//!
//! 报告器写入的两个输出目标，以及承载它们的流集合。

use std::fmt;
use std::io::{self, IsTerminal, Write};

/// An append-only output target.
/// 只追加的输出目标。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sink {
    Stdout,
    Stderr,
}

impl Sink {
    /// Whether the process's stream for this sink is attached to a terminal.
    pub fn is_terminal(self) -> bool {
        match self {
            Sink::Stdout => io::stdout().is_terminal(),
            Sink::Stderr => io::stderr().is_terminal(),
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => f.write_str("stdout"),
            Sink::Stderr => f.write_str("stderr"),
        }
    }
}

/// Resolves a [`Sink`] to a writer. Implementors never close the streams.
///
/// 将 [`Sink`] 解析为写入器。实现者不会关闭这些流。
pub trait Streams {
    fn stream(&mut self, sink: Sink) -> &mut dyn Write;
}

/// The process's standard output and standard error.
/// 进程的标准输出和标准错误。
#[derive(Debug)]
pub struct StdStreams {
    stdout: io::Stdout,
    stderr: io::Stderr,
}

impl StdStreams {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            stderr: io::stderr(),
        }
    }
}

impl Default for StdStreams {
    fn default() -> Self {
        Self::new()
    }
}

impl Streams for StdStreams {
    fn stream(&mut self, sink: Sink) -> &mut dyn Write {
        match sink {
            Sink::Stdout => &mut self.stdout,
            Sink::Stderr => &mut self.stderr,
        }
    }
}

/// In-memory capture of both sinks, for harness self-tests.
///
/// 两个输出目标的内存捕获，用于测试框架自检。
#[derive(Debug, Default, Clone)]
pub struct BufferStreams {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl BufferStreams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured bytes of `sink` as text, with invalid UTF-8 replaced.
    pub fn text(&self, sink: Sink) -> String {
        let bytes = match sink {
            Sink::Stdout => &self.stdout,
            Sink::Stderr => &self.stderr,
        };
        String::from_utf8_lossy(bytes).into_owned()
    }
}

impl Streams for BufferStreams {
    fn stream(&mut self, sink: Sink) -> &mut dyn Write {
        match sink {
            Sink::Stdout => &mut self.stdout,
            Sink::Stderr => &mut self.stderr,
        }
    }
}
