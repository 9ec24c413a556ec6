// Shared test helpers for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tempfile::TempDir;
use tracing::level_filters::LevelFilter;
use ws_test_console::{
    AnsiBackend, BufferStreams, ConsoleAttributes, LogSubsystem, Reporter, ReporterFlags, Sink,
};

/// A reporter writing ANSI-styled text into memory.
pub fn ansi_reporter(flags: ReporterFlags) -> Reporter<AnsiBackend, BufferStreams> {
    Reporter::with_parts(flags, AnsiBackend::new(), BufferStreams::new())
}

/// Removes `ESC [ ... m` sequences, leaving the visible text.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Visible text captured on `sink`.
pub fn visible(streams: &BufferStreams, sink: Sink) -> String {
    strip_ansi(&streams.text(sink))
}

/// Log subsystem that records the calls it receives.
#[derive(Debug, Default)]
pub struct RecordingLog {
    pub callbacks_enabled: usize,
    pub levels: Vec<LevelFilter>,
}

impl LogSubsystem for RecordingLog {
    fn enable_default_callback(&mut self) {
        self.callbacks_enabled += 1;
    }

    fn set_level(&mut self, level: LevelFilter) {
        self.levels.push(level);
    }
}

/// In-memory console with one attribute word per sink.
#[derive(Debug, Clone)]
pub struct FakeConsole {
    pub attributes: HashMap<Sink, u16>,
    pub history: Vec<(Sink, u16)>,
}

/// Default attribute word of a Windows console: light gray on black.
pub const DEFAULT_ATTRIBUTES: u16 = 0x0007;

impl FakeConsole {
    pub fn attached() -> Self {
        let mut attributes = HashMap::new();
        attributes.insert(Sink::Stdout, DEFAULT_ATTRIBUTES);
        attributes.insert(Sink::Stderr, DEFAULT_ATTRIBUTES);
        Self {
            attributes,
            history: Vec::new(),
        }
    }

    /// A console where no sink is attached, like output redirected to a file.
    pub fn detached() -> Self {
        Self {
            attributes: HashMap::new(),
            history: Vec::new(),
        }
    }

    pub fn attribute(&self, sink: Sink) -> Option<u16> {
        self.attributes.get(&sink).copied()
    }
}

impl ConsoleAttributes for FakeConsole {
    fn current(&mut self, sink: Sink) -> Option<u16> {
        self.attributes.get(&sink).copied()
    }

    fn set(&mut self, sink: Sink, attributes: u16) -> io::Result<()> {
        self.history.push((sink, attributes));
        self.attributes.insert(sink, attributes);
        Ok(())
    }
}

/// A writer whose writes always fail.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Helper function to write a reporter config file into `temp_dir`.
pub fn write_config(temp_dir: &TempDir, content: &str) -> PathBuf {
    let path = temp_dir.path().join("reporter.toml");
    fs::write(&path, content).expect("Failed to write reporter config");
    path
}
