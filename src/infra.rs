//! # Infrastructure Module / 基础设施模块
//!
//! This module provides the platform-facing services of the reporter:
//! output streams, the two style backends and the default log subsystem.
//!
//! 此模块为报告器提供面向平台的服务：
//! 输出流、两个样式后端以及默认日志子系统。

pub mod ansi;
pub mod console;
pub mod log;
pub mod streams;

use std::fmt;
use std::io::{self, Write};

use crate::core::color::TestColor;
use crate::core::config::ColorMode;
use streams::Sink;

pub use ansi::AnsiBackend;
pub use console::{ConsoleAttributes, ConsoleBackend};
pub use log::TracingLog;
pub use streams::{BufferStreams, StdStreams, Streams};

#[cfg(windows)]
pub use console::WinConsole;

/// Writes one styled piece of text.
///
/// An implementation starts the style for `color` (nothing for
/// `TestColor::Normal`), writes `text` to `out`, then restores the display
/// attributes that were in effect before the call. `sink` names which
/// standard stream `out` stands for.
///
/// 写入一段带样式的文本。
/// 实现者先为 `color` 启用样式（`TestColor::Normal` 不做任何事），
/// 然后将 `text` 写入 `out`，最后恢复调用前生效的显示属性。
/// `sink` 指明 `out` 对应哪个标准流。
pub trait StyleBackend {
    fn emit_styled(
        &mut self,
        out: &mut dyn Write,
        sink: Sink,
        color: TestColor,
        text: fmt::Arguments<'_>,
    ) -> io::Result<()>;
}

impl<B: StyleBackend + ?Sized> StyleBackend for Box<B> {
    fn emit_styled(
        &mut self,
        out: &mut dyn Write,
        sink: Sink,
        color: TestColor,
        text: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        (**self).emit_styled(out, sink, color, text)
    }
}

/// Per-sink styling switch, resolved once when a backend is built.
///
/// 按输出目标区分的样式开关，在构建后端时解析一次。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkColors {
    pub stdout: bool,
    pub stderr: bool,
}

impl SinkColors {
    /// The same setting on both sinks.
    pub fn all(enabled: bool) -> Self {
        Self {
            stdout: enabled,
            stderr: enabled,
        }
    }

    /// Resolves `mode` against the real environment and standard streams.
    ///
    /// 根据真实环境变量和标准流解析 `mode`。
    pub fn detect(mode: ColorMode) -> Self {
        Self::resolve(mode, |key| std::env::var(key).ok(), Sink::is_terminal)
    }

    /// Resolves `mode` for each sink, asking `is_terminal` about that sink only.
    ///
    /// 为每个输出目标解析 `mode`，`is_terminal` 只针对该目标本身。
    pub fn resolve<E, T>(mode: ColorMode, env: E, is_terminal: T) -> Self
    where
        E: Fn(&str) -> Option<String>,
        T: Fn(Sink) -> bool,
    {
        let colors = Self {
            stdout: mode.colorize(is_terminal(Sink::Stdout), &env),
            stderr: mode.colorize(is_terminal(Sink::Stderr), &env),
        };
        tracing::debug!(?mode, ?colors, "color output resolved");
        colors
    }

    pub fn enabled(self, sink: Sink) -> bool {
        match sink {
            Sink::Stdout => self.stdout,
            Sink::Stderr => self.stderr,
        }
    }
}

impl Default for SinkColors {
    fn default() -> Self {
        Self::all(true)
    }
}

/// The backend chosen for this build target.
#[cfg(not(windows))]
pub type PlatformBackend = AnsiBackend;

/// The backend chosen for this build target.
#[cfg(windows)]
pub type PlatformBackend = ConsoleBackend<WinConsole>;

/// Builds the platform backend with color resolved per sink from `mode`.
/// Process-wide color settings are left untouched.
///
/// 构建当前平台的后端，并按输出目标从 `mode` 解析颜色开关。不修改进程级的颜色设置。
#[cfg(not(windows))]
pub fn platform_backend(mode: ColorMode) -> PlatformBackend {
    AnsiBackend::with_colors(SinkColors::detect(mode))
}

/// Builds the platform backend with color resolved per sink from `mode`.
/// Process-wide color settings are left untouched.
///
/// 构建当前平台的后端，并按输出目标从 `mode` 解析颜色开关。不修改进程级的颜色设置。
#[cfg(windows)]
pub fn platform_backend(mode: ColorMode) -> PlatformBackend {
    ConsoleBackend::with_colors(WinConsole, SinkColors::detect(mode))
}
