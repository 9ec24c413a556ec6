//! # ANSI Backend / ANSI 后端
//!
//! Styles text with ANSI escape sequences built from `colored`'s color codes.
//! Each styled write carries its own reset, so nothing leaks into later
//! output. Whether sequences are emitted is decided per sink by the backend's
//! [`SinkColors`], never by process-wide state.
//!
//! 使用 `colored` 的颜色代码构造 ANSI 转义序列来设置文本样式。每次样式化写入都自带重置序列，
//! 因此不会影响后续输出。是否输出序列由后端的 [`SinkColors`] 按输出目标决定，不依赖进程级状态。

use colored::Color;
use std::fmt;
use std::io::{self, Write};

use crate::core::color::TestColor;
use crate::infra::streams::Sink;
use crate::infra::{SinkColors, StyleBackend};

/// The escape sequence that ends every styled segment.
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape sequence backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiBackend {
    colors: SinkColors,
}

impl AnsiBackend {
    /// A backend that styles both sinks.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(colors: SinkColors) -> Self {
        Self { colors }
    }

    /// Styling off on both sinks; text is still written.
    pub fn disabled() -> Self {
        Self::with_colors(SinkColors::all(false))
    }

    pub fn colors(&self) -> SinkColors {
        self.colors
    }
}

/// The foreground hue of `color`, `None` for `Normal`.
///
/// `Bright` is white and `Status` is black; both are drawn bold like every
/// hue, which terminals show as bright white and dark gray.
pub fn hue(color: TestColor) -> Option<Color> {
    match color {
        TestColor::Normal => None,
        TestColor::Green => Some(Color::Green),
        TestColor::Red => Some(Color::Red),
        TestColor::Yellow => Some(Color::Yellow),
        TestColor::Cyan => Some(Color::Cyan),
        TestColor::Magenta => Some(Color::Magenta),
        TestColor::Bright => Some(Color::White),
        TestColor::Status => Some(Color::Black),
    }
}

/// Wraps `text` in the bold ANSI style of `color` and a trailing reset.
/// `Normal` text is returned unchanged.
///
/// 用 `color` 的粗体 ANSI 样式和结尾重置序列包裹 `text`。`Normal` 文本原样返回。
pub fn paint(text: &str, color: TestColor) -> String {
    match hue(color) {
        Some(hue) => format!("\x1b[1;{}m{}{}", hue.to_fg_str(), text, ANSI_RESET),
        None => text.to_string(),
    }
}

impl StyleBackend for AnsiBackend {
    fn emit_styled(
        &mut self,
        out: &mut dyn Write,
        sink: Sink,
        color: TestColor,
        text: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        if color.is_plain() || !self.colors.enabled(sink) {
            return out.write_fmt(text);
        }
        out.write_all(paint(&fmt::format(text), color).as_bytes())
    }
}
