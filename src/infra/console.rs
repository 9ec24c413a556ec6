//! # Console Attribute Backend / 控制台属性后端
//!
//! Styles text by switching the console's character attributes around the
//! write, for consoles without ANSI support. The attribute word in effect
//! before the call is read first and put back afterwards, even when the
//! write itself fails. Styling is best-effort: if the console refuses the
//! new attributes, the text is written unstyled.
//!
//! Attributes belong to the console, not to the call: two threads styling
//! the same console at once will see each other's colors. No locking is done.
//!
//! 在写入前后切换控制台字符属性来设置样式，用于不支持 ANSI 的控制台。
//! 调用前生效的属性值会先被读取，并在之后恢复，即使写入本身失败也是如此。
//! 样式是尽力而为的：若控制台拒绝新属性，文本仍以无样式方式写入。
//! 属性属于控制台而非调用：两个线程同时设置同一控制台的样式会互相影响。这里不做加锁。

use std::fmt;
use std::io::{self, Write};

use crate::core::color::TestColor;
use crate::infra::streams::Sink;
use crate::infra::{SinkColors, StyleBackend};

/// Read/write access to a console's current character attributes.
///
/// 对控制台当前字符属性的读写访问。
pub trait ConsoleAttributes {
    /// The attribute word currently applied to `sink`, or `None` when `sink`
    /// is not attached to a console (redirected to a file or pipe).
    /// 当前应用于 `sink` 的属性值；若 `sink` 未连接到控制台则为 `None`。
    fn current(&mut self, sink: Sink) -> Option<u16>;

    /// Applies `attributes` to `sink`.
    fn set(&mut self, sink: Sink, attributes: u16) -> io::Result<()>;
}

/// Console attribute API backend.
#[derive(Debug, Clone)]
pub struct ConsoleBackend<C> {
    console: C,
    colors: SinkColors,
}

impl<C: ConsoleAttributes> ConsoleBackend<C> {
    pub fn new(console: C) -> Self {
        Self::with_colors(console, SinkColors::default())
    }

    pub fn with_colors(console: C, colors: SinkColors) -> Self {
        Self { console, colors }
    }

    /// Turns attribute switching off; text is still written.
    pub fn disabled(console: C) -> Self {
        Self::with_colors(console, SinkColors::all(false))
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }
}

impl<C: ConsoleAttributes> StyleBackend for ConsoleBackend<C> {
    fn emit_styled(
        &mut self,
        out: &mut dyn Write,
        sink: Sink,
        color: TestColor,
        text: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        let wanted = if self.colors.enabled(sink) {
            color.console_attributes()
        } else {
            None
        };
        let Some(wanted) = wanted else {
            return out.write_fmt(text);
        };
        let Some(saved) = self.console.current(sink) else {
            return out.write_fmt(text);
        };

        // Buffered text must reach the console before its attributes change.
        out.flush()?;
        if let Err(e) = self.console.set(sink, wanted) {
            tracing::debug!(%sink, "console attributes not applied: {}", e);
            return out.write_fmt(text);
        }

        let written = out.write_fmt(text).and_then(|_| out.flush());
        let restored = self.console.set(sink, saved);
        written.and(restored)
    }
}

#[cfg(windows)]
pub use self::windows::WinConsole;

#[cfg(windows)]
mod windows {
    use super::ConsoleAttributes;
    use crate::infra::streams::Sink;
    use std::io;
    use windows_sys::Win32::Foundation::HANDLE;
    use windows_sys::Win32::System::Console::{
        CONSOLE_SCREEN_BUFFER_INFO, GetConsoleScreenBufferInfo, GetStdHandle,
        STD_ERROR_HANDLE, STD_OUTPUT_HANDLE, SetConsoleTextAttribute,
    };

    /// The Win32 console attached to this process.
    /// 当前进程所连接的 Win32 控制台。
    #[derive(Debug, Default, Clone, Copy)]
    pub struct WinConsole;

    fn handle(sink: Sink) -> HANDLE {
        let which = match sink {
            Sink::Stdout => STD_OUTPUT_HANDLE,
            Sink::Stderr => STD_ERROR_HANDLE,
        };
        // SAFETY: GetStdHandle has no preconditions.
        unsafe { GetStdHandle(which) }
    }

    impl ConsoleAttributes for WinConsole {
        fn current(&mut self, sink: Sink) -> Option<u16> {
            // SAFETY: CONSOLE_SCREEN_BUFFER_INFO is plain data; all-zero is a valid value.
            let mut info: CONSOLE_SCREEN_BUFFER_INFO = unsafe { std::mem::zeroed() };
            // SAFETY: `info` is a valid, writable buffer info struct.
            let ok = unsafe { GetConsoleScreenBufferInfo(handle(sink), &mut info) };
            (ok != 0).then_some(info.wAttributes)
        }

        fn set(&mut self, sink: Sink, attributes: u16) -> io::Result<()> {
            // SAFETY: the handle comes from GetStdHandle; an invalid one makes the call fail.
            let ok = unsafe { SetConsoleTextAttribute(handle(sink), attributes) };
            if ok == 0 {
                Err(io::Error::last_os_error())
            } else {
                Ok(())
            }
        }
    }
}
