//! # Console Reporting Module / 控制台报告模块
//!
//! This module writes conventional test-result lines to the console:
//! `[SUCCESS]`, `[FAILURE]` and `[SKIPPED]` lines, dim status lines and
//! centered headline banners. Every styled piece goes through the style
//! backend, so colors are scoped to the piece that asked for them.
//!
//! 此模块向控制台写入常规的测试结果行：
//! `[SUCCESS]`、`[FAILURE]`、`[SKIPPED]` 行、暗色状态行以及居中的标题横幅。
//! 每个带样式的片段都经过样式后端，因此颜色只作用于请求它的片段。
//!
//! # Output Format / 输出格式
//! ```text
//! ================================== RESULTS ===================================
//! [SUCCESS] connected to echo server
//! [FAILURE] bad frame: opcode 0x3
//! [SKIPPED] no TLS support compiled in
//! ```
//!
//! Write errors are discarded: a reporter is a best-effort diagnostic aid.
//! 写入错误会被丢弃：报告器只是尽力而为的诊断辅助工具。

use std::fmt;
use std::io::Write;

use crate::core::color::TestColor;
use crate::core::config::{FailureMode, ReporterConfig};
use crate::core::flags::ReporterFlags;
use crate::core::headline::HeadlineLayout;
use crate::infra::streams::{Sink, StdStreams, Streams};
use crate::infra::{PlatformBackend, StyleBackend, platform_backend};
use crate::reporting::summary::Tally;

/// Headline printed above deferred failures.
pub const DEFERRED_FAILURES_HEADLINE: &str = "DEFERRED FAILURES";

/// A result-line tag together with its color and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultTag {
    pub label: &'static str,
    pub color: TestColor,
    pub sink: Sink,
}

pub const SUCCESS_TAG: ResultTag = ResultTag {
    label: "SUCCESS",
    color: TestColor::Green,
    sink: Sink::Stdout,
};

pub const FAILURE_TAG: ResultTag = ResultTag {
    label: "FAILURE",
    color: TestColor::Red,
    sink: Sink::Stderr,
};

pub const SKIPPED_TAG: ResultTag = ResultTag {
    label: "SKIPPED",
    color: TestColor::Yellow,
    sink: Sink::Stderr,
};

/// Writes styled test-result lines.
///
/// A reporter owns its start-up flags, so nothing about it is global. It is
/// meant for single-threaded harness code; calls take `&mut self`.
///
/// 写入带样式的测试结果行。
/// 报告器持有自己的启动标志，因此没有任何全局状态。它面向单线程的测试代码；调用需要 `&mut self`。
pub struct Reporter<B = PlatformBackend, S = StdStreams> {
    flags: ReporterFlags,
    failure_mode: FailureMode,
    backend: B,
    streams: S,
    tally: Tally,
    deferred: Vec<String>,
}

impl Reporter {
    /// Creates a reporter on the process's stdout/stderr with the platform backend.
    ///
    /// 使用平台后端，在进程的标准输出/标准错误上创建报告器。
    pub fn new(flags: ReporterFlags) -> Self {
        Self::with_parts(flags, platform_backend(Default::default()), StdStreams::new())
    }

    /// Creates a reporter from a loaded configuration. The flags are taken as
    /// given; raise them through [`ReporterFlags::merge`] first if the log
    /// subsystem should be notified.
    ///
    /// 根据已加载的配置创建报告器。
    pub fn from_config(config: &ReporterConfig, flags: ReporterFlags) -> Self {
        Self::with_parts(flags, platform_backend(config.color), StdStreams::new())
            .with_failure_mode(config.failures)
    }
}

impl<B: StyleBackend, S: Streams> Reporter<B, S> {
    pub fn with_parts(flags: ReporterFlags, backend: B, streams: S) -> Self {
        Self {
            flags,
            failure_mode: FailureMode::Immediate,
            backend,
            streams,
            tally: Tally::default(),
            deferred: Vec::new(),
        }
    }

    pub fn with_failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    pub fn flags(&self) -> ReporterFlags {
        self.flags
    }

    pub fn failure_mode(&self) -> FailureMode {
        self.failure_mode
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Failure messages waiting for [`Reporter::finish`].
    pub fn deferred_failures(&self) -> &[String] {
        &self.deferred
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn streams(&self) -> &S {
        &self.streams
    }

    pub fn into_streams(self) -> S {
        self.streams
    }

    /// Writes `args` to `sink` in the style of `color`, resetting the style afterwards.
    ///
    /// 以 `color` 的样式将 `args` 写入 `sink`，之后重置样式。
    pub fn print(&mut self, sink: Sink, color: TestColor, args: fmt::Arguments<'_>) {
        let out = self.streams.stream(sink);
        let _ = self.backend.emit_styled(out, sink, color, args);
    }

    /// Writes unstyled text to `sink`.
    fn plain(&mut self, sink: Sink, args: fmt::Arguments<'_>) {
        let _ = self.streams.stream(sink).write_fmt(args);
    }

    fn flush(&mut self, sink: Sink) {
        let _ = self.streams.stream(sink).flush();
    }

    /// `[TAG] message\n`, brackets bright, tag in its color, message plain.
    fn tagged_line(&mut self, tag: ResultTag, args: fmt::Arguments<'_>) {
        let sink = tag.sink;
        self.print(sink, TestColor::Bright, format_args!("["));
        self.print(sink, tag.color, format_args!("{}", tag.label));
        self.print(sink, TestColor::Bright, format_args!("] "));
        self.plain(sink, format_args!("{}\n", args));
        self.flush(sink);
    }

    /// Reports a passed check: green `[SUCCESS]` line on stdout.
    ///
    /// 报告通过的检查：在标准输出写入绿色 `[SUCCESS]` 行。
    pub fn success(&mut self, args: fmt::Arguments<'_>) {
        self.tally.succeeded += 1;
        self.tagged_line(SUCCESS_TAG, args);
    }

    /// Reports a failed check: red `[FAILURE]` line on stderr.
    ///
    /// With [`FailureMode::Deferred`] the message is queued and written by
    /// [`Reporter::finish`] instead.
    ///
    /// 报告失败的检查：在标准错误写入红色 `[FAILURE]` 行。
    /// 在 [`FailureMode::Deferred`] 模式下消息会被排队，由 [`Reporter::finish`] 输出。
    pub fn failure(&mut self, args: fmt::Arguments<'_>) {
        self.tally.failed += 1;
        match self.failure_mode {
            FailureMode::Immediate => self.tagged_line(FAILURE_TAG, args),
            FailureMode::Deferred => self.deferred.push(fmt::format(args)),
        }
    }

    /// Reports a skipped check: yellow `[SKIPPED]` line on stderr.
    pub fn skipped(&mut self, args: fmt::Arguments<'_>) {
        self.tally.skipped += 1;
        self.tagged_line(SKIPPED_TAG, args);
    }

    /// Writes a dim status line on stdout.
    pub fn status(&mut self, args: fmt::Arguments<'_>) {
        self.print(Sink::Stdout, TestColor::Status, args);
        self.plain(Sink::Stdout, format_args!("\n"));
        self.flush(Sink::Stdout);
    }

    /// Writes dim status text on stdout without ending the line, so a line
    /// can be built up across several calls.
    ///
    /// 在标准输出写入暗色状态文本但不换行，以便分多次调用拼出一行。
    pub fn status_inline(&mut self, args: fmt::Arguments<'_>) {
        self.print(Sink::Stdout, TestColor::Status, args);
        self.flush(Sink::Stdout);
    }

    /// Writes a status line only when the verbose flag is set.
    pub fn detail(&mut self, args: fmt::Arguments<'_>) {
        if self.flags.verbose {
            self.status(args);
        }
    }

    /// Writes `text` centered in an 80-column banner of `=` on stdout.
    ///
    /// Fill is bright, the text and its surrounding spaces are magenta.
    /// Text too long for the banner is written with no fill.
    ///
    /// 在标准输出写入居中于 80 列 `=` 横幅中的 `text`。
    /// 填充为高亮色，文本及其两侧空格为洋红色。过长的文本不带填充直接输出。
    pub fn headline(&mut self, text: &str) {
        let layout = HeadlineLayout::new(text);
        let sink = Sink::Stdout;

        if layout.left_fill > 0 {
            self.print(sink, TestColor::Bright, format_args!("{}", layout.left()));
        }
        self.print(sink, TestColor::Magenta, format_args!(" {} ", text));
        if layout.right_fill > 0 {
            self.print(sink, TestColor::Bright, format_args!("{}", layout.right()));
        }
        self.plain(sink, format_args!("\n"));
        self.flush(sink);
    }

    /// Ends the run: writes any deferred failures, then a summary line, and
    /// returns the final tally.
    ///
    /// ```text
    /// [PASSED] 12 succeeded, 0 failed, 1 skipped
    /// ```
    ///
    /// 结束运行：输出所有延迟的失败，然后输出摘要行，并返回最终计数。
    pub fn finish(&mut self) -> Tally {
        let deferred = std::mem::take(&mut self.deferred);
        if !deferred.is_empty() {
            self.headline(DEFERRED_FAILURES_HEADLINE);
            for message in &deferred {
                self.tagged_line(FAILURE_TAG, format_args!("{}", message));
            }
        }

        let tally = self.tally;
        let (label, color) = if tally.is_success() {
            ("PASSED", TestColor::Green)
        } else {
            ("FAILED", TestColor::Red)
        };
        let sink = Sink::Stdout;
        self.print(sink, TestColor::Bright, format_args!("["));
        self.print(sink, color, format_args!("{}", label));
        self.print(sink, TestColor::Bright, format_args!("] "));
        self.plain(sink, format_args!("{}\n", tally));
        self.flush(sink);

        tracing::debug!(%tally, "test run finished");
        tally
    }
}
