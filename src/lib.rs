//! # WS Test Console Library / WS 测试控制台库
//!
//! This library provides colored console reporting for test harnesses:
//! `[SUCCESS]`, `[FAILURE]` and `[SKIPPED]` result lines, dim status lines,
//! centered headline banners, and a tolerant `--verbose` / `--log` flag scan.
//!
//! 此库为测试框架提供彩色控制台报告：
//! `[SUCCESS]`、`[FAILURE]` 和 `[SKIPPED]` 结果行、暗色状态行、
//! 居中的标题横幅，以及宽松的 `--verbose` / `--log` 标志扫描。
//!
//! ## Modules / 模块
//!
//! - `core` - Color tags, start-up flags, configuration and headline layout
//! - `infra` - Output streams, ANSI and console-attribute backends, log subsystem
//! - `reporting` - The reporter, run tally and formatting macros
//! - `cli` - Command-line interface of the `ws-test-report` binary
//!
//! - `core` - 颜色标签、启动标志、配置和标题布局
//! - `infra` - 输出流、ANSI 与控制台属性后端、日志子系统
//! - `reporting` - 报告器、运行计数和格式化宏
//! - `cli` - `ws-test-report` 可执行文件的命令行接口
//!
//! ## Example / 示例
//!
//! ```no_run
//! use ws_test_console::{Reporter, TracingLog, parse_cmdline, report_success};
//!
//! let mut log = TracingLog::new();
//! let flags = parse_cmdline(std::env::args(), &mut log);
//! let mut reporter = Reporter::new(flags);
//!
//! reporter.headline("RESULTS");
//! report_success!(reporter, "{} tests", 5);
//! std::process::exit(if reporter.finish().is_success() { 0 } else { 1 });
//! ```

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::{
    ColorMode, FailureMode, HeadlineLayout, LogSubsystem, ReporterConfig, ReporterFlags,
    TestColor, parse_cmdline,
};
pub use crate::infra::streams::{BufferStreams, Sink, StdStreams, Streams};
pub use crate::infra::{
    AnsiBackend, ConsoleAttributes, ConsoleBackend, SinkColors, StyleBackend, TracingLog,
};
pub use crate::reporting::{Reporter, Tally};
