//! # Reporting Module / 报告模块
//!
//! This module handles the display of test results in the console.
//! It provides the `Reporter` with its SUCCESS/FAILURE/SKIPPED/STATUS/HEADLINE
//! lines, the run tally and `format!`-style macros.
//!
//! 此模块处理测试结果在控制台中的显示。
//! 它提供带有 SUCCESS/FAILURE/SKIPPED/STATUS/HEADLINE 行的 `Reporter`、
//! 运行计数以及 `format!` 风格的宏。

pub mod console;
mod macros;
pub mod summary;

// Re-export common reporting items
pub use console::Reporter;
pub use summary::Tally;
