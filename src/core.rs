//! # Core Module / 核心模块
//!
//! This module contains the platform-independent pieces of the reporter:
//! color tags, start-up flags, configuration and headline layout.
//!
//! 此模块包含报告器中与平台无关的部分：
//! 颜色标签、启动标志、配置和标题布局。

pub mod color;
pub mod config;
pub mod flags;
pub mod headline;

// Re-exports
pub use color::TestColor;
pub use config::{ColorMode, FailureMode, ReporterConfig};
pub use flags::{LogSubsystem, NoLog, ReporterFlags, parse_cmdline};
pub use headline::{HEADLINE_WIDTH, HeadlineLayout};
