//! # Reporter Configuration / 报告器配置
//!
//! Optional TOML configuration for a reporter. Every field has a default, so
//! an empty file is a valid configuration.
//!
//! 报告器的可选 TOML 配置。每个字段都有默认值，因此空文件也是合法配置。
//!
//! ```toml
//! verbose = true
//! log = false
//! color = "always"     # auto | always | never
//! failures = "deferred" # immediate | deferred
//! ```

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::core::flags::ReporterFlags;

/// Whether styling is emitted. This switches color on or off; it does not
/// change which colors the tags map to.
///
/// 是否输出样式。它只是开关颜色，不改变标签对应的颜色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Decide per stream from the environment (`CLICOLOR_FORCE`, `NO_COLOR`,
    /// `CLICOLOR`) and whether that stream is a terminal.
    /// 根据环境变量以及该流是否为终端，逐个流决定。
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Decides whether a stream gets styled output.
    ///
    /// `is_terminal` describes the stream being written, and `env` looks up an
    /// environment variable. In `Auto` mode a non-`"0"` `CLICOLOR_FORCE` wins,
    /// then any `NO_COLOR` turns color off, then `CLICOLOR=0` turns it off,
    /// and otherwise color follows `is_terminal`.
    ///
    /// 决定某个流是否输出样式。`is_terminal` 描述被写入的流，`env` 用于查询环境变量。
    pub fn colorize<F>(self, is_terminal: bool, env: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if env("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
                    return true;
                }
                if env("NO_COLOR").is_some() {
                    return false;
                }
                env("CLICOLOR").is_none_or(|v| v != "0") && is_terminal
            }
        }
    }
}

impl FromStr for ColorMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => bail!("unknown color mode '{}' (expected auto, always or never)", other),
        }
    }
}

/// When failure lines are written.
/// 失败行的输出时机。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Print each failure as soon as it is reported.
    /// 报告后立即打印每个失败。
    #[default]
    Immediate,
    /// Queue failures and print them all when the run finishes.
    /// 将失败排队，在运行结束时统一打印。
    Deferred,
}

/// Reporter settings, loaded from a TOML file.
/// 从 TOML 文件加载的报告器设置。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Same as passing `--verbose` / 等同于传入 `--verbose`
    pub verbose: bool,
    /// Same as passing `--log` / 等同于传入 `--log`
    pub log: bool,
    pub color: ColorMode,
    pub failures: FailureMode,
}

impl ReporterConfig {
    /// Reads and parses a configuration file.
    ///
    /// 读取并解析配置文件。
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read reporter config at {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse reporter config at {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "reporter config loaded");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The start-up flags this configuration asks for.
    ///
    /// These are raised through [`ReporterFlags::merge`] so the log
    /// subsystem is notified the same way as for `--log`.
    pub fn flags(&self) -> ReporterFlags {
        ReporterFlags {
            verbose: self.verbose,
            log_on: self.log,
        }
    }
}
