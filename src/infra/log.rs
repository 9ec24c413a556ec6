//! # Tracing Log Subsystem / Tracing 日志子系统
//!
//! The default [`LogSubsystem`]: a `tracing-subscriber` formatter on standard
//! error, with its level held behind a reload handle so `set_level` can
//! widen it after installation.
//!
//! 默认的 [`LogSubsystem`]：输出到标准错误的 `tracing-subscriber` 格式化器，
//! 其级别由 reload 句柄持有，因此安装后 `set_level` 仍可调整级别。

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Registry, fmt, reload};

use crate::core::flags::LogSubsystem;

/// Level in effect between installing the callback and the first `set_level`.
pub const INITIAL_LEVEL: LevelFilter = LevelFilter::WARN;

/// Log subsystem backed by the global `tracing` dispatcher.
#[derive(Default)]
pub struct TracingLog {
    handle: Option<reload::Handle<LevelFilter, Registry>>,
    level: Option<LevelFilter>,
}

impl TracingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once this instance installed the global subscriber.
    pub fn is_installed(&self) -> bool {
        self.handle.is_some()
    }

    /// The last level requested through [`LogSubsystem::set_level`].
    pub fn level(&self) -> Option<LevelFilter> {
        self.level
    }
}

impl LogSubsystem for TracingLog {
    fn enable_default_callback(&mut self) {
        if self.handle.is_some() {
            return;
        }
        let (filter, handle) = reload::Layer::new(INITIAL_LEVEL);
        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init();

        match installed {
            Ok(()) => self.handle = Some(handle),
            // Another subscriber owns the dispatcher; leave it alone.
            Err(e) => tracing::warn!("default log callback not installed: {}", e),
        }
    }

    fn set_level(&mut self, level: LevelFilter) {
        self.level = Some(level);
        if let Some(handle) = &self.handle {
            if let Err(e) = handle.reload(level) {
                tracing::warn!("failed to change log level: {}", e);
            }
        }
    }
}
