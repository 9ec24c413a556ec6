//! # Reporter Flags / 报告器标志
//!
//! Start-up flag state for the reporter and the tolerant command-line scan
//! that fills it. Only `--verbose` and `--log` are recognized; every other
//! argument is ignored without an error, so a harness can share its argument
//! list with the code under test.
//!
//! 报告器的启动标志状态，以及填充它的宽松命令行扫描。
//! 仅识别 `--verbose` 和 `--log`；其他参数一律忽略且不报错，
//! 这样测试框架可以与被测代码共享参数列表。

use tracing::level_filters::LevelFilter;

/// The command-line token that turns on verbose output.
pub const VERBOSE_FLAG: &str = "--verbose";
/// The command-line token that turns on the log callback.
pub const LOG_FLAG: &str = "--log";

/// The collaborating log subsystem enabled by `--log`.
///
/// The reporter only ever calls these two entry points, once each, when
/// logging is first switched on.
///
/// 由 `--log` 启用的协作日志子系统。
/// 报告器只会在首次开启日志时各调用一次这两个入口。
pub trait LogSubsystem {
    /// Installs the subsystem's default record-printing callback.
    /// 安装子系统默认的日志记录打印回调。
    fn enable_default_callback(&mut self);

    /// Sets the active verbosity threshold. `LevelFilter::TRACE` means "all levels".
    /// 设置当前的详细级别阈值。`LevelFilter::TRACE` 表示"所有级别"。
    fn set_level(&mut self, level: LevelFilter);
}

/// A log subsystem that ignores every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLog;

impl LogSubsystem for NoLog {
    fn enable_default_callback(&mut self) {}

    fn set_level(&mut self, _level: LevelFilter) {}
}

/// Flags set once during start-up and read afterwards.
/// Both flags only ever move from `false` to `true`.
///
/// 启动时设置一次、之后只读的标志。两个标志只会从 `false` 变为 `true`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReporterFlags {
    /// Show verbose-only status lines / 显示仅在详细模式下输出的状态行
    pub verbose: bool,
    /// The log callback has been enabled / 日志回调已启用
    pub log_on: bool,
}

impl ReporterFlags {
    /// Scans `args` for recognized flags without touching any log subsystem.
    ///
    /// 扫描 `args` 中可识别的标志，不调用任何日志子系统。
    pub fn parse<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut flags = Self::default();
        flags.apply_args(args, &mut NoLog);
        flags
    }

    /// Scans `args` and raises the matching flags on `self`.
    ///
    /// Unrecognized arguments are skipped. When `--log` is seen and logging
    /// was not yet on, `log` gets its default callback enabled and its level
    /// set to `LevelFilter::TRACE`. Calling this again never clears a flag
    /// and never repeats the log calls.
    ///
    /// 扫描 `args` 并在 `self` 上设置匹配的标志。
    /// 未识别的参数会被跳过。首次遇到 `--log` 时，会为 `log` 启用默认回调
    /// 并把级别设为 `LevelFilter::TRACE`。重复调用不会清除标志，也不会重复调用日志接口。
    pub fn apply_args<I, T>(&mut self, args: I, log: &mut dyn LogSubsystem)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for arg in args {
            match arg.as_ref() {
                VERBOSE_FLAG => self.set_verbose(),
                LOG_FLAG => self.enable_log(log),
                _ => {}
            }
        }
        tracing::debug!(verbose = self.verbose, log_on = self.log_on, "reporter flags parsed");
    }

    /// Turns verbose output on.
    pub fn set_verbose(&mut self) {
        self.verbose = true;
    }

    /// Turns logging on, notifying `log` only on the first transition.
    ///
    /// 开启日志，仅在第一次状态变化时通知 `log`。
    pub fn enable_log(&mut self, log: &mut dyn LogSubsystem) {
        if self.log_on {
            return;
        }
        self.log_on = true;
        log.enable_default_callback();
        log.set_level(LevelFilter::TRACE);
    }

    /// Raises every flag that is set in `other`.
    pub fn merge(&mut self, other: ReporterFlags, log: &mut dyn LogSubsystem) {
        if other.verbose {
            self.set_verbose();
        }
        if other.log_on {
            self.enable_log(log);
        }
    }
}

/// Parses a process argument list into fresh flags, enabling `log` on `--log`.
///
/// 将进程参数列表解析为新的标志，遇到 `--log` 时启用 `log`。
pub fn parse_cmdline<I, T>(args: I, log: &mut dyn LogSubsystem) -> ReporterFlags
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut flags = ReporterFlags::default();
    flags.apply_args(args, log);
    flags
}
