//! # Run Summary / 运行摘要
//!
//! Counters for the result lines a reporter has emitted.
//!
//! 报告器已输出结果行的计数器。

use std::fmt;
use std::process::ExitCode;

/// Number of results reported so far.
/// 目前已报告的结果数量。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Tally {
    /// Total number of results of any kind.
    pub fn total(&self) -> usize {
        self.succeeded + self.failed + self.skipped
    }

    /// A run succeeds when nothing failed. Skips do not count against it.
    ///
    /// 没有失败即视为运行成功，跳过不计入失败。
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code matching [`Tally::is_success`].
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} succeeded, {} failed, {} skipped",
            self.succeeded, self.failed, self.skipped
        )
    }
}
