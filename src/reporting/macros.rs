//! `format!`-style shorthands for the reporter methods.
//!
//! ```no_run
//! use ws_test_console::{Reporter, ReporterFlags, report_failure, report_success};
//!
//! let mut reporter = Reporter::new(ReporterFlags::default());
//! report_success!(reporter, "{} tests", 5);
//! report_failure!(reporter, "bad: {}", "x");
//! ```

#[macro_export]
macro_rules! report_success {
    ($reporter:expr, $($arg:tt)*) => {
        $reporter.success(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! report_failure {
    ($reporter:expr, $($arg:tt)*) => {
        $reporter.failure(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! report_skipped {
    ($reporter:expr, $($arg:tt)*) => {
        $reporter.skipped(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! report_status {
    ($reporter:expr, $($arg:tt)*) => {
        $reporter.status(::std::format_args!($($arg)*))
    };
}

/// Status text without a trailing newline.
#[macro_export]
macro_rules! report_status_inline {
    ($reporter:expr, $($arg:tt)*) => {
        $reporter.status_inline(::std::format_args!($($arg)*))
    };
}

/// Status line shown only with `--verbose`.
#[macro_export]
macro_rules! report_detail {
    ($reporter:expr, $($arg:tt)*) => {
        $reporter.detail(::std::format_args!($($arg)*))
    };
}
