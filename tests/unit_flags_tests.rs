//! # Flags Module Unit Tests / Flags 模块单元测试
//!
//! Tests for the tolerant `--verbose` / `--log` scan and the log subsystem
//! notifications it triggers.
//!
//! 测试宽松的 `--verbose` / `--log` 扫描以及它触发的日志子系统通知。

mod common;

use common::RecordingLog;
use tracing::level_filters::LevelFilter;
use ws_test_console::core::flags::{LOG_FLAG, VERBOSE_FLAG};
use ws_test_console::{ReporterFlags, parse_cmdline};

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_both_flags_set() {
        let flags = ReporterFlags::parse(["--verbose", "--log"]);
        assert!(flags.verbose);
        assert!(flags.log_on);
    }

    #[test]
    fn test_empty_args_leave_flags_false() {
        let flags = ReporterFlags::parse(Vec::<String>::new());
        assert_eq!(flags, ReporterFlags::default());
        assert!(!flags.verbose);
        assert!(!flags.log_on);
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = ReporterFlags::parse(["--log", "--verbose"]);
        let b = ReporterFlags::parse(["--verbose", "--log"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_arguments_are_ignored() {
        let flags = ReporterFlags::parse([
            "./autobahn_test",
            "--port",
            "9001",
            "-v",
            "--VERBOSE",
            "--verbose=1",
            "--log",
        ]);
        assert!(!flags.verbose);
        assert!(flags.log_on);
    }

    #[test]
    fn test_accepts_owned_strings() {
        let args: Vec<String> = vec!["prog".to_string(), VERBOSE_FLAG.to_string()];
        let flags = ReporterFlags::parse(&args);
        assert!(flags.verbose);
    }
}

#[cfg(test)]
mod idempotence_tests {
    use super::*;

    #[test]
    fn test_parsing_twice_never_resets_flags() {
        let mut log = RecordingLog::default();
        let mut flags = parse_cmdline(["--verbose", "--log"], &mut log);

        flags.apply_args(Vec::<&str>::new(), &mut log);
        assert!(flags.verbose);
        assert!(flags.log_on);

        flags.apply_args(["--verbose", "--log"], &mut log);
        assert!(flags.verbose);
        assert!(flags.log_on);
    }

    #[test]
    fn test_flags_accumulate_across_calls() {
        let mut log = RecordingLog::default();
        let mut flags = parse_cmdline(["--verbose"], &mut log);
        assert!(!flags.log_on);

        flags.apply_args(["--log"], &mut log);
        assert!(flags.verbose);
        assert!(flags.log_on);
    }
}

#[cfg(test)]
mod log_subsystem_tests {
    use super::*;

    #[test]
    fn test_log_flag_enables_callback_once_at_trace() {
        let mut log = RecordingLog::default();
        let flags = parse_cmdline(["prog", LOG_FLAG], &mut log);

        assert!(flags.log_on);
        assert_eq!(log.callbacks_enabled, 1);
        assert_eq!(log.levels, vec![LevelFilter::TRACE]);
    }

    #[test]
    fn test_no_log_flag_means_no_calls() {
        let mut log = RecordingLog::default();
        let flags = parse_cmdline(["prog", "--verbose", "--other"], &mut log);

        assert!(!flags.log_on);
        assert_eq!(log.callbacks_enabled, 0);
        assert!(log.levels.is_empty());
    }

    #[test]
    fn test_repeated_log_flag_notifies_once() {
        let mut log = RecordingLog::default();
        let mut flags = parse_cmdline(["--log", "--log"], &mut log);
        flags.apply_args(["--log"], &mut log);

        assert_eq!(log.callbacks_enabled, 1);
        assert_eq!(log.levels.len(), 1);
    }

    #[test]
    fn test_pure_parse_does_not_need_a_log_subsystem() {
        // `parse` routes through a no-op subsystem; the flag is still raised.
        let flags = ReporterFlags::parse(["--log"]);
        assert!(flags.log_on);
    }

    #[test]
    fn test_merge_notifies_like_the_scan() {
        let mut log = RecordingLog::default();
        let mut flags = ReporterFlags::default();
        flags.merge(
            ReporterFlags {
                verbose: true,
                log_on: true,
            },
            &mut log,
        );
        flags.merge(
            ReporterFlags {
                verbose: false,
                log_on: true,
            },
            &mut log,
        );

        assert!(flags.verbose);
        assert!(flags.log_on);
        assert_eq!(log.callbacks_enabled, 1);
        assert_eq!(log.levels, vec![LevelFilter::TRACE]);
    }
}
