//! # Log Subsystem Integration Tests / 日志子系统集成测试
//!
//! `TracingLog` installs the process-wide `tracing` subscriber, so everything
//! runs inside one test function in its own test binary.
//!
//! `TracingLog` 会安装进程级的 `tracing` 订阅者，因此所有检查都放在独立测试二进制中的一个测试函数里。

use tracing::level_filters::LevelFilter;
use ws_test_console::infra::log::INITIAL_LEVEL;
use ws_test_console::{TracingLog, parse_cmdline};

#[test]
fn test_log_flag_installs_subscriber_at_trace() {
    let mut log = TracingLog::new();
    assert!(!log.is_installed());
    assert_eq!(log.level(), None);

    let flags = parse_cmdline(["harness", "--log"], &mut log);
    assert!(flags.log_on);
    assert!(log.is_installed());
    assert_eq!(log.level(), Some(LevelFilter::TRACE));
    assert_ne!(INITIAL_LEVEL, LevelFilter::TRACE);

    // The installed filter now lets trace records through.
    assert_eq!(LevelFilter::current(), LevelFilter::TRACE);

    // A second subsystem finds the dispatcher taken and stays out of the way.
    let mut other = TracingLog::new();
    let flags = parse_cmdline(["--log"], &mut other);
    assert!(flags.log_on);
    assert!(!other.is_installed());
    assert_eq!(other.level(), Some(LevelFilter::TRACE));
}
