// src/cli.rs
//! # Command-Line Interface / 命令行接口
//!
//! `ws-test-report` lets shell-driven test scripts print the same result
//! lines as harness code, one line per invocation.
//!
//! `ws-test-report` 让由 shell 驱动的测试脚本输出与测试代码相同的结果行，每次调用输出一行。

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use crate::core::config::{ColorMode, FailureMode, ReporterConfig};
use crate::core::flags::{LogSubsystem, ReporterFlags};
use crate::infra::TracingLog;
use crate::reporting::Reporter;

/// One reporter call requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportCommand {
    Success(String),
    Failure(String),
    Skipped(String),
    Status { message: String, newline: bool },
    Detail(String),
    Headline(String),
}

/// Fully parsed command-line invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub verbose: bool,
    pub log: bool,
    pub color: Option<ColorMode>,
    pub config: Option<PathBuf>,
    pub command: ReportCommand,
}

fn message_arg() -> Arg {
    Arg::new("message")
        .help("Message text; several words are joined with spaces")
        .value_name("MESSAGE")
        .num_args(1..)
        .required(true)
        .action(ArgAction::Append)
}

fn report_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name).about(about).arg(message_arg())
}

pub fn build_cli() -> Command {
    Command::new("ws-test-report")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print colored SUCCESS/FAILURE/SKIPPED/STATUS/HEADLINE test lines")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Show verbose-only detail lines")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .help("Enable the default log callback at the most verbose level")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .help("When to emit colors")
                .value_name("WHEN")
                .value_parser(["auto", "always", "never"])
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Reporter configuration file (TOML)")
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(report_command("success", "Print a green [SUCCESS] line on stdout"))
        .subcommand(report_command("failure", "Print a red [FAILURE] line on stderr"))
        .subcommand(report_command("skipped", "Print a yellow [SKIPPED] line on stderr"))
        .subcommand(
            report_command("status", "Print a dim status line on stdout").arg(
                Arg::new("no-newline")
                    .short('n')
                    .long("no-newline")
                    .help("Do not end the line")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(report_command(
            "detail",
            "Print a dim status line on stdout, only with --verbose",
        ))
        .subcommand(
            Command::new("headline")
                .about("Print TEXT centered in an 80-column banner on stdout")
                .arg(message_arg().value_name("TEXT")),
        )
}

fn joined_message(matches: &ArgMatches) -> String {
    matches
        .get_many::<String>("message")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

/// Parses an argument list, program name first.
pub fn parse_from<I, T>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_cli().try_get_matches_from(args)?;
    from_matches(&matches)
}

/// Parses the process arguments, exiting with clap's usage output on error.
pub fn parse_args() -> CliArgs {
    let matches = build_cli().get_matches();
    match from_matches(&matches) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

fn from_matches(matches: &ArgMatches) -> Result<CliArgs> {
    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| anyhow::anyhow!("no report command given"))?;

    let message = joined_message(sub);
    let command = match name {
        "success" => ReportCommand::Success(message),
        "failure" => ReportCommand::Failure(message),
        "skipped" => ReportCommand::Skipped(message),
        "status" => ReportCommand::Status {
            message,
            newline: !sub.get_flag("no-newline"),
        },
        "detail" => ReportCommand::Detail(message),
        "headline" => ReportCommand::Headline(message),
        other => anyhow::bail!("unknown report command '{}'", other),
    };

    // Global args are propagated down into the subcommand's matches.
    let color = sub
        .get_one::<String>("color")
        .map(|value| value.parse::<ColorMode>())
        .transpose()?;

    Ok(CliArgs {
        verbose: sub.get_flag("verbose"),
        log: sub.get_flag("log"),
        color,
        config: sub.get_one::<PathBuf>("config").cloned(),
        command,
    })
}

/// Resolves the final flags and configuration for an invocation.
///
/// Config-file flags and command-line flags are combined; either one turns
/// a flag on. `--color` overrides the file's color mode.
///
/// 合并配置文件与命令行的标志，任意一方开启即开启。`--color` 覆盖配置文件中的颜色模式。
pub fn resolve(
    args: &CliArgs,
    log: &mut dyn LogSubsystem,
) -> Result<(ReporterConfig, ReporterFlags)> {
    let mut config = match &args.config {
        Some(path) => ReporterConfig::load(path)?,
        None => ReporterConfig::default(),
    };
    if let Some(color) = args.color {
        config.color = color;
    }

    let mut flags = ReporterFlags::default();
    flags.merge(config.flags(), log);
    flags.merge(
        ReporterFlags {
            verbose: args.verbose,
            log_on: args.log,
        },
        log,
    );
    Ok((config, flags))
}

/// Runs one invocation against the process's stdout/stderr.
pub fn run(args: CliArgs) -> Result<()> {
    let mut log = TracingLog::new();
    let (config, flags) = resolve(&args, &mut log)?;
    // One line per invocation, so there is nothing to defer failures to.
    let mut reporter =
        Reporter::from_config(&config, flags).with_failure_mode(FailureMode::Immediate);

    match &args.command {
        ReportCommand::Success(message) => reporter.success(format_args!("{}", message)),
        ReportCommand::Failure(message) => reporter.failure(format_args!("{}", message)),
        ReportCommand::Skipped(message) => reporter.skipped(format_args!("{}", message)),
        ReportCommand::Status { message, newline } => {
            if *newline {
                reporter.status(format_args!("{}", message));
            } else {
                reporter.status_inline(format_args!("{}", message));
            }
        }
        ReportCommand::Detail(message) => reporter.detail(format_args!("{}", message)),
        ReportCommand::Headline(text) => reporter.headline(text),
    }
    Ok(())
}
