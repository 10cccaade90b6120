//! Enrolment command line
//!
//! Command functions write to any [`Write`] and return the process exit
//! code, so the binary stays a thin wrapper:
//!
//! - `0`: success
//! - `1`: the application or input file is invalid
//! - `2`: anything else (configuration, rendering, filesystem)

#![warn(missing_docs)]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use enrol_core::{load_input, EnrolConfig, EnrolError, Registrar, SubmissionSummary};
use serde::Serialize;

/// Success
pub const EXIT_OK: u8 = 0;
/// Invalid application or input file
pub const EXIT_INVALID: u8 = 1;
/// System failure
pub const EXIT_FAILURE: u8 = 2;

/// Options of `enrol submit`
#[derive(Debug, Clone, Default)]
pub struct SubmitArgs {
    /// Application file
    pub input: PathBuf,
    /// Configuration file
    pub config: Option<PathBuf>,
    /// Output directory, overriding the configuration
    pub out: Option<PathBuf>,
    /// Print a JSON summary instead of text
    pub json: bool,
    /// Print a text preview of the document
    pub preview: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitReport<'a> {
    #[serde(flatten)]
    summary: SubmissionSummary<'a>,
    path: &'a Path,
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Configuration file (TOML)")
}

fn input_arg() -> Arg {
    Arg::new("input")
        .required(true)
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .help("Application file (.json, .yaml, .yml or .toml)")
}

/// Command-line definition
#[must_use]
pub fn command() -> Command {
    Command::new("enrol")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate applications, render registration forms and build hand-off links")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("Raise log level (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("submit")
                .about("Validate an application, write its document and print the hand-off")
                .arg(input_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .value_name("DIR")
                        .value_parser(value_parser!(PathBuf))
                        .help("Output directory for the document"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print a JSON summary"),
                )
                .arg(
                    Arg::new("preview")
                        .long("preview")
                        .action(ArgAction::SetTrue)
                        .help("Print a text preview of the document"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate an application only")
                .arg(input_arg())
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("courses")
                .about("List the course catalogue")
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("fields")
                .about("List the form fields and their rules")
                .arg(config_arg()),
        )
}

/// Log filter for a `-v` count
#[must_use]
pub fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Dispatch parsed arguments
///
/// # Errors
/// Returns error on system failures; invalid applications are reported
/// on `out` with [`EXIT_INVALID`]
pub fn run(matches: &ArgMatches, today: NaiveDate, out: &mut dyn Write) -> anyhow::Result<u8> {
    let config_of = |args: &ArgMatches| args.get_one::<PathBuf>("config").cloned();
    match matches.subcommand() {
        Some(("submit", args)) => {
            let submit_args = SubmitArgs {
                input: args.get_one::<PathBuf>("input").cloned().unwrap_or_default(),
                config: config_of(args),
                out: args.get_one::<PathBuf>("out").cloned(),
                json: args.get_flag("json"),
                preview: args.get_flag("preview"),
            };
            submit(&submit_args, today, out)
        }
        Some(("validate", args)) => {
            let input = args.get_one::<PathBuf>("input").cloned().unwrap_or_default();
            validate(&input, config_of(args).as_deref(), out)
        }
        Some(("courses", args)) => courses(config_of(args).as_deref(), out),
        Some(("fields", args)) => fields(config_of(args).as_deref(), out),
        Some((other, _)) => anyhow::bail!("unknown command: {other}"),
        None => anyhow::bail!("no command given"),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EnrolConfig> {
    match path {
        Some(path) => EnrolConfig::load(path)
            .with_context(|| format!("loading configuration {}", path.display())),
        None => Ok(EnrolConfig::default()),
    }
}

/// Report a user error, or hand back a system error
fn report(error: EnrolError, out: &mut dyn Write) -> anyhow::Result<u8> {
    if !error.is_user_error() {
        return Err(error.into());
    }
    match error.validation_errors() {
        Some(errors) => {
            writeln!(out, "Invalid application ({} field(s)):", errors.len())?;
            for e in errors {
                writeln!(out, "  - {} ({}): {}", e.field, e.field.label(), e.message)?;
            }
        }
        None => writeln!(out, "Invalid input: {error}")?,
    }
    Ok(EXIT_INVALID)
}

/// `enrol submit`
///
/// # Errors
/// Returns error on system failures
pub fn submit(args: &SubmitArgs, today: NaiveDate, out: &mut dyn Write) -> anyhow::Result<u8> {
    let config = load_config(args.config.as_deref())?;
    let out_dir = args
        .out
        .clone()
        .unwrap_or_else(|| config.document.output_dir.clone());
    let registrar = Registrar::new(config)?;

    let input = match load_input(&args.input) {
        Ok(input) => input,
        Err(e) => return report(e, out),
    };
    let submission = match registrar.submit(&input, today) {
        Ok(submission) => submission,
        Err(e) => return report(e, out),
    };
    let path = submission.document.write_to(&out_dir)?;

    if args.json {
        let report = SubmitReport {
            summary: submission.summary(),
            path: &path,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(EXIT_OK);
    }

    if args.preview {
        writeln!(out, "{}", registrar.preview(&submission.record, today)?)?;
    }
    writeln!(out, "Document: {}", path.display())?;
    writeln!(out, "Reference: {}", submission.reference.short())?;
    writeln!(out)?;
    writeln!(out, "{}", submission.handoff.message)?;
    writeln!(out)?;
    writeln!(out, "Link: {}", submission.handoff.link)?;
    Ok(EXIT_OK)
}

/// `enrol validate`
///
/// # Errors
/// Returns error on system failures
pub fn validate(input: &Path, config: Option<&Path>, out: &mut dyn Write) -> anyhow::Result<u8> {
    let registrar = Registrar::new(load_config(config)?)?;
    let record = load_input(input).and_then(|input| registrar.record(&input));
    match record {
        Ok(record) => {
            writeln!(out, "Valid application: {}", record.full_name)?;
            Ok(EXIT_OK)
        }
        Err(e) => report(e, out),
    }
}

/// `enrol courses`
///
/// # Errors
/// Returns error if the configuration cannot be loaded
pub fn courses(config: Option<&Path>, out: &mut dyn Write) -> anyhow::Result<u8> {
    let config = load_config(config)?;
    let width = config.courses.iter().map(|c| c.id.len()).max().unwrap_or(0);
    for course in &config.courses {
        writeln!(out, "{:<width$}  {}", course.id, course.label)?;
    }
    Ok(EXIT_OK)
}

/// `enrol fields`
///
/// # Errors
/// Returns error if the configuration cannot be loaded
pub fn fields(config: Option<&Path>, out: &mut dyn Write) -> anyhow::Result<u8> {
    let schema = load_config(config)?.schema();
    for spec in schema.field_specs() {
        let presence = if spec.optional { "optional" } else { "required" };
        writeln!(out, "{} ({}) [{presence}]", spec.field, spec.field.label())?;
        for constraint in &spec.constraints {
            writeln!(out, "  - {}: {}", constraint.rule, constraint.message)?;
        }
    }
    Ok(EXIT_OK)
}
