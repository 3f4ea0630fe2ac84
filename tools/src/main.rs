use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use linecode::{CodecConfig, LineCodeError, Scheme};
use linesim_tools::{
    collect_trace_paths, decode_amplitude_report, decode_report, encode_report,
    format_decode_pretty, inspect_trace, list_schemes, parse_amplitudes, TraceReport,
};
use serde::Serialize;
use signal::{parse_bits, parse_levels, Level};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "linesim",
    version,
    about = "Line-coding encoder, decoder and trace inspector"
)]
struct Cli {
    /// Line code to use.
    #[arg(long, short, global = true, default_value = "nrz-l")]
    scheme: Scheme,
    /// Level assumed before the first interval.
    #[arg(long, global = true, value_enum, default_value_t = InitialLevel::Low)]
    initial_level: InitialLevel,
    /// Reject levels and framing the scheme never produces.
    #[arg(long, global = true)]
    strict: bool,
    /// Increase log verbosity (overridden by LINESIM_LOG).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List supported line codes.
    Schemes {
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Encode a bit string such as `10110`.
    Encode {
        bits: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Decode a level string such as `+0-` or `HLN`.
    Decode {
        #[arg(allow_hyphen_values = true)]
        levels: String,
        /// Read the input as signed amplitudes such as `1,-1,0`.
        #[arg(long)]
        amplitudes: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Check a level string for bipolar violations; exits 1 if one is found.
    Check {
        #[arg(allow_hyphen_values = true)]
        levels: String,
    },
    /// Decode level trace files.
    Inspect {
        /// A trace file or a directory of trace files.
        path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Limit the number of inspected traces.
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InitialLevel {
    High,
    Low,
}

impl From<InitialLevel> for Level {
    fn from(level: InitialLevel) -> Self {
        match level {
            InitialLevel::High => Self::High,
            InitialLevel::Low => Self::Low,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = CodecConfig::new(cli.initial_level.into())?;
    if cli.strict {
        config = config.strict();
    }
    debug!(scheme = %cli.scheme, ?config, "configured");

    match cli.command {
        Command::Schemes { format } => {
            let schemes = list_schemes();
            if format == OutputFormat::Json {
                print_json(&schemes)?;
            } else {
                for info in &schemes {
                    let check = if info.violation_check {
                        "violation check"
                    } else {
                        "-"
                    };
                    println!(
                        "{:<24} {} interval(s)/bit  {check}",
                        info.name, info.intervals_per_bit
                    );
                }
            }
        }
        Command::Encode { bits, format } => {
            let bits = parse_bits(&bits).context("parse bits")?;
            let report = encode_report(cli.scheme, config, &bits);
            if format == OutputFormat::Json {
                print_json(&report)?;
            } else {
                println!("{}", report.levels);
            }
        }
        Command::Decode {
            levels,
            amplitudes,
            format,
        } => {
            let report = if amplitudes {
                let amplitudes = parse_amplitudes(&levels).context("parse amplitudes")?;
                decode_amplitude_report(cli.scheme, config, &amplitudes)
            } else {
                let levels = parse_levels(&levels).context("parse levels")?;
                decode_report(cli.scheme, config, &levels)
            }
            .context("decode levels")?;
            if format == OutputFormat::Json {
                print_json(&report)?;
            } else {
                println!("{}", format_decode_pretty(&report));
            }
        }
        Command::Check { levels } => {
            let levels = parse_levels(&levels).context("parse levels")?;
            let code = cli.scheme.build(config);
            let check = code
                .violation_check()
                .ok_or(LineCodeError::ViolationCheckUnsupported { scheme: cli.scheme })?;
            if let Some(violation) = check.find_violation(&levels) {
                println!(
                    "violation: {} at level {} repeats level {}",
                    violation.polarity, violation.position, violation.previous
                );
                return Ok(ExitCode::FAILURE);
            }
            println!("no violations");
        }
        Command::Inspect {
            path,
            glob,
            limit,
            format,
        } => {
            let mut paths = if path.is_dir() {
                collect_trace_paths(&path, glob.as_deref())?
            } else {
                vec![path]
            };
            if let Some(limit) = limit {
                paths.truncate(limit);
            }
            info!(count = paths.len(), scheme = %cli.scheme, "inspecting traces");
            let reports = paths
                .iter()
                .map(|path| inspect_trace(cli.scheme, config, path))
                .collect::<Result<Vec<_>>>()?;
            if format == OutputFormat::Json {
                print_json(&reports)?;
            } else {
                for report in &reports {
                    print_trace_report(report);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("LINESIM_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{json}");
    Ok(())
}

fn print_trace_report(report: &TraceReport) {
    println!(
        "== {} ({} levels) ==",
        report.path.display(),
        report.level_count
    );
    println!("{}", format_decode_pretty(&report.decode));
}
