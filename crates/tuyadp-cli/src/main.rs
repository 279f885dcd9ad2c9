use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use glob::glob;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tuyadp_core::{Report, parse_hex_frame, parse_tuya_command, summarize_command};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("TUYADP_BUILD_COMMIT"),
    ", ",
    env!("TUYADP_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = concat!(
    "Examples:\n",
    "  tuyadp frames analyse frames.hex -o report.json\n",
    "  tuyadp frames analyze 'captures/*.hex' --stdout --pretty\n",
    "  tuyadp frames decode '00 01 00 02 02 00 04 00 00 02 db'"
);

#[derive(Parser, Debug)]
#[command(name = "tuyadp")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Offline decoder and analyzer for Tuya data point frames.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on captured Tuya command frames.
    Frames {
        #[command(subcommand)]
        command: FramesCommands,
    },
}

#[derive(Subcommand, Debug)]
enum FramesCommands {
    /// Analyse a hex capture and generate a versioned JSON report.
    #[command(alias = "analyze")]
    #[command(after_help = EXAMPLES)]
    Analyse(AnalyseArgs),

    /// Decode a single hex-encoded frame and print it as JSON.
    Decode {
        /// Frame bytes as hex; whitespace and ':' separators are ignored
        hex: String,
    },
}

#[derive(Args, Debug)]
struct AnalyseArgs {
    /// Path to a .hex or .txt capture (one frame per line)
    input: PathBuf,

    /// Output report path (JSON)
    #[arg(short = 'o', long, required_unless_present = "stdout")]
    report: Option<PathBuf>,

    /// Write JSON report to stdout
    #[arg(long, conflicts_with = "report")]
    stdout: bool,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,

    /// Exit with a non-zero code if protocol violations are present
    #[arg(long)]
    strict: bool,

    /// List protocol violations after analysis
    #[arg(long)]
    list_violations: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Frames { command } => match command {
            FramesCommands::Analyse(args) => cmd_frames_analyse(args),
            FramesCommands::Decode { hex } => cmd_frames_decode(&hex),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn cmd_frames_analyse(args: AnalyseArgs) -> Result<(), CliError> {
    let AnalyseArgs {
        input,
        report,
        stdout,
        pretty,
        compact,
        quiet,
        strict,
        list_violations,
    } = args;

    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    let input_abs = fs::canonicalize(&resolved_input)
        .with_context(|| format!("Failed to resolve input path: {}", resolved_input.display()))?;
    let report = if stdout {
        None
    } else {
        let report_path = report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?;
        ensure_distinct_output(&report_path, &input_abs)?;
        Some(report_path)
    };

    let meta = fs::metadata(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    if !meta.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .hex or .txt file".to_string()),
        ));
    }

    debug!(input = %resolved_input.display(), "analysing frames");
    let rep = tuyadp_core::analyze_frame_file(&resolved_input).context("frame analysis failed")?;
    let json = serialize_report(&rep, pretty, compact)?;

    match report {
        None => print!("{}", json),
        Some(report) => {
            if let Some(parent) = report.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&report, json)
                .with_context(|| format!("Failed to write report: {}", report.display()))?;
            if !quiet {
                eprintln!("OK: report written -> {}", report.display());
            }
        }
    }

    if list_violations && !quiet {
        print_violations(&rep);
    }
    if strict && !rep.violations.is_empty() {
        return Err(CliError::new(
            "protocol violations detected",
            Some("use --list-violations to inspect".to_string()),
        ));
    }
    Ok(())
}

fn cmd_frames_decode(text: &str) -> Result<(), CliError> {
    let bytes = parse_hex_frame(text).map_err(|err| {
        CliError::new(
            format!("invalid hex frame: {}", err),
            Some("pass the frame as hex digits, e.g. '00 01 00 01 01 00 01 01'".to_string()),
        )
    })?;
    let (command, rest) = parse_tuya_command(&bytes).map_err(|err| {
        CliError::new(
            format!("frame rejected: {}", err),
            Some("a frame is status, tsn, 2-byte dp id, then one data point".to_string()),
        )
    })?;
    if !rest.is_empty() {
        eprintln!("warning: {} trailing bytes ignored", rest.len());
    }
    let summary = summarize_command(1, &command);
    let json = serde_json::to_string_pretty(&summary).context("JSON serialization failed")?;
    println!("{}", json);
    Ok(())
}

fn ensure_distinct_output(report_path: &Path, input_abs: &Path) -> Result<(), CliError> {
    let report_dir = match report_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::canonicalize(parent),
        _ => fs::canonicalize("."),
    };
    // The output directory may not exist yet; it is created later.
    let Ok(report_dir) = report_dir else {
        return Ok(());
    };
    let file_name = report_path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid report path: {}", report_path.display()))?;
    if report_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!(
                "report path must differ from input: {}",
                report_path.display()
            ),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn serialize_report(rep: &Report, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn print_violations(rep: &Report) {
    eprintln!("Protocol violations:");
    for violation in &rep.violations {
        eprintln!(
            "  {} {} ({}): {}",
            violation.severity, violation.id, violation.count, violation.message
        );
    }
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .hex or .txt file".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "hex" && ext != "txt" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .hex or .txt file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected .hex or .txt".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single capture file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
