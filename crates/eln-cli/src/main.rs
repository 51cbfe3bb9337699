//! eln-report - compose reaction reports from ELN reaction records
//!
//! Commands:
//! - `compose`: build reports for one reaction or an array of reactions
//! - `check`: resolve and validate the active report profile
//! - `sections`: list the canonical section order

use clap::{Args, Parser, Subcommand};
use eln_cli::error::{CliError, Result};
use eln_cli::exit_codes::ExitCode;
use eln_cli::input::{parse_reactions, read_input};
use eln_cli::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use eln_cli::output;
use eln_common::OutputFormat;
use eln_config::{load_profile, ReportSettings};
use eln_report::ReportComposer;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Reaction report composer for electronic lab notebooks
#[derive(Parser)]
#[command(name = "eln-report")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose reports for reactions read from a JSON document
    Compose(ComposeArgs),

    /// Resolve and validate the report profile
    Check(CheckArgs),

    /// List report sections in canonical order
    Sections,
}

#[derive(Args, Debug)]
struct ComposeArgs {
    /// Reaction JSON file (an object or an array), or `-` for stdin
    input: String,

    /// Report profile path (overrides environment and config directories)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Enable every optional section regardless of the profile
    #[arg(long)]
    all_sections: bool,

    /// Show the full reaction scheme instead of product structures
    #[arg(long)]
    show_all_materials: bool,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Report profile path (overrides environment and config directories)
    #[arg(long)]
    profile: Option<PathBuf>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and are not failures.
            let code = if err.use_stderr() {
                ExitCode::ArgsError
            } else {
                ExitCode::Clean
            };
            let _ = err.print();
            std::process::exit(code.as_i32());
        }
    };

    let cli_level = (cli.global.verbose > 0 || cli.global.quiet)
        .then(|| LogLevel::from_verbosity(cli.global.verbose, cli.global.quiet));
    let log_format = if cli.global.format.is_machine() {
        LogFormat::Jsonl
    } else {
        LogFormat::Human
    };
    init_logging(&LogConfig::from_env(cli_level, Some(log_format)));

    let (command, result) = match &cli.command {
        Commands::Compose(args) => ("compose", run_compose(&cli.global, args)),
        Commands::Check(args) => ("check", run_check(&cli.global, args)),
        Commands::Sections => (
            "sections",
            output::render_sections(cli.global.format).map_err(CliError::from),
        ),
    };

    let exit_code = match result {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::Clean
        }
        Err(err) => {
            error!(command = command, error = %err, "command failed");
            for line in output::render_error(command, &err, cli.global.format) {
                eprintln!("{}", line);
            }
            err.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run_compose(global: &GlobalOpts, args: &ComposeArgs) -> Result<Vec<String>> {
    let loaded = load_profile(args.profile.as_deref())?;

    let settings = if args.all_sections {
        ReportSettings::all()
    } else {
        loaded.profile.settings
    };
    let mut config = loaded.profile.config.clone();
    if args.show_all_materials {
        config = config.with_show_all_materials(true);
    }
    debug!(
        sections = ?settings.enabled_keys(),
        diagram_mode = ?config.diagram_mode(),
        "effective report settings"
    );

    let raw = read_input(&args.input)?;
    let reactions = parse_reactions(&raw)?;

    let composer = ReportComposer::new(settings, config);
    let reports = composer.compose_batch(&reactions);
    info!(input = %args.input, reports = reports.len(), "Compose finished");

    Ok(output::render_reports(&reports, global.format, &loaded.location)?)
}

fn run_check(global: &GlobalOpts, args: &CheckArgs) -> Result<Vec<String>> {
    let loaded = load_profile(args.profile.as_deref())?;
    Ok(output::render_check(&loaded, global.format)?)
}
