//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use missionctl::config::Config;
use missionctl::output::OutputMode;
use missionctl::paths::DEFAULT_SCENARIO;

/// missionctl - rocket and mission tracking
#[derive(Parser, Debug)]
#[command(
    name = "missionctl",
    version,
    about = "Rocket and mission tracking",
    long_about = "Track rockets and missions and keep their statuses consistent.\n\n\
                  Scenario files declare rockets, missions and the assignments\n\
                  and status changes to apply to them."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true, overrides_with = "no_json")]
    pub json: bool,

    /// Human-readable output even if the config asks for JSON
    #[arg(long, global = true, overrides_with = "json")]
    pub no_json: bool,

    /// Config file (defaults to ~/.config/missionctl/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a scenario and print the mission summary
    Run {
        /// Scenario file
        scenario: PathBuf,

        /// Keep applying steps after one fails
        #[arg(short, long, overrides_with = "no_keep_going")]
        keep_going: bool,

        /// Stop at the first failed step even if the config says otherwise
        #[arg(long, overrides_with = "keep_going")]
        no_keep_going: bool,
    },

    /// Check a scenario for unknown or duplicate names without running it
    Validate {
        /// Scenario file
        scenario: PathBuf,
    },

    /// Write an example scenario file
    Init {
        /// Where to write the scenario
        #[arg(default_value = DEFAULT_SCENARIO)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = Config::load(cli.config.as_deref())?;

    let output_mode = if flag_or_config(cli.json, cli.no_json, config.output.json) {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Run {
            scenario,
            keep_going,
            no_keep_going,
        }) => commands::run(
            &scenario,
            flag_or_config(keep_going, no_keep_going, config.run.keep_going),
            output_mode,
        ),
        Some(Command::Validate { scenario }) => commands::validate(&scenario, output_mode),
        Some(Command::Init { path, force }) => commands::init(&path, force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("missionctl v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("missionctl v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'missionctl --help' for usage");
                println!("Run 'missionctl init' to write an example scenario");
            }
            Ok(())
        },
    }
}

/// Resolve an on/off flag pair against the config value
const fn flag_or_config(on: bool, off: bool, config: bool) -> bool {
    !off && (on || config)
}
