//! Security posture dashboard - CLI entry point
//!
//! Launches the terminal dashboard and manages its configuration file.

use clap::{Parser, Subcommand};
use posture_dashboard::config::{default, loader::ConfigLoader, schema::Config, xdg};
use posture_dashboard::{logging, tui::app::App, Dashboard};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Security posture dashboard
#[derive(Parser)]
#[command(name = "pdash")]
#[command(version, about = "Terminal dashboard for security posture widgets")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the pdash CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the terminal dashboard (default)
    Tui {
        /// Configuration file to use instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,

        /// Initial search term
        #[arg(long)]
        search: Option<String>,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate {
        /// File to validate instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Tui {
        config: None,
        search: None,
    }) {
        Commands::Tui { config, search } => run_tui(config.as_deref(), search),
        Commands::Config { action } => run_config_command(action),
    }
}

/// Loads configuration, installs logging and runs the dashboard until quit.
fn run_tui(config_path: Option<&Path>, search: Option<String>) -> ExitCode {
    let config = match ConfigLoader::load(config_path).and_then(|c| c.validate().map(|()| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(&config.log) {
        eprintln!("Logging error: {e}");
        return ExitCode::FAILURE;
    }

    let mut app = match build_app(&config, search) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("TUI error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("starting dashboard");
    if let Err(e) = rt.block_on(app.run()) {
        tracing::error!("TUI error: {}", e);
        eprintln!("TUI error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Seeded app with the configured time range, tick rate and search term.
fn build_app(
    config: &Config,
    search: Option<String>,
) -> Result<App, posture_dashboard::config::error::ConfigError> {
    let mut dashboard = Dashboard::seeded();
    dashboard.time_range = config.tui.time_range()?;
    if let Some(term) = search {
        dashboard.set_search_term(term);
    }
    Ok(App::new(dashboard).with_tick_rate(config.tui.tick_rate()?))
}

fn run_config_command(action: ConfigAction) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => default::create_default_config(force).map(|path| {
            println!("Created configuration at {}", path.display());
        }),
        ConfigAction::Path => {
            println!("{}", xdg::config_path().display());
            Ok(())
        }
        ConfigAction::Validate { config } => ConfigLoader::load(config.as_deref())
            .and_then(|c| c.validate().map(|()| c))
            .map(|config| {
                println!("Configuration is valid");
                println!("{config:#?}");
            }),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Config error: {e}");
            ExitCode::FAILURE
        }
    }
}
