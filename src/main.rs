use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use scoreboard::commands;
use scoreboard::config::{self, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL};
use scoreboard::tui;

#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(about = "Tennis scoreboard", long_about = "Tennis scoreboard\n\nIf no command is specified, the program starts the interactive board.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Match state file (TOML); the demo match is shown without one
    #[arg(short = 's', long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw one frame into an off-screen terminal buffer and print it
    Render {
        /// Buffer width in columns
        #[arg(short = 'W', long, default_value_t = 112)]
        width: u16,

        /// Buffer height in rows (two are used by the status bar)
        #[arg(short = 'H', long, default_value_t = 34)]
        height: u16,

        /// Write the frame to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the computed layout for a viewport size in pixels
    Layout {
        /// Viewport width in px
        #[arg(long, allow_negative_numbers = true)]
        width: f64,

        /// Viewport height in px
        #[arg(long, allow_negative_numbers = true)]
        height: f64,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_lowercase()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("time_format: {}", cfg.time_format);
    println!("use_unicode: {}", cfg.use_unicode);
    println!();
    println!("[design]");
    println!("width: {} px", cfg.design.width);
    println!("height: {} px", cfg.design.height);
    println!();
    println!("[cell]");
    println!("width_px: {}", cfg.cell.width_px);
    println!("height_px: {}", cfg.cell.height_px);
    println!();
    println!("[theme]");
    println!("background: {:?}", cfg.theme.background);
    println!("header_bg: {:?}", cfg.theme.header_bg);
    println!("name_fg: {:?}", cfg.theme.name_fg);
    println!("score_fg: {:?}", cfg.theme.score_fg);
    println!("marker_fg: {:?}", cfg.theme.marker_fg);
    println!("logo_fg: {:?}", cfg.theme.logo_fg);
    println!("error_fg: {:?}", cfg.theme.error_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run the interactive board
fn run_tui_mode(config: &config::Config, state_path: Option<PathBuf>) -> anyhow::Result<()> {
    let initial_state = commands::load_match_state(state_path.as_deref())?;
    let renderer = tui::Renderer::from_config(config)?;
    tui::run(renderer, config.cell, &config.time_format, initial_state, state_path)?;
    Ok(())
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(config: &config::Config, state_path: Option<PathBuf>, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => {
            handle_config_command(config);
            Ok(())
        }
        Commands::Render { width, height, output } => {
            let state = commands::load_match_state(state_path.as_deref())?;
            commands::render::run(config, state, width, height, output.as_deref())
        }
        Commands::Layout { width, height } => {
            let state = commands::load_match_state(state_path.as_deref())?;
            commands::layout::run(config, &state, width, height)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match config::read() {
        Ok(config) => config,
        Err(e) => {
            let e = anyhow::Error::new(e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let state_path = cli.state.clone();
    let result = match cli.command {
        None => run_tui_mode(&config, state_path),
        Some(command) => execute_command(&config, state_path, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
