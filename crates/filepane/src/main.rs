//! filepane entry point.
//!
//! Resolves paths, starts logging, and runs the startup sequence.  This is
//! the only place that decides the process exit code.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ Cli::parse()
//!  └─ ConfigPaths::resolve()     -- platform dirs or --config-dir / --data-dir
//!  └─ logging::init()            -- <data dir>/filepane.log
//!  └─ startup::run()             -- bootstrap, settings, hotkeys, theme
//!       └─ TerminalSink          -- warnings printed as they are found
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use filepane::application::startup::{self, StartupContext, StartupOptions};
use filepane::infrastructure::assets::embedded::EmbeddedBundle;
use filepane::infrastructure::logging;
use filepane::infrastructure::paths::ConfigPaths;
use filepane::infrastructure::terminal::{TerminalSink, TerminalStyle};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "filepane",
    version,
    about = "A terminal file manager"
)]
struct Cli {
    /// Directory to open in the first file panel.
    dir: Option<PathBuf>,

    /// Add missing fields to config.toml.
    #[arg(long)]
    fix_config_file: bool,

    /// Add missing bindings to hotkeys.toml.
    #[arg(long)]
    fix_hotkeys: bool,

    /// Override the configuration directory.
    #[arg(long, env = "FILEPANE_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Override the data directory (log file, theme version marker, state).
    #[arg(long, env = "FILEPANE_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let style = TerminalStyle::default();

    match run(cli, style) {
        Ok(context) => {
            println!(
                "filepane: theme {} loaded, opening {}",
                context.settings.theme,
                context.start_directory.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("startup failed: {e:#}");
            eprintln!("{}", style.error(&format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, style: TerminalStyle) -> anyhow::Result<StartupContext> {
    let paths = ConfigPaths::resolve(cli.config_dir.as_deref(), cli.data_dir.as_deref())
        .context("cannot locate configuration directories")?;
    logging::init(&paths.log_file)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config_dir = %paths.config_dir.display(),
        "filepane starting"
    );

    let options = StartupOptions {
        paths,
        version: env!("CARGO_PKG_VERSION").to_string(),
        fix_config_file: cli.fix_config_file,
        fix_hotkeys: cli.fix_hotkeys,
        start_dir: cli.dir,
    };
    let mut sink = TerminalSink::new(style, std::io::stderr());
    let context = startup::run(&EmbeddedBundle::new(), &options, &mut sink)?;
    Ok(context)
}
