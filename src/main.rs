//! devconsole - developer console entry point
//!
//! Without a subcommand the interactive menu starts; subcommands run a single
//! console action and exit non-zero when it fails.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use devconsole::commands::{
    BuildCommand, BuildSelection, ConfigInitCommand, ConfigShowCommand, EnvCommand, RunCommand,
};
use devconsole::core::{AppConfig, ProcessInvoker, APP_NAME, VERSION};
use devconsole::menu::DialoguerPicker;
use devconsole::toolchain::SystemProbe;
use devconsole::{console, Session};

#[derive(Parser)]
#[command(
    name = "devconsole",
    about = "Developer console for the Rust core, Kotlin wrapper and React Native app",
    version
)]
struct Cli {
    /// Project root (default: current directory)
    #[arg(long, global = true, env = "DEVCONSOLE_ROOT")]
    root: Option<PathBuf>,

    /// Configuration file (default: <root>/devconsole.toml, then the user config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate or set up the development environment
    Env {
        #[command(subcommand)]
        subcommand: EnvSubcommand,
    },

    /// Build the core crate and/or the Kotlin wrapper
    Build {
        #[arg(value_enum)]
        target: BuildArg,

        /// Build the release variant
        #[arg(long)]
        release: bool,
    },

    /// Install and start the Android app
    Run,

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

#[derive(Subcommand)]
enum EnvSubcommand {
    /// Check every component without changing anything
    Validate {
        /// Print the run report as JSON on the last line of stdout, after the status text
        #[arg(long)]
        json: bool,
    },
    /// Set up every component that is not valid yet
    Setup {
        /// Print the run report as JSON on the last line of stdout, after the status text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommand {
    /// Write the default configuration into the project root
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildArg {
    Core,
    Wrapper,
    All,
}

impl From<BuildArg> for BuildSelection {
    fn from(arg: BuildArg) -> Self {
        match arg {
            BuildArg::Core => BuildSelection::Core,
            BuildArg::Wrapper => BuildSelection::Wrapper,
            BuildArg::All => BuildSelection::All,
        }
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

fn open_session(cli: &Cli, root: PathBuf) -> Result<Session> {
    let loaded = AppConfig::load(&root, cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    debug!("Configuration source: {:?}", loaded.source);

    let invoker = ProcessInvoker::new().context("Failed to start process runtime")?;
    Ok(Session::new(root, loaded, Arc::new(invoker), Arc::new(SystemProbe)))
}

fn run(cli: Cli) -> Result<bool> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    info!("{} v{} in {:?}", APP_NAME, VERSION, root);

    let session = || open_session(&cli, root.clone());
    match &cli.command {
        None => {
            let picker = DialoguerPicker::new();
            console::run(&session()?, &picker)?;
            Ok(true)
        }
        Some(Commands::Env { subcommand }) => {
            let (set_up, json) = match subcommand {
                EnvSubcommand::Validate { json } => (false, *json),
                EnvSubcommand::Setup { json } => (true, *json),
            };
            EnvCommand { set_up, json }.execute(&session()?)
        }
        Some(Commands::Build { target, release }) => BuildCommand {
            selection: (*target).into(),
            release: *release,
        }
        .execute(&session()?),
        Some(Commands::Run) => RunCommand.execute(&session()?),
        Some(Commands::Config {
            subcommand: ConfigSubcommand::Init { force },
        }) => ConfigInitCommand {
            root: root.clone(),
            force: *force,
        }
        .execute(),
        Some(Commands::Config {
            subcommand: ConfigSubcommand::Show,
        }) => ConfigShowCommand.execute(&session()?),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    if run(cli)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
