mod args;
mod config;
mod global;
mod handlers;
mod logging;

use clap::Parser;
use std::process::ExitCode;

use args::Commands;
use config::ConfigFile;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "k-hhc")]
#[command(version)]
#[command(about = "Encode integers as short, sortable base-66 strings and decode them back", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

pub fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::setup_logging(&cli.global);

    // Load settings with user overrides
    let settings = ConfigFile::load_with_overrides(cli.global.config.as_deref())?.settings();
    tracing::debug!(?settings, "resolved settings");

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &settings),
        Commands::Decode(args) => handlers::decode::handle(args, &settings),
        Commands::Validate(args) => handlers::validate::handle(args, &settings),
        Commands::Info(args) => handlers::info::handle(args),
    }
}
