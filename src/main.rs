use std::path::Path;

use clap::Parser;

use rust_passgen::cli::{self, Args, OutputSettings};
use rust_passgen::core::config::Config;
use rust_passgen::logging;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    let log_level = args.log_level.unwrap_or(config.log_level);
    logging::init(log_level, config.log_file.as_deref())?;

    for warning in &config.warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let out = OutputSettings::resolve(&args, &config, console::user_attended());

    match &args.command {
        Some(command) => {
            let output = cli::handlers::run_command(command, &config, &out)?;
            println!("{}", output);
        }
        None => {
            log::info!("No subcommand given; starting interactive menu");
            cli::menu::run_cli_menu(&config, &out)?;
        }
    }

    Ok(())
}
