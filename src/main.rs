use clap::Parser;

use ledgerlink::cli::Cli;
use ledgerlink::config::{AppConfig, get_config, init_config, update_config};
use ledgerlink::interfaces::cli::run_cli_command;
use ledgerlink::system::logging::init_logging;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => {
            update_config(AppConfig::load_from(Some(path))?);
            get_config()
        }
        None => init_config()?,
    };

    let _guard = init_logging(&config.logging)?;

    if let Err(e) = run_cli_command(cli.command, &config) {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }

    Ok(())
}
