//! Configuration commands

use std::path::Path;

use colored::Colorize;

use crate::config::AppConfig;
use crate::interfaces::cli::CliError;

pub fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| "config.example.toml".to_string());

    if Path::new(&path).exists() && !force {
        return Err(CliError::CommandError(format!(
            "File already exists: {} (use --force to overwrite)",
            path
        )));
    }

    std::fs::write(&path, AppConfig::generate_sample_config())
        .map_err(|e| CliError::CommandError(format!("Failed to write {}: {}", path, e)))?;

    println!(
        "{} Generated example configuration: {}",
        "✓".bold().green(),
        path.cyan()
    );
    Ok(())
}

pub fn config_show(config: &AppConfig) -> Result<(), CliError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| CliError::CommandError(format!("Failed to render config: {}", e)))?;
    print!("{}", rendered);
    Ok(())
}
