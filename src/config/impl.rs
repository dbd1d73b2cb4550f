use std::path::Path;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use tracing::debug;

use super::AppConfig;
use crate::errors::{LedgerlinkError, Result};

/// Searched in order; the first existing file wins.
pub const CONFIG_PATHS: &[&str] = &[
    "config.toml",
    "ledgerlink.toml",
    "config/config.toml",
    "/etc/ledgerlink/config.toml",
];

/// Environment override prefix, e.g. `LEDGERLINK__STORAGE__BACKEND`.
pub const ENV_PREFIX: &str = "LEDGERLINK";

static CONFIG: OnceLock<ArcSwap<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Load from the first config file found plus environment overrides.
    pub fn load() -> Result<Self> {
        let path = CONFIG_PATHS.iter().map(Path::new).find(|p| p.exists());
        Self::load_from(path)
    }

    /// Load from an explicit file (optional) plus environment overrides.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env_prefix(path, ENV_PREFIX)
    }

    /// Like [`AppConfig::load_from`] with overrides read from
    /// `<env_prefix>__SECTION__KEY`.
    pub fn load_with_env_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        use config::{Config, Environment, File, FileFormat};

        let mut builder = Config::builder();
        if let Some(path) = path {
            debug!("Loading config from: {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        } else {
            debug!("No config file found, using defaults");
        }

        // 十六进制的 owner 不能被当作数字解析，所以关闭 try_parsing
        let builder = builder.add_source(
            Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(false),
        );

        builder
            .build()
            .and_then(|settings| settings.try_deserialize::<AppConfig>())
            .map_err(|e| LedgerlinkError::config(e.to_string()))
    }
}

/// Get the global configuration instance
///
/// # Panics
/// If [`init_config`] has not been called.
pub fn get_config() -> Arc<AppConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .load_full()
}

/// Initialize the global configuration, once.
pub fn init_config() -> Result<Arc<AppConfig>> {
    if let Some(config) = CONFIG.get() {
        return Ok(config.load_full());
    }
    let loaded = AppConfig::load()?;
    Ok(CONFIG.get_or_init(|| ArcSwap::from_pointee(loaded)).load_full())
}

/// Replace the global configuration (e.g. after `--config`).
pub fn update_config(config: AppConfig) {
    match CONFIG.get() {
        Some(current) => current.store(Arc::new(config)),
        None => {
            let _ = CONFIG.set(ArcSwap::from_pointee(config));
        }
    }
}
