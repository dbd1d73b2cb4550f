use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::contract::Identity;
use crate::errors::{LedgerlinkError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub contract: ContractConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Deployment constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Script hash allowed to spend contract-held assets.
    #[serde(default = "default_owner")]
    pub owner: Identity,
    /// Display string returned by `shortenerURL`.
    #[serde(default = "default_shortener_url")]
    pub shortener_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Registered backend name (`memory`, `file`).
    #[serde(default = "default_storage_backend")]
    pub backend: String,
    /// Data file for the `file` backend.
    #[serde(default = "default_storage_path")]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `text` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Log file; stderr when unset or empty.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub enable_rotation: bool,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            shortener_url: default_shortener_url(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            path: default_storage_path(),
        }
    }
}

impl StorageConfig {
    pub fn memory() -> Self {
        Self {
            backend: "memory".to_string(),
            ..Self::default()
        }
    }

    pub fn file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            backend: "file".to_string(),
            path: path.as_ref().to_string_lossy().into_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            enable_rotation: false,
            max_backups: default_max_backups(),
        }
    }
}

impl AppConfig {
    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let body = toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("# Error generating sample config: {}\n", e));
        format!(
            "# ledgerlink configuration\n\
             # Every key can be overridden with LEDGERLINK__<SECTION>__<KEY>,\n\
             # e.g. LEDGERLINK__CONTRACT__OWNER=0x...\n\n{}",
            body
        )
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LedgerlinkError::serialization(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

fn default_owner() -> Identity {
    Identity::zero()
}

fn default_shortener_url() -> String {
    "https://ledgr.link".to_string()
}

fn default_storage_backend() -> String {
    "file".to_string()
}

fn default_storage_path() -> String {
    "ledgerlink.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}
