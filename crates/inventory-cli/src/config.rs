use std::path::{Path, PathBuf};

use serde::Deserialize;

use inventory_core::DEFAULT_LOW_STOCK_THRESHOLD;

/// Inventory file used when neither the CLI nor the config names one.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

#[derive(Debug, Default, Deserialize)]
pub struct InventoryConfig {
    #[serde(default)]
    pub inventory: InventorySection,
    #[serde(default)]
    pub report: ReportSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct InventorySection {
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReportSection {
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u64,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

fn default_low_stock_threshold() -> u64 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Read the config file, falling back to defaults when it does not exist.
pub fn read_config(path: &Path) -> anyhow::Result<InventoryConfig> {
    if !path.exists() {
        return Ok(InventoryConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

fn parse_config(contents: &str) -> Result<InventoryConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("inventory"));
        }
    }
    Ok(home_dir()?.join(".config").join("inventory"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = parse_config(
            "[inventory]\npath = \"/srv/stock.json\"\n\n[report]\nlow_stock_threshold = 12\n",
        )
        .unwrap();
        assert_eq!(config.inventory.path.as_deref(), Some("/srv/stock.json"));
        assert_eq!(config.report.low_stock_threshold, 12);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(config.inventory.path.is_none());
        assert_eq!(config.report.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
    }

    #[test]
    fn test_report_section_without_threshold() {
        let config = parse_config("[report]\n").unwrap();
        assert_eq!(config.report.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        assert!(parse_config("[report]\nlow_stock_threshold = -1\n").is_err());
    }

    #[test]
    fn test_missing_config_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = read_config(&dir.path().join("config.toml")).unwrap();
        assert!(config.inventory.path.is_none());
    }
}
