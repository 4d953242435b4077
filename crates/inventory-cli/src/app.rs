//! Application context for the Inventory CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file and owns the
//! console wording for load/save problems.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;
use tracing::debug;

use inventory_core::{Inventory, InventoryError};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, InventoryConfig, DEFAULT_INVENTORY_FILE};

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("INVENTORY_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<InventoryConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&InventoryConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            debug!(path = %path.display(), "reading config");
            read_config(&path)
        })
    }

    /// Inventory file: `--file`/`INVENTORY_PATH`, then config, then the default name.
    pub fn inventory_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = self.cli.file.as_deref() {
            return Ok(PathBuf::from(path));
        }
        let configured = self.config()?.inventory.path.as_deref();
        Ok(PathBuf::from(configured.unwrap_or(DEFAULT_INVENTORY_FILE)))
    }

    /// Low-stock threshold: explicit value, then config.
    pub fn low_stock_threshold(&self, explicit: Option<u64>) -> anyhow::Result<u64> {
        match explicit {
            Some(threshold) => Ok(threshold),
            None => Ok(self.config()?.report.low_stock_threshold),
        }
    }

    /// Print a status line unless quiet mode is on.
    pub fn status(&self, message: &str) {
        if !self.quiet() {
            println!("{}", message);
        }
    }

    /// Load the inventory for a command that will read or rewrite the file.
    ///
    /// A missing file is reported and treated as empty. Unreadable or invalid
    /// content is an error so the command never overwrites it.
    pub fn open_inventory(&self) -> anyhow::Result<(Inventory, PathBuf)> {
        let path = self.inventory_path()?;
        let mut inventory = Inventory::new();
        match inventory.load(&path) {
            Ok(_) => Ok((inventory, path)),
            Err(err @ InventoryError::NotFound(_)) => {
                self.status(&load_failure_message(&path, &err));
                Ok((inventory, path))
            }
            Err(err) => Err(anyhow::anyhow!(
                "{}\n{}",
                load_failure_message(&path, &err),
                err.detail()
            )),
        }
    }

    /// Save the inventory, turning failures into a console-ready error.
    pub fn save_inventory(&self, inventory: &Inventory, path: &Path) -> anyhow::Result<()> {
        inventory
            .save(path)
            .map_err(|err| anyhow::anyhow!(save_failure_message(path, &err)))
    }
}

/// Console wording for a failed load. The inventory is empty afterwards.
pub fn load_failure_message(path: &Path, err: &InventoryError) -> String {
    match err {
        InventoryError::NotFound(_) => format!(
            "File '{}' not found. Starting with an empty inventory.",
            path.display()
        ),
        InventoryError::Parse(_) | InventoryError::Validation(_) => format!(
            "Error decoding JSON from '{}'. Resetting inventory.",
            path.display()
        ),
        other => format!("Error loading file '{}': {}", path.display(), other.detail()),
    }
}

/// Console wording for a failed save.
pub fn save_failure_message(path: &Path, err: &InventoryError) -> String {
    format!("Error saving file '{}': {}", path.display(), err.detail())
}

/// Turn a core error into a CLI error carrying only its message.
pub fn user_error(err: InventoryError) -> anyhow::Error {
    anyhow::anyhow!("{}", err.detail())
}
