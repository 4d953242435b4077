use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use inventory_core::VERSION;

/// Inventory - track item quantities in a plain JSON file
#[derive(Parser)]
#[command(name = "inventory")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the inventory file
    #[arg(short, long, global = true, env = "INVENTORY_PATH")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Item name
    #[arg(value_name = "ITEM")]
    pub item: String,

    /// Quantity to add (whole number, zero or more)
    #[arg(value_name = "QTY", allow_hyphen_values = true)]
    pub quantity: String,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Item name
    #[arg(value_name = "ITEM")]
    pub item: String,

    /// Quantity to remove
    #[arg(value_name = "QTY", allow_hyphen_values = true)]
    pub quantity: String,
}

/// Arguments for the `qty` command
#[derive(Args)]
pub struct QtyArgs {
    /// Item name
    #[arg(value_name = "ITEM")]
    pub item: String,
}

/// Arguments for the `report` command
#[derive(Args)]
pub struct ReportArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `low` command
#[derive(Args)]
pub struct LowArgs {
    /// Report items with fewer than this many units
    #[arg(long, value_name = "N")]
    pub threshold: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the demonstration sequence (default)
    Demo,

    /// Add stock for an item
    Add(AddArgs),

    /// Remove stock for an item (deletes it at zero)
    Remove(RemoveArgs),

    /// Show the quantity of one item
    Qty(QtyArgs),

    /// List every item and its quantity
    Report(ReportArgs),

    /// List items running low
    Low(LowArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
