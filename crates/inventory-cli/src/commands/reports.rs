use inventory_core::persist::to_pretty_json;

use crate::app::{user_error, AppContext};
use crate::cli::{LowArgs, ReportArgs};

pub fn handle_report(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    let (inventory, _path) = ctx.open_inventory()?;

    if args.json {
        let bytes = to_pretty_json(&inventory).map_err(user_error)?;
        println!("{}", String::from_utf8_lossy(&bytes));
    } else if inventory.is_empty() {
        ctx.status("No items in stock.");
    } else {
        ctx.status("Items Report");
        for line in inventory.report_lines() {
            println!("{}", line);
        }
    }
    Ok(())
}

pub fn handle_low(ctx: &AppContext, args: &LowArgs) -> anyhow::Result<()> {
    let threshold = ctx.low_stock_threshold(args.threshold)?;
    let (inventory, _path) = ctx.open_inventory()?;
    let low = inventory.low_stock(threshold);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&low)?);
    } else if low.is_empty() {
        ctx.status(&format!("No items below {}.", threshold));
    } else {
        for item in low {
            println!("{}", item);
        }
    }
    Ok(())
}
