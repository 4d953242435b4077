use inventory_core::{ActivityLog, RemoveOutcome};

use crate::app::{user_error, AppContext};
use crate::cli::{AddArgs, QtyArgs, RemoveArgs};
use crate::helpers::parse_quantity;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let qty = parse_quantity(&args.quantity)?;
    let (mut inventory, path) = ctx.open_inventory()?;
    let mut log = ActivityLog::new();

    inventory
        .add(&args.item, qty, Some(&mut log))
        .map_err(user_error)?;
    ctx.save_inventory(&inventory, &path)?;

    for entry in log.entries() {
        ctx.status(&entry.to_string());
    }
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let qty = parse_quantity(&args.quantity)?;
    let (mut inventory, path) = ctx.open_inventory()?;

    let outcome = inventory.remove(&args.item, qty).map_err(user_error)?;
    ctx.save_inventory(&inventory, &path)?;

    match outcome {
        RemoveOutcome::Remaining(left) => ctx.status(&format!("{} -> {}", args.item, left)),
        RemoveOutcome::Depleted => ctx.status(&format!("{} is out of stock", args.item)),
    }
    Ok(())
}

pub fn handle_qty(ctx: &AppContext, args: &QtyArgs) -> anyhow::Result<()> {
    let (inventory, _path) = ctx.open_inventory()?;
    let qty = inventory.require_qty(&args.item).map_err(user_error)?;
    println!("{}", qty);
    Ok(())
}
