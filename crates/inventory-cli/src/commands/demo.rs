//! Scripted walk through every store operation.
//!
//! Each step that fails is reported and the sequence carries on.

use inventory_core::{ActivityLog, Inventory, DEFAULT_LOW_STOCK_THRESHOLD};

use crate::app::{load_failure_message, save_failure_message, AppContext};
use crate::helpers::{format_item_list, parse_quantity};

pub fn handle_demo(ctx: &AppContext) -> anyhow::Result<()> {
    let path = ctx.inventory_path()?;
    let mut inventory = Inventory::new();
    let mut log = ActivityLog::new();

    // Item names are always text here, so the third step trips the quantity
    // parse ("Invalid quantity type") rather than an item-name check.
    for (item, raw_qty) in [("apple", "10"), ("banana", "-2"), ("123", "ten")] {
        let added = parse_quantity(raw_qty).and_then(|qty| {
            inventory
                .add(item, qty, Some(&mut log))
                .map_err(|err| anyhow::anyhow!("{}", err.detail()))
        });
        if let Err(err) = added {
            ctx.status(&err.to_string());
        }
    }

    for (item, qty) in [("apple", 3), ("orange", 1)] {
        if let Err(err) = inventory.remove(item, qty) {
            ctx.status(err.detail());
        }
    }

    match inventory.get_qty("apple") {
        Some(qty) => println!("Apple stock: {}", qty),
        None => ctx.status("Item 'apple' not found in inventory."),
    }
    println!(
        "Low items: {}",
        format_item_list(&inventory.low_stock(DEFAULT_LOW_STOCK_THRESHOLD))
    );

    if let Err(err) = inventory.save(&path) {
        ctx.status(&save_failure_message(&path, &err));
    }
    if let Err(err) = inventory.load(&path) {
        ctx.status(&load_failure_message(&path, &err));
    }

    println!("Items Report");
    for line in inventory.report_lines() {
        println!("{}", line);
    }

    if !log.is_empty() {
        println!("Activity log");
        for entry in log.entries() {
            println!("{}", entry);
        }
    }
    Ok(())
}
