//! Parsing helpers for command arguments.

/// Parse a quantity argument as a whole number.
///
/// Sign is not checked here; the store decides whether a negative value is
/// acceptable for the operation.
pub fn parse_quantity(raw: &str) -> anyhow::Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| anyhow::anyhow!("Invalid quantity type: {} (must be an integer)", raw))
}

/// Render item names the way the demo prints them, e.g. `[apple, pear]`.
pub fn format_item_list(items: &[&str]) -> String {
    format!("[{}]", items.join(", "))
}
