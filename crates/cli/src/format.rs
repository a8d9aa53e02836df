//! Display formatting: currency amounts and the product table.

use stockbook_core::{Entity, Money, money::MINOR_PER_MAJOR};
use stockbook_inventory::Product;

/// Column width of the product table.
pub const COLUMN_WIDTH: usize = 20;
/// Names longer than this are cut to `NAME_LIMIT - 1` chars plus `...`.
pub const NAME_LIMIT: usize = 15;

/// Currency rendering: symbol prefix, thousands grouping, two decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    symbol: String,
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let abs = amount.minor_units().unsigned_abs();
        let per = MINOR_PER_MAJOR as u64;
        format!(
            "{sign}{}{}.{:02}",
            self.symbol,
            group_thousands(abs / per),
            abs % per
        )
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_LIMIT {
        let head: String = name.chars().take(NAME_LIMIT - 1).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// Render the product table followed by the grand total.
pub fn product_table(products: &[Product], total: Money, currency: &CurrencyFormatter) -> String {
    let w = COLUMN_WIDTH;
    let header = format!("{:<w$} {:<w$} {:<w$} {:<w$}", "Id", "Name", "Stock", "Price");
    let rule = "-".repeat(header.chars().count());

    let mut lines = vec![header.trim_end().to_string(), rule.clone()];
    for p in products {
        let row = format!(
            "{:<w$} {:<w$} {:<w$} {:<w$}",
            p.id(),
            truncate_name(p.name()),
            p.quantity_in_stock(),
            currency.format(p.price()),
        );
        lines.push(row.trim_end().to_string());
    }
    lines.push(rule);
    lines.push(format!("{:<w$}{}", "Total Value: ", currency.format(total)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
