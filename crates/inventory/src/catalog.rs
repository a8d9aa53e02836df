//! Starter catalog and seeding helpers.

use stockbook_core::{DomainResult, Money};

use crate::manager::InventoryManager;
use crate::product::Product;

/// (name, quantity, price in minor units); ids are assigned 1.. in order.
const STARTER: &[(&str, i64, i64)] = &[
    // Electronics
    ("Smartphone", 150, 999_999),
    ("Laptop", 80, 4_500_000),
    ("Bluetooth Headphones", 200, 250_000),
    // Kitchen appliances
    ("Rice Cooker", 120, 250_000),
    ("Blender", 100, 150_000),
    ("Electric Fan", 150, 200_000),
    // Home decor
    ("Wall Clock", 50, 50_000),
    ("Throw Blanket", 75, 100_000),
    // Outdoor & sports
    ("Camping Tent", 60, 400_000),
    ("Yoga Mat", 100, 80_000),
];

/// The fixed ten-item catalog a fresh ledger can be pre-populated with.
pub fn starter_catalog() -> DomainResult<Vec<Product>> {
    STARTER
        .iter()
        .zip(1i64..)
        .map(|(&(name, quantity, minor), id)| {
            Product::new(id, name, quantity, Money::from_minor(minor))
        })
        .collect()
}

/// Add `products` in order, stopping at the first failure.
///
/// Returns how many products were added.
pub fn seed(
    manager: &mut InventoryManager,
    products: impl IntoIterator<Item = Product>,
) -> DomainResult<usize> {
    let mut added = 0;
    for product in products {
        manager.add_product(product)?;
        added += 1;
    }
    tracing::debug!(count = added, "inventory seeded");
    Ok(added)
}
