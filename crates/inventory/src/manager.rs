//! The authoritative product collection.

use stockbook_core::{DomainError, DomainResult, Entity, Money, ProductId};

use crate::product::Product;

/// Sole owner and mutator of the inventory collection.
///
/// Products are kept in insertion order and ids are unique across the
/// collection. The manager never chooses ids on its own for `add_product`;
/// callers that need a fresh one use [`InventoryManager::next_id`] or let
/// [`InventoryManager::add_new`] allocate it.
///
/// Not thread-safe by itself (mutation needs `&mut self`); wrap it in
/// [`SharedInventory`](crate::SharedInventory) to share it across threads.
#[derive(Debug, Clone, Default)]
pub struct InventoryManager {
    products: Vec<Product>,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `product`. Fails with `DuplicateKey` if its id is already tracked.
    pub fn add_product(&mut self, product: Product) -> DomainResult<()> {
        let id = product.id();
        if self.position(id).is_some() {
            tracing::warn!(product_id = %id, "rejected duplicate product id");
            return Err(DomainError::duplicate(id));
        }

        tracing::info!(product_id = %id, name = product.name(), "product added");
        self.products.push(product);
        Ok(())
    }

    /// Allocate the next id and add a product under it in one step.
    pub fn add_new(
        &mut self,
        name: impl Into<String>,
        quantity: i64,
        price: Money,
    ) -> DomainResult<Product> {
        let id = self.next_id()?;
        let product = Product::new(id.get(), name, quantity, price)?;
        self.add_product(product.clone())?;
        Ok(product)
    }

    /// Remove and return the product with `id`, keeping the order of the rest.
    pub fn remove_product(&mut self, id: ProductId) -> DomainResult<Product> {
        let Some(index) = self.position(id) else {
            tracing::warn!(product_id = %id, "remove: product not found");
            return Err(DomainError::not_found(id));
        };

        let removed = self.products.remove(index);
        tracing::info!(product_id = %id, "product removed");
        Ok(removed)
    }

    /// Set the stock level of the product with `id`.
    ///
    /// Negative quantities are rejected with `InvalidArgument` so the
    /// non-negative stock invariant holds after updates too.
    pub fn update_product(&mut self, id: ProductId, new_quantity: i64) -> DomainResult<()> {
        let Some(index) = self.position(id) else {
            tracing::warn!(product_id = %id, "update: product not found");
            return Err(DomainError::not_found(id));
        };

        if let Err(err) = self.products[index].set_quantity(new_quantity) {
            tracing::warn!(product_id = %id, quantity = new_quantity, "update: rejected quantity");
            return Err(err);
        }
        tracing::info!(product_id = %id, quantity = new_quantity, "stock updated");
        Ok(())
    }

    /// Owned snapshot of every product, in insertion order.
    ///
    /// Changing the returned values has no effect on the ledger.
    pub fn list_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Borrowed read-only view, for callers that do not need ownership.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.position(id).map(|i| self.products[i].clone())
    }

    /// Sum of `quantity * price` over all products; zero when empty.
    pub fn total_value(&self) -> Money {
        self.products.iter().map(Product::total_value).sum()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Id allocation policy: one past the largest tracked id, or 1 when empty.
    ///
    /// Allocation and insert must happen under the same exclusive access or
    /// two callers can pick the same id; `add_new` does both in one call.
    pub fn next_id(&self) -> DomainResult<ProductId> {
        match self.products.iter().map(Product::id).max() {
            None => Ok(ProductId::first()),
            Some(max) => max
                .next()
                .ok_or_else(|| DomainError::invalid("id", "product id space exhausted")),
        }
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: i64) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    fn product(raw: i64, name: &str, qty: i64, price: &str) -> Product {
        Product::new(raw, name, qty, price.parse().unwrap()).unwrap()
    }

    fn names(manager: &InventoryManager) -> Vec<String> {
        manager.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn empty_manager_has_zero_value() {
        let manager = InventoryManager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.total_value(), Money::zero());
        assert!(manager.list_products().is_empty());
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut manager = InventoryManager::new();
        manager.add_product(product(3, "C", 1, "1")).unwrap();
        manager.add_product(product(1, "A", 1, "1")).unwrap();
        manager.add_product(product(2, "B", 1, "1")).unwrap();
        assert_eq!(names(&manager), ["C", "A", "B"]);
    }

    #[test]
    fn duplicate_id_is_rejected_and_collection_unchanged() {
        let mut manager = InventoryManager::new();
        manager.add_product(product(1, "Pen", 10, "5")).unwrap();

        let err = manager.add_product(product(1, "Other", 2, "9")).unwrap_err();
        assert_eq!(err, DomainError::DuplicateKey(id(1)));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.get(id(1)).unwrap().name(), "Pen");
    }

    #[test]
    fn remove_missing_id_is_not_found() {
        let mut manager = InventoryManager::new();
        assert_eq!(manager.remove_product(id(1)).unwrap_err(), DomainError::NotFound(id(1)));

        manager.add_product(product(1, "Pen", 10, "5")).unwrap();
        assert_eq!(manager.remove_product(id(2)).unwrap_err(), DomainError::NotFound(id(2)));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut manager = InventoryManager::new();
        for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
            manager.add_product(product(i as i64 + 1, name, 1, "1")).unwrap();
        }
        let removed = manager.remove_product(id(2)).unwrap();
        assert_eq!(removed.name(), "B");
        assert_eq!(names(&manager), ["A", "C", "D"]);
    }

    #[test]
    fn update_changes_only_quantity() {
        let mut manager = InventoryManager::new();
        manager.add_product(product(1, "Pen", 10, "5")).unwrap();
        manager.update_product(id(1), 42).unwrap();

        let p = manager.get(id(1)).unwrap();
        assert_eq!(p.quantity_in_stock(), 42);
        assert_eq!(p.name(), "Pen");
        assert_eq!(p.price(), "5".parse::<Money>().unwrap());
        assert_eq!(p.id(), id(1));
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut manager = InventoryManager::new();
        assert_eq!(manager.update_product(id(9), 1).unwrap_err(), DomainError::NotFound(id(9)));
    }

    #[test]
    fn update_rejects_negative_quantity() {
        let mut manager = InventoryManager::new();
        manager.add_product(product(1, "Pen", 10, "5")).unwrap();

        let err = manager.update_product(id(1), -1).unwrap_err();
        assert_eq!(err.field(), Some("quantity"));
        assert_eq!(manager.get(id(1)).unwrap().quantity_in_stock(), 10);
    }

    #[test]
    fn snapshot_is_detached_from_the_ledger() {
        let mut manager = InventoryManager::new();
        manager.add_product(product(1, "Pen", 10, "5")).unwrap();

        let mut snapshot = manager.list_products();
        snapshot.clear();
        assert_eq!(manager.len(), 1);

        let before = manager.list_products();
        manager.update_product(id(1), 0).unwrap();
        assert_eq!(before[0].quantity_in_stock(), 10);
    }

    #[test]
    fn total_value_sums_line_values() {
        let mut manager = InventoryManager::new();
        manager.add_product(product(1, "X", 3, "10.00")).unwrap();
        assert_eq!(manager.total_value(), "30.00".parse::<Money>().unwrap());
        manager.add_product(product(2, "Y", 2, "0.25")).unwrap();
        assert_eq!(manager.total_value(), "30.50".parse::<Money>().unwrap());
    }

    #[test]
    fn next_id_is_one_past_the_max() {
        let mut manager = InventoryManager::new();
        assert_eq!(manager.next_id().unwrap(), id(1));

        manager.add_product(product(5, "A", 1, "1")).unwrap();
        manager.add_product(product(2, "B", 1, "1")).unwrap();
        assert_eq!(manager.next_id().unwrap(), id(6));

        manager.remove_product(id(5)).unwrap();
        assert_eq!(manager.next_id().unwrap(), id(3));
    }

    #[test]
    fn next_id_reports_exhaustion() {
        let mut manager = InventoryManager::new();
        manager.add_product(product(i64::MAX, "Last", 1, "1")).unwrap();
        assert_eq!(manager.next_id().unwrap_err().field(), Some("id"));
    }

    #[test]
    fn add_new_allocates_sequential_ids() {
        let mut manager = InventoryManager::new();
        let a = manager.add_new("A", 1, "1".parse().unwrap()).unwrap();
        let b = manager.add_new("B", 1, "1".parse().unwrap()).unwrap();
        assert_eq!((a.id(), b.id()), (id(1), id(2)));

        let err = manager.add_new("  ", 1, Money::zero()).unwrap_err();
        assert_eq!(err.field(), Some("name"));
        assert_eq!(manager.len(), 2);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(i64),
            Remove(i64),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![(1i64..20).prop_map(Op::Add), (1i64..20).prop_map(Op::Remove)]
        }

        proptest! {
            /// Property: the listing equals successful adds minus successful
            /// removes, in insertion order, with unique ids.
            #[test]
            fn listing_tracks_successful_operations(ops in prop::collection::vec(op(), 0..60)) {
                let mut manager = InventoryManager::new();
                let mut model: Vec<i64> = Vec::new();

                for op in ops {
                    match op {
                        Op::Add(raw) => {
                            let result = manager.add_product(product(raw, "P", 1, "1"));
                            if model.contains(&raw) {
                                prop_assert_eq!(result, Err(DomainError::DuplicateKey(id(raw))));
                            } else {
                                prop_assert!(result.is_ok());
                                model.push(raw);
                            }
                        }
                        Op::Remove(raw) => {
                            let result = manager.remove_product(id(raw));
                            match model.iter().position(|&m| m == raw) {
                                Some(i) => {
                                    prop_assert!(result.is_ok());
                                    model.remove(i);
                                }
                                None => prop_assert_eq!(result, Err(DomainError::NotFound(id(raw)))),
                            }
                        }
                    }
                }

                let listed: Vec<i64> = manager.list_products().iter().map(|p| p.id().get()).collect();
                prop_assert_eq!(listed, model);
            }
        }
    }
}
