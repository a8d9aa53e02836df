//! Thread-safe handle over an [`InventoryManager`].

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockbook_core::{DomainResult, Money, ProductId};

use crate::manager::InventoryManager;
use crate::product::Product;

/// Cloneable, lock-guarded inventory.
///
/// One `RwLock` guards the whole collection. Every manager operation runs
/// under it, so reads never observe a half-applied write. Use
/// [`SharedInventory::add_new`] rather than `next_id` + `add_product` when
/// several threads add products.
#[derive(Debug, Clone, Default)]
pub struct SharedInventory {
    inner: Arc<RwLock<InventoryManager>>,
}

impl SharedInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_manager(manager: InventoryManager) -> Self {
        Self {
            inner: Arc::new(RwLock::new(manager)),
        }
    }

    // Operations either complete or leave the collection untouched, so a
    // guard poisoned by a panicking reader/writer still holds valid state.
    fn read(&self) -> RwLockReadGuard<'_, InventoryManager> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, InventoryManager> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_product(&self, product: Product) -> DomainResult<()> {
        self.write().add_product(product)
    }

    /// Id allocation and insert under a single write guard.
    pub fn add_new(&self, name: impl Into<String>, quantity: i64, price: Money) -> DomainResult<Product> {
        self.write().add_new(name, quantity, price)
    }

    pub fn remove_product(&self, id: ProductId) -> DomainResult<Product> {
        self.write().remove_product(id)
    }

    pub fn update_product(&self, id: ProductId, new_quantity: i64) -> DomainResult<()> {
        self.write().update_product(id, new_quantity)
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.read().list_products()
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.read().get(id)
    }

    pub fn total_value(&self) -> Money {
        self.read().total_value()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Listing and total taken under the same read guard.
    pub fn snapshot(&self) -> (Vec<Product>, Money) {
        let manager = self.read();
        (manager.list_products(), manager.total_value())
    }
}
