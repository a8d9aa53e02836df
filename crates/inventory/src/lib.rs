//! Inventory domain module.
//!
//! This crate contains the business rules for the product ledger, implemented
//! purely as in-memory domain logic (no IO, no prompts, no storage).

pub mod catalog;
pub mod manager;
pub mod product;
pub mod shared;

pub use manager::InventoryManager;
pub use product::Product;
pub use shared::SharedInventory;
