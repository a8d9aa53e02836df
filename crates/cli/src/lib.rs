//! Console front end for the inventory ledger.
//!
//! Everything here is replaceable: the domain crates never depend on it.

pub mod config;
pub mod console;
pub mod format;
pub mod seed;

pub use config::{Config, SeedSource};
pub use console::Console;
pub use format::CurrencyFormatter;
