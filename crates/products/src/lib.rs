//! Products domain module (in-memory catalog).
//!
//! This crate contains the product record, the store that owns the catalog and
//! the verb handler that classifies store results. No HTTP, no IO.

pub mod handler;
pub mod product;
pub mod seed;
pub mod store;

pub use handler::{Outcome, ProductHandler};
pub use product::Product;
pub use showroom_core::ProductId;
pub use store::{DuplicateIdPolicy, InMemoryProductStore, ProductStore};
