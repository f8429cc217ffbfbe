/// State management module
///
/// This module handles all application state, including:
/// - The cat record and partial updates (data.rs)
/// - The in-memory catalog store (store.rs)
/// - Loading the startup catalog (catalog.rs)
/// - Error types (error.rs)

pub mod catalog;
pub mod data;
pub mod error;
pub mod store;

pub use data::{Cat, CatUpdate};
pub use error::StoreError;
pub use store::Store;
