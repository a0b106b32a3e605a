//! Deterministic order dataset and the query engine over it

pub mod catalog;
pub mod generator;
pub mod store;

pub use generator::generate_orders;
pub use store::OrderStore;
