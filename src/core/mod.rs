//! Core types: orders, queries, errors and the seeded random stream

pub mod error;
pub mod order;
pub mod query;
pub mod rng;

pub use error::{ConfigError, ErrorResponse};
pub use order::{Order, OrderStatus, SortDir, SortKey, StatusFilter};
pub use query::{OrdersPage, OrdersQuery, RawOrdersQuery};
pub use rng::SeededRng;
