//! Metadata information regarding the stored time series and the queryable schema.

pub mod resolver;
pub mod schema;
pub mod store;

// re-export without modules
pub use schema::*;
pub use store::*;
