pub mod error;
pub mod fetch;
pub mod routes;
pub mod server;
pub mod state;
