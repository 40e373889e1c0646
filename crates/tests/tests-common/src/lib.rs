pub mod fixtures;
pub mod router;
pub mod upstream;
