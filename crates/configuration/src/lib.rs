pub mod configuration;
pub mod error;
pub mod options;

pub use configuration::{make_runtime_configuration, Configuration};
pub use error::ConfigurationError;
pub use options::ServerOptions;
