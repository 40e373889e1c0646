//! Errors that end up in the response envelope.

use thiserror::Error;

use query_engine_translation::translation;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Must provide query string.")]
    MissingQuery,
    #[error(transparent)]
    Translation(#[from] translation::error::Error),
}
