//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the cache and the API client.
///
/// The cache itself only fails at construction; everything else comes from
/// the network and decoding layer.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache constructed with a zero TTL, or one too large to schedule
    #[error("Invalid TTL: cache TTL must be greater than zero and within the clock's range")]
    InvalidTtl,

    /// Cache constructed outside a Tokio runtime, so the reaper cannot be spawned
    #[error("No Tokio runtime: the cache reaper must be spawned from within a runtime")]
    NoRuntime,

    /// HTTP request could not be sent or its body could not be read
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status code
    #[error("response failed with status code: {status} and body: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, lossily decoded
        body: String,
    },

    /// Pokemon lookup returned 404
    #[error("Pokemon '{0}' not found")]
    PokemonNotFound(String),

    /// Response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Command was invoked without its required argument
    #[error("{0}")]
    MissingArgument(&'static str),

    /// Writing command output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
