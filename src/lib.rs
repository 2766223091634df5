//! Pokedex - A command-line Pokedex backed by the PokeAPI
//!
//! Responses are kept in an in-memory TTL cache so that paging back and forth
//! or re-exploring an area does not hit the network again.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
mod tasks;

pub use api::PokeApiClient;
pub use cache::TtlCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::{Flow, Session, PROMPT};
