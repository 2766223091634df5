//! API Module
//!
//! HTTP access to the PokeAPI, read through the response cache.
//!
//! # Resources
//! - `GET /location-area` - Paged listing of location areas
//! - `GET /location-area/{name}/` - A single location area
//! - `GET /pokemon/{name}/` - A single Pokemon

pub mod client;

pub use client::PokeApiClient;
