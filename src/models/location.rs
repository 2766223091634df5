//! Location area records
//!
//! Shapes of `GET /location-area` (paged listing) and `GET /location-area/{name}/`.

use serde::{Deserialize, Serialize};

use super::NamedApiResource;

/// One page of the location area listing.
///
/// `next` and `previous` are full URLs, `None` at either end of the listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAreaPage {
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedApiResource>,
}

/// A single location area with the Pokemon that can be encountered there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedApiResource,
}
