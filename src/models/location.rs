//! Location-area DTOs
//!
//! Defines the structure of the location-area list and detail responses.

use serde::Deserialize;

/// A named link to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the location-area listing (`GET /location-area/`).
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreasPage {
    /// Total number of areas across all pages
    pub count: u32,
    /// URL of the next page, absent on the last page
    pub next: Option<String>,
    /// URL of the previous page, absent on the first page
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Details of a single location area (`GET /location-area/{name}/`).
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    /// The location this area belongs to
    pub location: NamedResource,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A Pokemon that can be encountered in an area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}
