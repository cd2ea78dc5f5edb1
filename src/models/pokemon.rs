//! Pokemon DTOs
//!
//! Defines the structure of the Pokemon detail response.

use serde::Deserialize;

use super::NamedResource;

/// Details of a single Pokemon (`GET /pokemon/{name}/`).
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Experience gained for defeating it; higher means harder to catch.
    /// Some forms report `null`.
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

/// One base stat, e.g. `hp` or `speed`.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NamedResource,
}

/// A type slot, e.g. slot 1 `grass`.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
