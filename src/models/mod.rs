//! Response models for the remote API
//!
//! Only the fields the client reads are modelled; unknown fields are ignored
//! when decoding.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreasPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
