//! PokeAPI response models
//!
//! Serde types for the JSON bodies returned by the location-area endpoints.
//! Only the fields the REPL prints are modelled; unknown fields are ignored.

pub mod location;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
