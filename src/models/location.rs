//! Location area models
//!
//! Defines the paginated listing and the per-area detail bodies.

use serde::Deserialize;

/// A `{ name, url }` reference to another PokeAPI resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. `canalave-city-area`
    pub name: String,
    /// Absolute URL of the resource
    pub url: String,
}

/// One page of `GET /location-area`.
///
/// This is the payload cached under the page's URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas across all pages
    pub count: u32,
    /// URL of the following page, absent on the last page
    pub next: Option<String>,
    /// URL of the preceding page, absent on the first page
    pub previous: Option<String>,
    /// Location areas on this page
    pub results: Vec<NamedResource>,
}

impl LocationAreaPage {
    /// Names of the location areas on this page, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.name.as_str())
    }
}

/// Body of `GET /location-area/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationArea {
    /// Numeric area id
    pub id: u32,
    /// Area name
    pub name: String,
    /// Pokemon that can be encountered here
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A Pokemon encounter entry inside a [`LocationArea`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonEncounter {
    /// The Pokemon that can be met
    pub pokemon: NamedResource,
}

impl LocationArea {
    /// Names of the Pokemon found in this area, in listing order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|e| e.pokemon.name.as_str())
    }
}
