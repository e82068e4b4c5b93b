//! API Module
//!
//! HTTP client for the remote PokeAPI.
//!
//! # Endpoints
//! - `GET /location-area?offset=N&limit=M` - One page of location areas
//! - `GET /location-area/{name}` - Detail of a single location area

pub mod client;

pub use client::PokeApiClient;
