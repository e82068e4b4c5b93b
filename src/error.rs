//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror. The cache itself is
//! infallible; these errors come from the network client, pagination and
//! command dispatch.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Request failed, returned a non-success status, or had an undecodable body
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// `map` was used after the last page
    #[error("no more pages, you're on the last page")]
    NoNextPage,

    /// `mapb` was used before moving past the first page
    #[error("no previous page, you're on the first page")]
    NoPreviousPage,

    /// A command was run without its required argument
    #[error("missing argument, usage: {0}")]
    MissingArgument(&'static str),

    /// Input did not match any known command
    #[error("{0}: command not recognized")]
    UnknownCommand(String),

    /// Reading input or writing output failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
