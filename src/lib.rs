//! Pokedex - browse Pokemon world location areas from the terminal
//!
//! Pages fetched from PokeAPI are kept in an expiring in-memory cache, so
//! paging back and forth does not refetch what was just seen.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod pager;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use pager::Pager;
pub use repl::Repl;
pub use tasks::{ReaperExit, ReaperHandle};
