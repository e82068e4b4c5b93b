//! Background Tasks Module
//!
//! Contains background tasks that run alongside the REPL.
//!
//! # Tasks
//! - Cache reaper: removes expired cache entries once per TTL

mod reaper;

pub(crate) use reaper::spawn_reaper;
pub use reaper::{ReaperExit, ReaperHandle};
