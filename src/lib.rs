//! Playlist index cleanup library - shared modules for both binaries.

pub mod dedupe;
pub mod filter;
pub mod gaps;
pub mod io;
pub mod models;
pub mod progress;
pub mod safety;
pub mod seeds;
