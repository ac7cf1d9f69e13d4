/// State carried through a conversion run
///
/// This module holds:
/// - The immutable conversion settings (config.rs)
/// - Per-file and per-run data structures (data.rs)

pub mod config;
pub mod data;
