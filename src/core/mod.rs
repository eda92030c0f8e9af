// fieldfilter - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library and tracing only.
// Must NOT touch the filesystem.

pub mod export;
pub mod filter;
pub mod grouping;
pub mod model;
