// fieldfilter - app/mod.rs
//
// Application layer: orchestrates one filter run over the filesystem.
// Dependencies: core, platform, util.

pub mod run;
