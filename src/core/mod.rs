//! Core watermarking building blocks: parameters, placement geometry, color
//! selection, font resolution and the single-image renderer. The high-level
//! `api` module drives these for single files and whole directories.
pub mod color;
pub mod font;
pub mod glyphs;
pub mod params;
pub mod placement;
pub mod render;
