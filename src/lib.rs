//! polarmap - Render a polar city survey into a 1-bit bitmap and C header
//! for microcontroller firmware

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod layers;
pub mod output;
pub mod raster;
