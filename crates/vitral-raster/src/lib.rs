//! CPU rasterization of gradient paints.
//!
//! This crate owns the paint model, the gradient shader compiler, and the
//! per-pixel pipeline executor used by higher layers.
//!
//! Flow: a [`paint::Paint`] descriptor is compiled once ([`shader::compile`])
//! into an immutable stage sequence plus color ramp, which the executor
//! ([`raster`]) then evaluates for every pixel.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod persist;
pub mod raster;
pub mod shader;
