//! Per-pixel pipeline executor.
//!
//! Responsibilities:
//! - run stage sequences produced by `shader` synthesis over pixel spans
//! - own the transient per-span validity mask
//! - provide the CPU pixel buffer ([`Pixmap`])
//!
//! This module is a generic stage-sequencing engine: it knows how to evaluate
//! every [`Stage`] kind but nothing about how shaders choose between them.

mod compiled;
mod pipeline;
mod pixmap;
mod stage;

pub use compiled::CompiledPaint;
pub use pipeline::Pipeline;
pub use pixmap::Pixmap;
pub use stage::{ConicalCoeffs, PostStage, Root, Stage};
