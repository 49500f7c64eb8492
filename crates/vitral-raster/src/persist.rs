//! Stable serialization records for gradient descriptors.
//!
//! The records are encoding-agnostic serde types; callers pick the concrete
//! format (the demo and tests use JSON). Contract: the two centers and two
//! radii round-trip exactly. The records store raw `f32` components and
//! never rewrite them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coords::Vec2;
use crate::paint::{Color, ColorStop, TwoPointConicalGradient};

/// Current record format version.
pub const FORMAT_VERSION: u32 = 2;

// First version whose writers never emit the `flipped` flag. Version 1
// stored some gradients with the circle pairs swapped and the ramp reversed;
// decoding undoes that.
const FORMAT_VERSION_NO_FLIP: u32 = 2;

/// A persisted color stop: position plus premultiplied linear RGBA.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRecord {
    pub t: f32,
    pub rgba: [f32; 4],
}

/// A persisted two-point conical gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientRecord {
    pub version: u32,
    pub start_center: [f32; 2],
    pub start_radius: f32,
    pub end_center: [f32; 2],
    pub end_radius: f32,
    pub stops: Vec<StopRecord>,
    /// Legacy (version 1 only): the stored pairs are swapped and the stops
    /// reversed relative to the real gradient.
    #[serde(default, skip_serializing_if = "is_false")]
    pub flipped: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Why a record could not be decoded.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum PersistError {
    #[error("unsupported gradient record version {0}")]
    UnsupportedVersion(u32),
}

/// Encodes a descriptor at the current format version.
pub fn encode(gradient: &TwoPointConicalGradient) -> GradientRecord {
    GradientRecord {
        version: FORMAT_VERSION,
        start_center: [gradient.start_center.x, gradient.start_center.y],
        start_radius: gradient.start_radius,
        end_center: [gradient.end_center.x, gradient.end_center.y],
        end_radius: gradient.end_radius,
        stops: gradient
            .stops
            .iter()
            .map(|s| StopRecord {
                t: s.t,
                rgba: [s.color.r, s.color.g, s.color.b, s.color.a],
            })
            .collect(),
        flipped: false,
    }
}

/// Decodes a record back into a descriptor, applying the legacy un-flip.
///
/// The result has not been validated; it goes through normal construction
/// (and its rejection rules) like any other descriptor.
pub fn decode(record: GradientRecord) -> Result<TwoPointConicalGradient, PersistError> {
    if record.version == 0 || record.version > FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion(record.version));
    }

    let mut record = record;
    if record.version < FORMAT_VERSION_NO_FLIP && record.flipped {
        std::mem::swap(&mut record.start_center, &mut record.end_center);
        std::mem::swap(&mut record.start_radius, &mut record.end_radius);
        record.stops.reverse();
        for stop in &mut record.stops {
            stop.t = 1.0 - stop.t;
        }
    }

    Ok(TwoPointConicalGradient {
        start_center: Vec2::new(record.start_center[0], record.start_center[1]),
        start_radius: record.start_radius,
        end_center: Vec2::new(record.end_center[0], record.end_center[1]),
        end_radius: record.end_radius,
        stops: record
            .stops
            .iter()
            .map(|s| ColorStop::new(s.t, Color::from_premul(s.rgba[0], s.rgba[1], s.rgba[2], s.rgba[3])))
            .collect(),
    })
}
