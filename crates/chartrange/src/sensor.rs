//! Sensor geometry: width <-> pixel pitch, height and diagonal.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, InputError};

/// How a sensor is specified: by physical width or by pixel pitch.
///
/// Serialized externally tagged, e.g. `{"width_mm": 7.696}` or `{"pitch_um": 2.0}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SensorDefinition {
    /// Active-area width in millimeters.
    WidthMm(f64),
    /// Pixel pitch in micrometers.
    PitchUm(f64),
}

impl SensorDefinition {
    /// Raw value regardless of mode.
    pub fn value(self) -> f64 {
        match self {
            Self::WidthMm(v) | Self::PitchUm(v) => v,
        }
    }

    pub(crate) fn validate(self) -> Result<(), InputError> {
        match self {
            Self::WidthMm(v) => ensure_non_negative("sensor width_mm", v),
            Self::PitchUm(v) => ensure_non_negative("sensor pitch_um", v),
        }
    }
}

/// Fully resolved sensor dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SensorGeometry {
    /// Active-area width (mm).
    pub width_mm: f64,
    /// Pixel pitch (µm).
    pub pitch_um: f64,
    /// Active-area height (mm).
    pub height_mm: f64,
    /// Active-area diagonal (mm).
    pub diagonal_mm: f64,
}

impl SensorGeometry {
    /// Fill in whichever of width/pitch is missing, then derive height and diagonal.
    ///
    /// Pixel counts are expected to be >= 1; a zero horizontal count yields a
    /// non-finite pitch rather than a panic.
    pub fn resolve(definition: SensorDefinition, h_pixels: u32, v_pixels: u32) -> Self {
        let (width_mm, pitch_um) = match definition {
            SensorDefinition::WidthMm(width_mm) => {
                (width_mm, pitch_from_width(width_mm, h_pixels))
            }
            SensorDefinition::PitchUm(pitch_um) => {
                (width_from_pitch(pitch_um, h_pixels), pitch_um)
            }
        };
        let height_mm = v_pixels as f64 * pitch_um / 1000.0;
        Self {
            width_mm,
            pitch_um,
            height_mm,
            diagonal_mm: width_mm.hypot(height_mm),
        }
    }
}

/// Pixel pitch (µm) of a sensor `width_mm` wide with `h_pixels` columns.
pub fn pitch_from_width(width_mm: f64, h_pixels: u32) -> f64 {
    width_mm / h_pixels as f64 * 1000.0
}

/// Sensor width (mm) for `h_pixels` columns at `pitch_um`.
pub fn width_from_pitch(pitch_um: f64, h_pixels: u32) -> f64 {
    h_pixels as f64 * pitch_um / 1000.0
}
