//! Near/far working-distance formulas.
//!
//! Both bounds use the same magnification approximation
//! `d = f / m + f`, where `m` is sensor width over the imaged horizontal field.
//! It is not a thick-lens model; results are approximate.

use serde::{Deserialize, Serialize};

/// Resolution floor at which a chart is imaged without sensor falloff (pixels per cm).
pub const DEFAULT_MIN_PIXELS_PER_CM: f64 = 55.0;

/// Object distance for a given magnification. Zero magnification yields 0.
pub fn distance_for_magnification(focal_length_mm: f64, magnification: f64) -> f64 {
    if magnification == 0.0 {
        return 0.0;
    }
    focal_length_mm / magnification + focal_length_mm
}

/// Magnification when `sensor_width_mm` images a field `field_mm` wide.
///
/// Zero or unbounded fields yield 0.
pub fn magnification(sensor_width_mm: f64, field_mm: f64) -> f64 {
    if field_mm == 0.0 || field_mm.is_infinite() {
        return 0.0;
    }
    sensor_width_mm / field_mm
}

/// Horizontal field (mm) over which `h_pixels` sample exactly `min_pixels_per_cm`.
pub fn min_field_mm(h_pixels: u32, min_pixels_per_cm: f64) -> f64 {
    h_pixels as f64 / min_pixels_per_cm * 10.0
}

/// Closest distance (mm) at which the resolution requirement still holds.
pub fn min_distance_mm(
    sensor_width_mm: f64,
    h_pixels: u32,
    focal_length_mm: f64,
    min_pixels_per_cm: f64,
) -> f64 {
    let m = magnification(sensor_width_mm, min_field_mm(h_pixels, min_pixels_per_cm));
    distance_for_magnification(focal_length_mm, m)
}

/// Farthest distance (mm) at which the field stays within `max_field_mm`,
/// capped at `max_room_distance_mm`.
pub fn max_distance_mm(
    sensor_width_mm: f64,
    focal_length_mm: f64,
    max_field_mm: f64,
    max_room_distance_mm: f64,
) -> f64 {
    let m = magnification(sensor_width_mm, max_field_mm);
    distance_for_magnification(focal_length_mm, m).min(max_room_distance_mm)
}

/// Usable working-distance interval for one camera.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraRange {
    pub name: String,
    /// Near bound (mm).
    pub min_distance_mm: f64,
    /// Far bound (mm).
    pub max_distance_mm: f64,
}

impl CameraRange {
    /// `true` when the camera alone admits at least one working distance.
    pub fn is_feasible(&self) -> bool {
        self.min_distance_mm <= self.max_distance_mm
    }

    pub fn min_distance_cm(&self) -> f64 {
        self.min_distance_mm / 10.0
    }

    pub fn max_distance_cm(&self) -> f64 {
        self.max_distance_mm / 10.0
    }
}
