//! Per-camera specification and its resolved optics.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::lens::{LensDefinition, LensGeometry};
use crate::sensor::{SensorDefinition, SensorGeometry};

const DEFAULT_H_PIXELS: u32 = 3848;
const DEFAULT_V_PIXELS: u32 = 2160;
const DEFAULT_SENSOR_WIDTH_MM: f64 = 7.696;
const DEFAULT_FOCAL_LENGTH_MM: f64 = 3.0;

/// One camera under test, as entered by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CameraSpec {
    /// Display name. Duplicates are allowed.
    pub name: String,
    pub h_pixels: u32,
    pub v_pixels: u32,
    pub sensor: SensorDefinition,
    pub lens: LensDefinition,
}

impl CameraSpec {
    /// Default UHD camera labelled `Camera {index + 1}`.
    pub fn numbered(index: usize) -> Self {
        Self {
            name: format!("Camera {}", index + 1),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        self.validate_fields().map_err(|e| InputError::Camera {
            camera: self.name.clone(),
            source: Box::new(e),
        })
    }

    fn validate_fields(&self) -> Result<(), InputError> {
        if self.h_pixels == 0 {
            return Err(InputError::ZeroPixels { axis: "horizontal" });
        }
        if self.v_pixels == 0 {
            return Err(InputError::ZeroPixels { axis: "vertical" });
        }
        self.sensor.validate()?;
        self.lens.validate()
    }

    /// Resolve sensor and lens geometry.
    pub fn optics(&self) -> CameraOptics {
        let sensor = SensorGeometry::resolve(self.sensor, self.h_pixels, self.v_pixels);
        let lens = LensGeometry::resolve(self.lens, sensor.diagonal_mm);
        CameraOptics { sensor, lens }
    }
}

impl Default for CameraSpec {
    fn default() -> Self {
        Self {
            name: "Camera 1".to_string(),
            h_pixels: DEFAULT_H_PIXELS,
            v_pixels: DEFAULT_V_PIXELS,
            sensor: SensorDefinition::WidthMm(DEFAULT_SENSOR_WIDTH_MM),
            lens: LensDefinition::FocalLengthMm(DEFAULT_FOCAL_LENGTH_MM),
        }
    }
}

/// Sensor and lens geometry with both representations filled in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CameraOptics {
    pub sensor: SensorGeometry,
    pub lens: LensGeometry,
}
