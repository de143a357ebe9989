//! Lens geometry: focal length <-> diagonal field of view.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, InputError};

/// How a lens is specified: by focal length or by diagonal field of view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LensDefinition {
    /// Focal length in millimeters.
    FocalLengthMm(f64),
    /// Diagonal field of view in degrees.
    DiagonalFovDeg(f64),
}

impl LensDefinition {
    /// Raw value regardless of mode.
    pub fn value(self) -> f64 {
        match self {
            Self::FocalLengthMm(v) | Self::DiagonalFovDeg(v) => v,
        }
    }

    pub(crate) fn validate(self) -> Result<(), InputError> {
        match self {
            Self::FocalLengthMm(v) => ensure_non_negative("focal_length_mm", v),
            Self::DiagonalFovDeg(v) => {
                if v.is_finite() && (0.0..180.0).contains(&v) {
                    Ok(())
                } else {
                    Err(InputError::FovOutOfRange(v))
                }
            }
        }
    }
}

/// Resolved lens parameters for a particular sensor diagonal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LensGeometry {
    /// Focal length (mm).
    pub focal_length_mm: f64,
    /// Diagonal field of view (degrees).
    pub diagonal_fov_deg: f64,
}

impl LensGeometry {
    /// Derive whichever of focal length / dFOV is missing.
    pub fn resolve(definition: LensDefinition, diagonal_mm: f64) -> Self {
        match definition {
            LensDefinition::FocalLengthMm(focal_length_mm) => Self {
                focal_length_mm,
                diagonal_fov_deg: dfov_from_focal_length(diagonal_mm, focal_length_mm),
            },
            LensDefinition::DiagonalFovDeg(diagonal_fov_deg) => Self {
                focal_length_mm: focal_length_from_dfov(diagonal_mm, diagonal_fov_deg),
                diagonal_fov_deg,
            },
        }
    }
}

/// Diagonal field of view (degrees) subtended by `diagonal_mm` at `focal_length_mm`.
///
/// Returns 0 for a zero or undefined focal length.
pub fn dfov_from_focal_length(diagonal_mm: f64, focal_length_mm: f64) -> f64 {
    if focal_length_mm == 0.0 || focal_length_mm.is_nan() {
        return 0.0;
    }
    (2.0 * ((diagonal_mm / 2.0) / focal_length_mm).atan()).to_degrees()
}

/// Focal length (mm) that maps `diagonal_mm` onto `dfov_deg`.
///
/// Returns 0 for a zero or undefined angle.
pub fn focal_length_from_dfov(diagonal_mm: f64, dfov_deg: f64) -> f64 {
    if dfov_deg == 0.0 || dfov_deg.is_nan() {
        return 0.0;
    }
    (diagonal_mm / 2.0) / (dfov_deg / 2.0).to_radians().tan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn dfov_matches_closed_form() {
        let dfov = dfov_from_focal_length(8.72, 3.0);
        let expected = (2.0 * (4.36f64 / 3.0).atan()).to_degrees();
        assert_relative_eq!(dfov, expected, epsilon = 1e-12);
        assert_relative_eq!(dfov, 110.938, epsilon = 1e-3);
    }

    #[test]
    fn focal_dfov_round_trip() {
        let diag = 8.825577374880353;
        for &f in &[1.8, 3.0, 6.0, 25.0] {
            let dfov = dfov_from_focal_length(diag, f);
            assert_relative_eq!(focal_length_from_dfov(diag, dfov), f, max_relative = 1e-12);
        }
    }

    #[test]
    fn degenerate_inputs_resolve_to_zero() {
        assert_eq!(dfov_from_focal_length(8.0, 0.0), 0.0);
        assert_eq!(dfov_from_focal_length(8.0, f64::NAN), 0.0);
        assert_eq!(focal_length_from_dfov(8.0, 0.0), 0.0);
    }

    #[test]
    fn resolve_keeps_the_given_value() {
        let g = LensGeometry::resolve(LensDefinition::DiagonalFovDeg(72.0), 8.825577374880353);
        assert_eq!(g.diagonal_fov_deg, 72.0);
        assert_relative_eq!(g.focal_length_mm, 6.073682568252379, epsilon = 1e-9);
    }

    #[test]
    fn straight_angle_is_rejected() {
        assert!(LensDefinition::DiagonalFovDeg(180.0).validate().is_err());
        assert!(LensDefinition::DiagonalFovDeg(179.9).validate().is_ok());
        assert!(LensDefinition::FocalLengthMm(-0.5).validate().is_err());
    }
}
