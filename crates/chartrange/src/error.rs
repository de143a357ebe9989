//! Input-boundary validation errors.
//!
//! The distance calculators never fail; degenerate values resolve to zero.
//! Everything that is rejected is rejected here, before a plan is evaluated.

/// Errors raised while validating planner inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// A plan needs at least one camera.
    NoCameras,
    /// A length or threshold that must be strictly positive.
    NonPositive { field: &'static str, value: f64 },
    /// A value that must be finite and >= 0.
    Negative { field: &'static str, value: f64 },
    /// Minimum chart fraction outside `[0, 1]`.
    FractionOutOfRange(f64),
    /// Zero horizontal or vertical pixel count.
    ZeroPixels { axis: &'static str },
    /// Diagonal field of view must stay below a straight angle.
    FovOutOfRange(f64),
    /// Invalid value attached to a named camera.
    Camera { camera: String, source: Box<InputError> },
    /// Session file carries a schema tag this version does not read.
    UnsupportedSchema { found: String, expected: &'static str },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCameras => write!(f, "at least one camera is required"),
            Self::NonPositive { field, value } => {
                write!(f, "{} must be finite and > 0 (got {})", field, value)
            }
            Self::Negative { field, value } => {
                write!(f, "{} must be finite and >= 0 (got {})", field, value)
            }
            Self::FractionOutOfRange(v) => {
                write!(f, "min_chart_fraction must be in [0, 1] (got {})", v)
            }
            Self::ZeroPixels { axis } => write!(f, "{} pixel count must be >= 1", axis),
            Self::FovOutOfRange(v) => {
                write!(f, "diagonal FOV must be in [0, 180) degrees (got {})", v)
            }
            Self::Camera { camera, source } => write!(f, "camera '{}': {}", camera, source),
            Self::UnsupportedSchema { found, expected } => write!(
                f,
                "unsupported session schema '{}' (expected '{}')",
                found, expected
            ),
        }
    }
}

impl std::error::Error for InputError {}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InputError::NonPositive { field, value })
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InputError::Negative { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_guard_rejects_zero_and_nan() {
        assert!(ensure_positive("wall_width_mm", 1.0).is_ok());
        assert!(ensure_positive("wall_width_mm", 0.0).is_err());
        assert!(ensure_positive("wall_width_mm", f64::NAN).is_err());
    }

    #[test]
    fn camera_error_message_names_the_camera() {
        let err = InputError::Camera {
            camera: "left".to_string(),
            source: Box::new(InputError::Negative {
                field: "focal_length_mm",
                value: -1.0,
            }),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("camera 'left'"));
        assert!(msg.contains("focal_length_mm"));
    }
}
