//! Plain-text rendering of a [`PlanReport`].

use std::fmt;

use crate::overlap::Overlap;
use crate::planner::{CameraReport, DerivedValue, PlanReport};

/// Printing-quality advisory shown ahead of the results.
pub const CHART_QUALITY_NOTE: &str = "Follow distance/field width guidelines for inkjet charts. \
You may move closer with higher-quality photographic or chrome-on-glass charts, \
but for office (not recommended) or low-quality prints, keep the camera as far as possible.";

/// Reminder that distances come from a magnification approximation.
pub const APPROXIMATION_NOTE: &str =
    "Distances use a simplified magnification formula; treat results as approximate.";

impl fmt::Display for DerivedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::PitchUm(v) => write!(f, "pixel size: {:.2} µm", v),
            Self::WidthMm(v) => write!(f, "sensor width: {:.2} mm", v),
            Self::DiagonalFovDeg(v) => write!(f, "diagonal FOV: {:.1}°", v),
            Self::FocalLengthMm(v) => write!(f, "focal length: {:.2} mm", v),
        }
    }
}

impl fmt::Display for CameraReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.spec.name)?;
        writeln!(f, "  → {}", self.derived_sensor())?;
        writeln!(f, "  → {}", self.derived_lens())?;
        write!(
            f,
            "  {:.1} cm to {:.1} cm",
            self.range.min_distance_cm(),
            self.range.max_distance_cm()
        )?;
        if !self.range.is_feasible() {
            write!(f, "  (near bound exceeds far bound)")?;
        }
        Ok(())
    }
}

impl fmt::Display for Overlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Common { lower_mm, upper_mm } => write!(
                f,
                "Common distance range: {:.1} cm to {:.1} cm",
                lower_mm / 10.0,
                upper_mm / 10.0
            ),
            Self::Disjoint { .. } => write!(
                f,
                "No overlapping range found. Adjust specs or environment."
            ),
        }
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Note: {}", CHART_QUALITY_NOTE)?;
        writeln!(f)?;
        writeln!(
            f,
            "Chart width {:.1} cm, max field {:.1} cm, room limit {:.1} cm",
            self.chart.width_mm / 10.0,
            self.max_field_mm / 10.0,
            self.environment.max_room_distance_mm / 10.0
        )?;
        writeln!(f)?;
        for camera in &self.cameras {
            writeln!(f, "{}", camera)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.overlap)?;
        write!(f, "{}", APPROXIMATION_NOTE)
    }
}

#[cfg(test)]
mod tests {
    use crate::camera::CameraSpec;
    use crate::chart::ChartPreset;
    use crate::environment::EnvironmentSpec;
    use crate::lens::LensDefinition;
    use crate::planner::Planner;
    use crate::sensor::SensorDefinition;

    fn planner() -> Planner {
        Planner::new(ChartPreset::A4.into(), EnvironmentSpec::default()).unwrap()
    }

    #[test]
    fn camera_block_shows_derived_values_and_range_in_cm() {
        let text = planner().evaluate_camera(&CameraSpec::default()).to_string();
        assert_eq!(
            text,
            "Camera 1\n  → pixel size: 2.00 µm\n  → diagonal FOV: 111.6°\n  27.6 cm to 82.2 cm"
        );
    }

    #[test]
    fn pitch_and_fov_inputs_show_width_and_focal_length() {
        let cam = CameraSpec {
            sensor: SensorDefinition::PitchUm(2.0),
            lens: LensDefinition::DiagonalFovDeg(72.0),
            ..Default::default()
        };
        let text = planner().evaluate_camera(&cam).to_string();
        assert!(text.contains("sensor width: 7.70 mm"));
        assert!(text.contains("focal length: 6.07 mm"));
    }

    #[test]
    fn report_states_common_range() {
        let report = planner().plan(&[CameraSpec::default()]).unwrap();
        let text = report.to_string();
        assert!(text.contains("Common distance range: 27.6 cm to 82.2 cm"));
        assert!(text.ends_with(super::APPROXIMATION_NOTE));
    }

    #[test]
    fn report_states_missing_overlap() {
        let cams = [
            CameraSpec::default(),
            CameraSpec {
                lens: LensDefinition::FocalLengthMm(14.0),
                ..Default::default()
            },
        ];
        let text = planner().plan(&cams).unwrap().to_string();
        assert!(text.contains("No overlapping range found"));
    }
}
