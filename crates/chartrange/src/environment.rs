//! Room constraints shared by every camera in a plan.

use serde::{Deserialize, Serialize};

use crate::chart::ChartSpec;
use crate::error::{ensure_positive, InputError};

/// Wall and room limits plus the minimum share of the frame the chart must fill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentSpec {
    /// Usable wall width behind the chart (mm).
    pub wall_width_mm: f64,
    /// Farthest the camera can be placed from the wall (mm).
    pub max_room_distance_mm: f64,
    /// Minimum chart width as a fraction of the horizontal field, in `[0, 1]`.
    pub min_chart_fraction: f64,
}

impl Default for EnvironmentSpec {
    fn default() -> Self {
        Self {
            wall_width_mm: 3000.0,
            max_room_distance_mm: 2000.0,
            min_chart_fraction: 0.1,
        }
    }
}

impl EnvironmentSpec {
    pub fn validate(&self) -> Result<(), InputError> {
        ensure_positive("wall_width_mm", self.wall_width_mm)?;
        ensure_positive("max_room_distance_mm", self.max_room_distance_mm)?;
        if !(0.0..=1.0).contains(&self.min_chart_fraction) {
            return Err(InputError::FractionOutOfRange(self.min_chart_fraction));
        }
        Ok(())
    }

    /// Widest horizontal field (mm) that still satisfies both the chart
    /// fraction and the wall width.
    ///
    /// A zero fraction leaves only the wall as a limit.
    pub fn max_field_mm(&self, chart: &ChartSpec) -> f64 {
        let from_chart = if self.min_chart_fraction == 0.0 {
            f64::INFINITY
        } else {
            chart.width_mm / self.min_chart_fraction
        };
        self.wall_width_mm.min(from_chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartPreset;

    #[test]
    fn chart_fraction_binds_before_wall() {
        let env = EnvironmentSpec::default();
        let chart = ChartSpec::from(ChartPreset::A4);
        assert_eq!(env.max_field_mm(&chart), 2100.0);
    }

    #[test]
    fn zero_fraction_defers_to_wall() {
        let env = EnvironmentSpec {
            min_chart_fraction: 0.0,
            ..Default::default()
        };
        assert_eq!(env.max_field_mm(&ChartSpec::default()), 3000.0);
    }

    #[test]
    fn fraction_outside_unit_interval_is_rejected() {
        let env = EnvironmentSpec {
            min_chart_fraction: 1.5,
            ..Default::default()
        };
        assert_eq!(env.validate(), Err(InputError::FractionOutOfRange(1.5)));
    }

    #[test]
    fn non_positive_room_is_rejected() {
        let env = EnvironmentSpec {
            max_room_distance_mm: 0.0,
            ..Default::default()
        };
        assert!(env.validate().is_err());
    }
}
