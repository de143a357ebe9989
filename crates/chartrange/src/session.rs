//! Session file: every input of a planning run in one JSON document.
//!
//! Session JSON follows a versioned schema (`chartrange.session.v1`). Room
//! dimensions are entered in centimeters, camera optics in mm / µm / degrees.
//! Unknown fields are rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::CameraSpec;
use crate::chart::{ChartPreset, ChartSpec};
use crate::distance::DEFAULT_MIN_PIXELS_PER_CM;
use crate::environment::EnvironmentSpec;
use crate::error::InputError;
use crate::planner::{PlanReport, Planner, PlannerConfig};

pub const SESSION_SCHEMA_V1: &str = "chartrange.session.v1";

const DEFAULT_CAMERA_COUNT: usize = 3;
const DEFAULT_WALL_WIDTH_CM: f64 = 300.0;
const DEFAULT_MAX_ROOM_DISTANCE_CM: f64 = 200.0;
const DEFAULT_MIN_CHART_FRACTION: f64 = 0.1;

/// All planner inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Session {
    pub schema: String,
    pub chart: ChartPreset,
    /// Overrides the preset width when set (mm).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_width_mm: Option<f64>,
    pub wall_width_cm: f64,
    pub max_room_distance_cm: f64,
    pub min_chart_fraction: f64,
    #[serde(default = "default_min_pixels_per_cm")]
    pub min_pixels_per_cm: f64,
    pub cameras: Vec<CameraSpec>,
}

fn default_min_pixels_per_cm() -> f64 {
    DEFAULT_MIN_PIXELS_PER_CM
}

impl Default for Session {
    fn default() -> Self {
        Self::with_cameras(DEFAULT_CAMERA_COUNT)
    }
}

impl Session {
    /// Default session with `n` default cameras.
    pub fn with_cameras(n: usize) -> Self {
        Self {
            schema: SESSION_SCHEMA_V1.to_string(),
            chart: ChartPreset::default(),
            chart_width_mm: None,
            wall_width_cm: DEFAULT_WALL_WIDTH_CM,
            max_room_distance_cm: DEFAULT_MAX_ROOM_DISTANCE_CM,
            min_chart_fraction: DEFAULT_MIN_CHART_FRACTION,
            min_pixels_per_cm: DEFAULT_MIN_PIXELS_PER_CM,
            cameras: (0..n).map(CameraSpec::numbered).collect(),
        }
    }

    /// Load a session from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)?;
        let session = Self::from_json_str(&data)?;
        tracing::debug!(
            "loaded session {} ({} cameras)",
            path.display(),
            session.cameras.len()
        );
        Ok(session)
    }

    /// Parse a session and check its schema tag.
    pub fn from_json_str(data: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let session: Session = serde_json::from_str(data)?;
        if session.schema != SESSION_SCHEMA_V1 {
            return Err(InputError::UnsupportedSchema {
                found: session.schema,
                expected: SESSION_SCHEMA_V1,
            }
            .into());
        }
        Ok(session)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn chart_spec(&self) -> ChartSpec {
        match self.chart_width_mm {
            Some(width_mm) => ChartSpec::with_width_mm(width_mm),
            None => self.chart.into(),
        }
    }

    pub fn environment(&self) -> EnvironmentSpec {
        EnvironmentSpec {
            wall_width_mm: self.wall_width_cm * 10.0,
            max_room_distance_mm: self.max_room_distance_cm * 10.0,
            min_chart_fraction: self.min_chart_fraction,
        }
    }

    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            min_pixels_per_cm: self.min_pixels_per_cm,
        }
    }

    pub fn planner(&self) -> Result<Planner, InputError> {
        Planner::with_config(self.chart_spec(), self.environment(), self.planner_config())
    }

    /// Build the planner and evaluate every camera in the session.
    pub fn plan(&self) -> Result<PlanReport, InputError> {
        self.planner()?.plan(&self.cameras)
    }
}
