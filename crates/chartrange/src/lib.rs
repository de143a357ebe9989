//! chartrange — working-distance planning for multi-camera chart testing.
//!
//! For each camera the planner derives the missing sensor/lens quantities
//! and a usable distance range from the test chart:
//!
//! 1. **Sensor** – width ↔ pixel pitch, then height and diagonal.
//! 2. **Lens** – focal length ↔ diagonal field of view.
//! 3. **Near bound** – closest distance at which the chart is still sampled at
//!    the minimum pixel density.
//! 4. **Far bound** – farthest distance at which the chart keeps its minimum
//!    share of the horizontal field, limited by wall width and room depth.
//!
//! The per-camera ranges are then intersected to find a distance at which
//! every camera can be tested from one chart position.
//!
//! # Public API
//! - [`Planner`] as the primary entry point
//! - [`Session`] for file-based configuration
//! - geometry helpers and result structures

mod camera;
mod chart;
mod distance;
mod environment;
mod error;
mod lens;
mod overlap;
mod planner;
mod report;
mod sensor;
mod session;

pub use camera::{CameraOptics, CameraSpec};
pub use chart::{ChartPreset, ChartSpec};
pub use distance::{
    distance_for_magnification, magnification, max_distance_mm, min_distance_mm, min_field_mm,
    CameraRange, DEFAULT_MIN_PIXELS_PER_CM,
};
pub use environment::EnvironmentSpec;
pub use error::InputError;
pub use lens::{dfov_from_focal_length, focal_length_from_dfov, LensDefinition, LensGeometry};
pub use overlap::Overlap;
pub use planner::{CameraReport, DerivedValue, PlanReport, Planner, PlannerConfig};
pub use report::{APPROXIMATION_NOTE, CHART_QUALITY_NOTE};
pub use sensor::{pitch_from_width, width_from_pitch, SensorDefinition, SensorGeometry};
pub use session::{Session, SESSION_SCHEMA_V1};
