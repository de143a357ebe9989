//! High-level planning API.
//!
//! [`Planner`] holds the chart and room constraints shared by every camera
//! and evaluates camera specs against them. Create once, plan many camera sets.
//!
//! # Examples
//!
//! ```
//! use chartrange::{CameraSpec, ChartPreset, EnvironmentSpec, Planner};
//!
//! let planner = Planner::new(ChartPreset::A4.into(), EnvironmentSpec::default()).unwrap();
//! let report = planner.plan(&[CameraSpec::default()]).unwrap();
//! assert!(report.overlap.is_common());
//! ```

use serde::{Deserialize, Serialize};

use crate::camera::{CameraOptics, CameraSpec};
use crate::chart::ChartSpec;
use crate::distance::{self, CameraRange, DEFAULT_MIN_PIXELS_PER_CM};
use crate::environment::EnvironmentSpec;
use crate::error::{ensure_positive, InputError};
use crate::lens::LensDefinition;
use crate::overlap::Overlap;
use crate::sensor::SensorDefinition;

/// Tunables that are not part of the room or the chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlannerConfig {
    /// Minimum chart sampling density (pixels per cm) for the near bound.
    pub min_pixels_per_cm: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_pixels_per_cm: DEFAULT_MIN_PIXELS_PER_CM,
        }
    }
}

/// Evaluation of a single camera.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraReport {
    pub spec: CameraSpec,
    pub optics: CameraOptics,
    pub range: CameraRange,
}

impl CameraReport {
    /// The sensor quantity that was derived rather than entered.
    pub fn derived_sensor(&self) -> DerivedValue {
        match self.spec.sensor {
            SensorDefinition::WidthMm(_) => DerivedValue::PitchUm(self.optics.sensor.pitch_um),
            SensorDefinition::PitchUm(_) => DerivedValue::WidthMm(self.optics.sensor.width_mm),
        }
    }

    /// The lens quantity that was derived rather than entered.
    pub fn derived_lens(&self) -> DerivedValue {
        match self.spec.lens {
            LensDefinition::FocalLengthMm(_) => {
                DerivedValue::DiagonalFovDeg(self.optics.lens.diagonal_fov_deg)
            }
            LensDefinition::DiagonalFovDeg(_) => {
                DerivedValue::FocalLengthMm(self.optics.lens.focal_length_mm)
            }
        }
    }
}

/// A quantity computed from the user's chosen input mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DerivedValue {
    PitchUm(f64),
    WidthMm(f64),
    DiagonalFovDeg(f64),
    FocalLengthMm(f64),
}

/// Full result of one planning run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanReport {
    pub chart: ChartSpec,
    pub environment: EnvironmentSpec,
    pub config: PlannerConfig,
    /// Widest horizontal field allowed by chart and wall (mm).
    pub max_field_mm: f64,
    pub cameras: Vec<CameraReport>,
    pub overlap: Overlap,
}

impl PlanReport {
    /// Cameras whose own near bound lies beyond their far bound.
    pub fn infeasible_cameras(&self) -> impl Iterator<Item = &CameraReport> + '_ {
        self.cameras.iter().filter(|c| !c.range.is_feasible())
    }
}

/// Primary planning interface.
#[derive(Debug, Clone)]
pub struct Planner {
    chart: ChartSpec,
    environment: EnvironmentSpec,
    config: PlannerConfig,
}

impl Planner {
    /// Create a planner with the default resolution threshold.
    pub fn new(chart: ChartSpec, environment: EnvironmentSpec) -> Result<Self, InputError> {
        Self::with_config(chart, environment, PlannerConfig::default())
    }

    /// Create a planner with explicit tunables.
    pub fn with_config(
        chart: ChartSpec,
        environment: EnvironmentSpec,
        config: PlannerConfig,
    ) -> Result<Self, InputError> {
        chart.validate()?;
        environment.validate()?;
        ensure_positive("min_pixels_per_cm", config.min_pixels_per_cm)?;
        Ok(Self {
            chart,
            environment,
            config,
        })
    }

    pub fn chart(&self) -> &ChartSpec {
        &self.chart
    }

    pub fn environment(&self) -> &EnvironmentSpec {
        &self.environment
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Widest horizontal field (mm) the far bound is computed for.
    pub fn max_field_mm(&self) -> f64 {
        self.environment.max_field_mm(&self.chart)
    }

    /// Resolve optics and working range for one camera.
    ///
    /// The camera is assumed valid; see [`CameraSpec::validate`].
    pub fn evaluate_camera(&self, camera: &CameraSpec) -> CameraReport {
        let optics = camera.optics();
        let width = optics.sensor.width_mm;
        let focal = optics.lens.focal_length_mm;

        let range = CameraRange {
            name: camera.name.clone(),
            min_distance_mm: distance::min_distance_mm(
                width,
                camera.h_pixels,
                focal,
                self.config.min_pixels_per_cm,
            ),
            max_distance_mm: distance::max_distance_mm(
                width,
                focal,
                self.max_field_mm(),
                self.environment.max_room_distance_mm,
            ),
        };

        tracing::debug!(
            "{}: width={:.3}mm pitch={:.3}um diag={:.3}mm f={:.3}mm dfov={:.2}deg range=[{:.1}, {:.1}]mm",
            camera.name,
            optics.sensor.width_mm,
            optics.sensor.pitch_um,
            optics.sensor.diagonal_mm,
            optics.lens.focal_length_mm,
            optics.lens.diagonal_fov_deg,
            range.min_distance_mm,
            range.max_distance_mm,
        );
        if !range.is_feasible() {
            tracing::warn!(
                "{}: near bound {:.1}mm lies beyond far bound {:.1}mm",
                camera.name,
                range.min_distance_mm,
                range.max_distance_mm,
            );
        }

        CameraReport {
            spec: camera.clone(),
            optics,
            range,
        }
    }

    /// Validate `cameras` and evaluate them all, then intersect their ranges.
    pub fn plan(&self, cameras: &[CameraSpec]) -> Result<PlanReport, InputError> {
        if cameras.is_empty() {
            return Err(InputError::NoCameras);
        }
        for camera in cameras {
            camera.validate()?;
        }

        let reports: Vec<CameraReport> = cameras.iter().map(|c| self.evaluate_camera(c)).collect();
        let ranges: Vec<CameraRange> = reports.iter().map(|r| r.range.clone()).collect();
        let overlap = Overlap::reduce(&ranges).ok_or(InputError::NoCameras)?;

        match overlap {
            Overlap::Common { lower_mm, upper_mm } => tracing::info!(
                "{} cameras share [{:.1}, {:.1}] mm",
                reports.len(),
                lower_mm,
                upper_mm
            ),
            Overlap::Disjoint { lower_mm, upper_mm } => tracing::info!(
                "{} cameras have no common range (max near {:.1} mm > min far {:.1} mm)",
                reports.len(),
                lower_mm,
                upper_mm
            ),
        }

        Ok(PlanReport {
            chart: self.chart,
            environment: self.environment,
            config: self.config,
            max_field_mm: self.max_field_mm(),
            cameras: reports,
            overlap,
        })
    }
}
