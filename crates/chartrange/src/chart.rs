//! Test chart sizes.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, InputError};

/// Standard print sizes a chart is commonly produced at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChartPreset {
    /// 210 × 297 mm
    #[default]
    A4,
    /// 216 × 279 mm
    Letter,
    /// 216 × 356 mm
    Legal,
    /// 297 × 420 mm
    A3,
    /// 279 × 432 mm
    Ledger,
}

impl ChartPreset {
    pub const ALL: [ChartPreset; 5] = [
        ChartPreset::A4,
        ChartPreset::Letter,
        ChartPreset::Legal,
        ChartPreset::A3,
        ChartPreset::Ledger,
    ];

    /// `[width, height]` in millimeters. The chart is mounted with `width` horizontal.
    pub fn size_mm(self) -> [f64; 2] {
        match self {
            Self::A4 => [210.0, 297.0],
            Self::Letter => [216.0, 279.0],
            Self::Legal => [216.0, 356.0],
            Self::A3 => [297.0, 420.0],
            Self::Ledger => [279.0, 432.0],
        }
    }

    pub fn width_mm(self) -> f64 {
        self.size_mm()[0]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::A4 => "A4",
            Self::Letter => "Letter",
            Self::Legal => "Legal",
            Self::A3 => "A3",
            Self::Ledger => "Ledger",
        }
    }
}

impl std::fmt::Display for ChartPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [w, h] = self.size_mm();
        write!(f, "{} ({}×{} mm)", self.name(), w, h)
    }
}

/// Physical chart used to bound the far distance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChartSpec {
    /// Horizontal chart width (mm).
    pub width_mm: f64,
}

impl ChartSpec {
    /// Chart of arbitrary width.
    pub fn with_width_mm(width_mm: f64) -> Self {
        Self { width_mm }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        ensure_positive("chart width_mm", self.width_mm)
    }
}

impl From<ChartPreset> for ChartSpec {
    fn from(preset: ChartPreset) -> Self {
        Self {
            width_mm: preset.width_mm(),
        }
    }
}

impl Default for ChartSpec {
    fn default() -> Self {
        ChartPreset::default().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_widths() {
        let widths: Vec<f64> = ChartPreset::ALL.iter().map(|p| p.width_mm()).collect();
        assert_eq!(widths, vec![210.0, 216.0, 216.0, 297.0, 279.0]);
    }

    #[test]
    fn preset_label_mirrors_print_size() {
        assert_eq!(ChartPreset::Legal.to_string(), "Legal (216×356 mm)");
    }

    #[test]
    fn preset_parses_from_snake_case() {
        let p: ChartPreset = serde_json::from_str("\"ledger\"").unwrap();
        assert_eq!(p, ChartPreset::Ledger);
    }

    #[test]
    fn zero_width_chart_is_rejected() {
        assert!(ChartSpec::with_width_mm(0.0).validate().is_err());
        assert!(ChartSpec::default().validate().is_ok());
    }
}
