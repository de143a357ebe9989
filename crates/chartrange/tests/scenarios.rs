//! End-to-end planning scenarios through the public API.

use approx::assert_relative_eq;
use chartrange::{
    CameraSpec, ChartPreset, EnvironmentSpec, LensDefinition, Overlap, Planner, SensorDefinition,
    SensorGeometry, Session,
};

fn camera(name: &str, sensor: SensorDefinition, lens: LensDefinition) -> CameraSpec {
    CameraSpec {
        name: name.to_string(),
        h_pixels: 3848,
        v_pixels: 2160,
        sensor,
        lens,
    }
}

#[test]
fn uhd_sensor_geometry() {
    let s = SensorGeometry::resolve(SensorDefinition::WidthMm(7.696), 3848, 2160);
    assert_relative_eq!(s.pitch_um, 2.0, epsilon = 1e-9);
    assert_relative_eq!(s.height_mm, 4.32, epsilon = 1e-9);
    assert_relative_eq!(s.diagonal_mm, 7.696f64.hypot(4.32), epsilon = 1e-12);
}

#[test]
fn mixed_input_modes_agree_on_range() {
    let planner = Planner::new(ChartPreset::A4.into(), EnvironmentSpec::default()).unwrap();
    let by_width = planner.evaluate_camera(&camera(
        "w",
        SensorDefinition::WidthMm(7.696),
        LensDefinition::FocalLengthMm(3.0),
    ));
    let dfov = by_width.optics.lens.diagonal_fov_deg;
    let by_pitch = planner.evaluate_camera(&camera(
        "p",
        SensorDefinition::PitchUm(2.0),
        LensDefinition::DiagonalFovDeg(dfov),
    ));
    assert_relative_eq!(
        by_width.range.min_distance_mm,
        by_pitch.range.min_distance_mm,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        by_width.range.max_distance_mm,
        by_pitch.range.max_distance_mm,
        max_relative = 1e-9
    );
}

#[test]
fn three_cameras_without_common_range() {
    let planner = Planner::new(ChartPreset::A4.into(), EnvironmentSpec::default()).unwrap();
    let cams: Vec<CameraSpec> = [3.0, 8.0, 14.0]
        .iter()
        .enumerate()
        .map(|(i, &f)| CameraSpec {
            lens: LensDefinition::FocalLengthMm(f),
            ..CameraSpec::numbered(i)
        })
        .collect();
    let report = planner.plan(&cams).unwrap();

    let r: Vec<_> = report.cameras.iter().map(|c| &c.range).collect();
    // a∩b and b∩c are non-empty, a∩c is empty.
    assert!(r[1].min_distance_mm < r[0].max_distance_mm);
    assert!(r[2].min_distance_mm < r[1].max_distance_mm);
    assert!(r[2].min_distance_mm > r[0].max_distance_mm);

    match report.overlap {
        Overlap::Disjoint { lower_mm, upper_mm } => {
            assert_relative_eq!(lower_mm, r[2].min_distance_mm);
            assert_relative_eq!(upper_mm, r[0].max_distance_mm);
        }
        other => panic!("expected disjoint ranges, got {:?}", other),
    }
}

#[test]
fn default_session_has_common_range() {
    let report = Session::default().plan().unwrap();
    assert_eq!(report.cameras.len(), 3);
    let [lo, hi] = report.overlap.common_mm().expect("identical cameras overlap");
    assert_relative_eq!(lo / 10.0, 27.57, epsilon = 1e-2);
    assert_relative_eq!(hi / 10.0, 82.16, epsilon = 1e-2);
}

#[test]
fn plan_report_serializes_to_json() {
    let report = Session::with_cameras(1).plan().unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["overlap"]["kind"], "common");
    assert_eq!(json["cameras"][0]["spec"]["sensor"]["width_mm"], 7.696);
    assert_eq!(json["chart"]["width_mm"], 210.0);
}
