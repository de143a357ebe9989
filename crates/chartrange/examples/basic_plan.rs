use chartrange::{
    CameraSpec, ChartPreset, EnvironmentSpec, LensDefinition, Planner, SensorDefinition,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let environment = EnvironmentSpec {
        wall_width_mm: 2500.0,
        max_room_distance_mm: 3000.0,
        min_chart_fraction: 0.15,
    };
    let planner = Planner::new(ChartPreset::A3.into(), environment)?;

    let cameras = [
        CameraSpec {
            name: "front".to_string(),
            ..Default::default()
        },
        CameraSpec {
            name: "tele".to_string(),
            h_pixels: 1920,
            v_pixels: 1080,
            sensor: SensorDefinition::PitchUm(2.9),
            lens: LensDefinition::DiagonalFovDeg(45.0),
        },
    ];

    let report = planner.plan(&cameras)?;
    println!("{}", report);
    Ok(())
}
