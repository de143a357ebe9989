use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chartrange::{CameraSpec, LensDefinition, Overlap, SensorDefinition, Session};

fn mixed_cameras(n: usize) -> Vec<CameraSpec> {
    (0..n)
        .map(|i| {
            let mut cam = CameraSpec::numbered(i);
            if i % 2 == 1 {
                cam.sensor = SensorDefinition::PitchUm(1.4 + 0.1 * i as f64);
                cam.lens = LensDefinition::DiagonalFovDeg(60.0 + i as f64);
            } else {
                cam.lens = LensDefinition::FocalLengthMm(2.5 + 0.05 * i as f64);
            }
            cam
        })
        .collect()
}

fn bench_plan(c: &mut Criterion) {
    let session = Session::default();
    let planner = session.planner().expect("default session is valid");
    let cameras = mixed_cameras(64);

    c.bench_function("plan_64_cameras", |b| {
        b.iter(|| planner.plan(black_box(&cameras)).expect("valid cameras"))
    });

    let ranges: Vec<_> = cameras
        .iter()
        .map(|cam| planner.evaluate_camera(cam).range)
        .collect();
    c.bench_function("overlap_reduce_64", |b| {
        b.iter(|| Overlap::reduce(black_box(&ranges)))
    });
}

criterion_group!(benches, bench_plan);
criterion_main!(benches);
