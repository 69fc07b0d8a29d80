use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use natal_core::api::ChartRequest;
use natal_core::models::{HouseSystem, Zodiac};
use natal_core::services::{calculate_chart, ephemeris};

fn request(system: HouseSystem) -> ChartRequest {
    ChartRequest {
        utc_instant: Utc.with_ymd_and_hms(1996, 4, 23, 11, 35, 0).unwrap(),
        latitude_deg: 40.983,
        longitude_deg: 29.029,
        house_system: system,
        zodiac: Zodiac::Tropical,
        include_aspects: true,
    }
}

fn bench_ephemeris(c: &mut Criterion) {
    let mut group = c.benchmark_group("ephemeris");

    group.bench_function("body_longitudes", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let t = -0.05 + (i as f64 * 1e-5);
                black_box(ephemeris::body_longitudes(black_box(t)));
            }
        });
    });

    group.finish();
}

fn bench_full_chart(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_chart");

    for system in [HouseSystem::Placidus, HouseSystem::Equal, HouseSystem::WholeSign] {
        let req = request(system);
        group.bench_with_input(
            BenchmarkId::new("calculate_chart", format!("{system:?}")),
            &req,
            |b, req| {
                b.iter(|| calculate_chart(black_box(req)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_ephemeris, bench_full_chart);
criterion_main!(benches);
