use criterion::{black_box, criterion_group, criterion_main, Criterion};

use thermalindex_core::{ComfortIndex, Temperature, Thermal, TimeMap, Timestamp};

fn bench_indices(c: &mut Criterion) {
    let thermal = Thermal::new(Temperature::from_celsius(31.0))
        .humidity(65.0)
        .relative_air_speed(1.5)
        .metabolic_rate(1.8)
        .net_radiation_absorbed(120.0);

    let mut group = c.benchmark_group("comfort_index");
    for index in ComfortIndex::ALL {
        group.bench_function(index.name(), |b| {
            b.iter(|| black_box(&thermal).compute(black_box(index)))
        });
    }
    group.finish();
}

fn bench_conversions(c: &mut Criterion) {
    c.bench_function("temperature_from_fahrenheit", |b| {
        b.iter(|| Temperature::from_fahrenheit(black_box(98.6)))
    });
    c.bench_function("temperature_from_kelvin", |b| {
        b.iter(|| Temperature::from_kelvin(black_box(300.0)))
    });
}

fn bench_high_low(c: &mut Criterion) {
    // One week of minute readings
    let week: TimeMap = (0..7 * 24 * 60)
        .map(|minute: Timestamp| {
            let celsius = 18.0 + 8.0 * ((minute % 1440) as f64 / 1440.0 * core::f64::consts::TAU).sin();
            (minute * 60_000, Temperature::from_celsius(celsius))
        })
        .collect();

    c.bench_function("high_low_week_of_minutes", |b| b.iter(|| black_box(&week).high_low()));
}

criterion_group!(benches, bench_indices, bench_conversions, bench_high_low);
criterion_main!(benches);
