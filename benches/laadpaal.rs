use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use laadpaal::{classify, AdoptionSeries, RegionSummary, StationRecord, VehicleRecord};

const NAMES: [&str; 8] = [
    "ID.3 Pro",
    "Model 3 EV",
    "Passat Diesel Hybrid",
    "Outlander PHEV",
    "Transit Diesel",
    "Mirai Waterstof",
    "Yaris",
    "Chevrolet Spark",
];

fn fleet(size: usize) -> Vec<VehicleRecord> {
    (0..size)
        .map(|i| {
            let date = NaiveDate::from_ymd_opt(2010 + (i % 14) as i32, 1 + (i % 12) as u32, 1);
            VehicleRecord::new(Some(NAMES[i % NAMES.len()].to_string()), date)
        })
        .collect()
}

fn stations(size: usize) -> Vec<StationRecord> {
    (0..size as u64)
        .map(|id| {
            StationRecord::builder()
                .id(id)
                .title(format!("Paal {id}, Gemeente{}", id % 350))
                .level(1 + (id % 3) as u32)
                .build()
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(classify(black_box(name)));
            }
        })
    });

    let vehicles = fleet(100_000);
    c.bench_function("adoption_series_100k", |b| {
        b.iter(|| AdoptionSeries::from_vehicles(black_box(&vehicles)))
    });

    let stations = stations(6_000);
    c.bench_function("region_ranking_6k", |b| {
        b.iter(|| {
            let summary = RegionSummary::from_stations(black_box(&stations));
            (summary.top_by_count(10), summary.top_by_fast_ratio(10))
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
