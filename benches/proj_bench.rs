use criterion::{black_box, criterion_group, criterion_main, Criterion};

use proj4::{Point, Projection};

fn grid(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            ((12.0 + 6.0 * t).to_radians(), (40.0 + 20.0 * t).to_radians())
        })
        .collect()
}

fn bench_forward_families(c: &mut Criterion) {
    let definitions = [
        ("merc", "+proj=merc +ellps=WGS84"),
        ("tmerc", "+proj=tmerc +lon_0=15 +ellps=WGS84"),
        ("lcc", "+proj=lcc +lat_1=44 +lat_2=49 +lat_0=46.5 +lon_0=3"),
        ("aea", "+proj=aea +lat_1=43 +lat_2=62 +lon_0=10"),
        ("sinu", "+proj=sinu"),
        ("sterea", "+proj=sterea +lat_0=52.156 +lon_0=5.387 +k=0.9999079 +ellps=bessel"),
    ];
    let points = grid(1_000);

    for (name, definition) in definitions {
        let p: Projection = definition.parse().unwrap();
        c.bench_function(&format!("forward_{name}_1k"), |b| {
            b.iter(|| {
                for &(lon, lat) in &points {
                    black_box(p.forward(black_box(lon), black_box(lat)).unwrap());
                }
            });
        });
    }
}

fn bench_create(c: &mut Criterion) {
    c.bench_function("create_gk3_potsdam", |b| {
        b.iter(|| {
            black_box(
                "+proj=tmerc +lon_0=9 +k=1 +x_0=3500000 +datum=potsdam"
                    .parse::<Projection>()
                    .unwrap(),
            )
        });
    });
}

fn bench_datum_transform(c: &mut Criterion) {
    let gk: Projection = "+proj=tmerc +lon_0=9 +k=1 +x_0=3500000 +datum=potsdam"
        .parse()
        .unwrap();
    let wgs84: Projection = "+proj=longlat +datum=WGS84".parse().unwrap();
    let p = Point::new_3d(3_458_305.0, 5_428_192.0, 0.0);

    c.bench_function("transform_gk3_to_wgs84", |b| {
        b.iter(|| black_box(gk.transform(&wgs84, black_box(p)).unwrap()));
    });
}

fn bench_transform_all_thread_scaling(c: &mut Criterion) {
    // Batch UTM -> WGS84 with different thread counts
    let utm: Projection = "+proj=utm +zone=33 +datum=WGS84".parse().unwrap();
    let webmerc: Projection = "+proj=webmerc +datum=WGS84".parse().unwrap();
    let n = 100_000_usize;
    let source: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            (300_000.0 + t * 400_000.0, 5_000_000.0 + t * 2_000_000.0)
        })
        .collect();

    for &threads in &[1, 2, 4, 8] {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        let mut coords = source.clone();

        c.bench_function(&format!("transform_all_threads_{threads}_100k"), |b| {
            b.iter(|| {
                coords.copy_from_slice(&source);
                pool.install(|| utm.transform_all(&webmerc, &mut coords).unwrap());
            });
        });
    }
}

criterion_group!(
    benches,
    bench_forward_families,
    bench_create,
    bench_datum_transform,
    bench_transform_all_thread_scaling,
);
criterion_main!(benches);
