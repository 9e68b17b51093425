use armorpair::{find_parallel_pairs, PairConfig, RotatedRect};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn make_bars(count: usize) -> Vec<RotatedRect> {
    (0..count)
        .map(|i| {
            let col = (i % 16) as f32;
            let row = (i / 16) as f32;
            let tilt = ((i * 7) % 13) as f32 - 6.0;
            let long = 28.0 + ((i * 5) % 9) as f32;
            RotatedRect::new(col * 48.0, row * 80.0, long / 3.5, long, tilt)
        })
        .collect()
}

fn bench_pairing(c: &mut Criterion) {
    for &count in &[16usize, 64, 256] {
        let bars = make_bars(count);
        let cfg = PairConfig::default();
        c.bench_function(&format!("find_parallel_pairs_{count}"), |b| {
            b.iter(|| black_box(find_parallel_pairs(black_box(&bars), &cfg)));
        });

        #[cfg(feature = "rayon")]
        {
            let par_cfg = PairConfig {
                parallel: true,
                ..PairConfig::default()
            };
            c.bench_function(&format!("find_parallel_pairs_par_{count}"), |b| {
                b.iter(|| black_box(find_parallel_pairs(black_box(&bars), &par_cfg)));
            });
        }
    }
}

#[cfg(feature = "image-io")]
fn bench_detect(c: &mut Criterion) {
    use armorpair::{detect_armor, DetectConfig};
    use image::{Rgb, RgbImage};

    let mut img = RgbImage::new(640, 480);
    for (i, x0) in [120u32, 220, 380, 480].into_iter().enumerate() {
        let y0 = 150 + (i as u32 % 2) * 10;
        for y in y0..y0 + 90 {
            for x in x0..x0 + 18 {
                img.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }
    }
    let cfg = DetectConfig::default();
    c.bench_function("detect_armor_640x480", |b| {
        b.iter(|| black_box(detect_armor(black_box(&img), &cfg).unwrap()));
    });
}

#[cfg(not(feature = "image-io"))]
fn bench_detect(_c: &mut Criterion) {}

criterion_group!(benches, bench_pairing, bench_detect);
criterion_main!(benches);
