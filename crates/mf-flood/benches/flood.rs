use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mf_core::{Layout, PixelBuffer};
use mf_flood::flood;

fn island_texture(side: usize) -> (PixelBuffer, PixelBuffer) {
    let mut color = PixelBuffer::new(side, side, Layout::Rgb);
    let mut alpha = PixelBuffer::new(side, side, Layout::Rgb);
    let (lo, hi) = (side / 4, 3 * side / 4);
    for y in lo..hi {
        for x in lo..hi {
            let c = [(x % 256) as u8, (y % 256) as u8, 128, 255];
            color.set_pixel(x, y, c).expect("in range");
            alpha.set_pixel(x, y, [255, 255, 255, 255]).expect("in range");
        }
    }
    (color, alpha)
}

fn bench_flood(c: &mut Criterion) {
    let (color, alpha) = island_texture(1024);

    c.bench_function("flood_1024_island", |b| {
        b.iter(|| {
            let out = flood(black_box(&color), black_box(&alpha)).expect("valid input");
            black_box(out.image);
        });
    });
}

criterion_group!(benches, bench_flood);
criterion_main!(benches);
