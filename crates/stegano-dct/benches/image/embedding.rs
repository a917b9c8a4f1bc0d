use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};

pub fn image_embedding(c: &mut Criterion) {
    c.bench_function("Image Embedding", |b| {
        let carrier: RgbImage =
            ImageBuffer::from_fn(512, 512, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]));

        b.iter(|| {
            stegano_dct::embed(&carrier, "Hello World!").expect("Cannot hide secret message");
        })
    });
}

criterion_group!(benches, image_embedding);
criterion_main!(benches);
