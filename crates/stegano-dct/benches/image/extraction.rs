use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};

pub fn image_extraction(c: &mut Criterion) {
    c.bench_function("Image Extraction", |b| {
        let carrier: RgbImage =
            ImageBuffer::from_fn(512, 512, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]));
        let secret =
            stegano_dct::embed(&carrier, "Hello World!").expect("Cannot hide secret message");

        b.iter(|| {
            stegano_dct::extract(&secret).expect("Failed to unveil secret message");
        })
    });
}

criterion_group!(benches, image_extraction);
criterion_main!(benches);
