use criterion::{criterion_group, criterion_main, Criterion};
use image::RgbaImage;
use stegano_dct::{DctCodec, DctCodecOptions};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("DCT Image Decoding", |b| {
        let mut img = RgbaImage::from_fn(512, 512, |x, y| {
            image::Rgba([(x % 256) as u8, (40 + x / 4 + y / 6) as u8, (y % 256) as u8, 255])
        });
        let options = DctCodecOptions::default();
        DctCodec::encoder(&mut img, &options)
            .hide_data(b"Hello World!")
            .expect("Cannot hide secret message");

        b.iter(|| {
            DctCodec::decoder(&img, &options)
                .unveil()
                .expect("Failed to unveil 12 bytes");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
