use criterion::{criterion_group, criterion_main, Criterion};
use image::RgbaImage;
use stegano_dct::{DctCodec, DctCodecOptions};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("DCT Image Encoding", |b| {
        let mut plain_image = RgbaImage::from_fn(512, 512, |x, y| {
            image::Rgba([(x % 256) as u8, (40 + x / 4 + y / 6) as u8, (y % 256) as u8, 255])
        });
        let options = DctCodecOptions::default();
        let secret_message = b"Hello World!";

        b.iter(|| {
            DctCodec::encoder(&mut plain_image, &options)
                .hide_data(&secret_message[..])
                .expect("Cannot hide secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
