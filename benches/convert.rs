use criterion::{Criterion, criterion_group, criterion_main};

use ezk_yuv420::{ArgbImage, Yuv420Format, convert};
use std::hint::black_box;

const IMAGE_WIDTH: u32 = 1920;
const IMAGE_HEIGHT: u32 = 1080;

type ConvertFunction = fn(&ArgbImage<'_>, Yuv420Format, &mut [u8]);

fn do_convert(src: &ArgbImage<'_>, format: Yuv420Format, out: &mut [u8]) {
    convert(black_box(src), format, black_box(out)).unwrap();
}

#[cfg(feature = "multi-thread")]
fn do_convert_multi_thread(src: &ArgbImage<'_>, format: Yuv420Format, out: &mut [u8]) {
    use ezk_yuv420::convert_multi_thread;

    convert_multi_thread(black_box(src), format, black_box(out)).unwrap();
}

fn run_benchmarks(c: &mut Criterion, do_convert: ConvertFunction, s: &str) {
    let pixels: Vec<u32> = (0..IMAGE_WIDTH * IMAGE_HEIGHT)
        .map(|i| 0xFF00_0000 | (i % 0x0100_0000))
        .collect();

    let image = ArgbImage::new(&pixels, IMAGE_WIDTH, IMAGE_HEIGHT).unwrap();

    for format in Yuv420Format::variants() {
        let mut out = vec![0u8; format.buffer_size(IMAGE_WIDTH, IMAGE_HEIGHT)];

        c.bench_function(&format!("ARGB to {format:?} {s}"), |b| {
            b.iter(|| {
                do_convert(&image, format, &mut out);
            })
        });
    }
}

fn single_threaded(c: &mut Criterion) {
    run_benchmarks(c, do_convert, "single threaded")
}

#[cfg(feature = "multi-thread")]
fn multi_threaded(c: &mut Criterion) {
    run_benchmarks(c, do_convert_multi_thread, "multi threaded")
}

#[cfg(feature = "multi-thread")]
criterion_group!(img, single_threaded, multi_threaded);

#[cfg(not(feature = "multi-thread"))]
criterion_group!(img, single_threaded);

criterion_main!(img);
