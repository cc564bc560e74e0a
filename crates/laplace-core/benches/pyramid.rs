use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;

use laplace_core::pyramid::expand::expand;
use laplace_core::pyramid::kernel::generating_kernel;
use laplace_core::pyramid::reduce::reduce;
use laplace_core::pyramid::{BorderPolicy, LaplacianPyramid};

fn test_image(size: usize) -> Array2<f32> {
    Array2::from_shape_fn((size, size), |(r, c)| ((r * 31 + c * 17) % 251) as f32)
}

fn bench_reduce_expand(c: &mut Criterion) {
    let data = test_image(509);
    let kernel = generating_kernel(1.0);
    let border = BorderPolicy::default();

    c.bench_function("reduce_509_to_253", |b| {
        b.iter(|| black_box(reduce(black_box(&data), &kernel, 253, 253, border)));
    });

    let coarse = reduce(&data, &kernel, 253, 253, border);
    c.bench_function("expand_253_to_509", |b| {
        b.iter(|| black_box(expand(black_box(&coarse), &kernel, 509, 509, border)));
    });
}

fn bench_pyramid(c: &mut Criterion) {
    let data = test_image(512);

    c.bench_function("laplacian_encode_512_5_levels", |b| {
        b.iter(|| black_box(LaplacianPyramid::new(black_box(&data), 5, 1.0)));
    });

    let pyramid = LaplacianPyramid::new(&data, 5, 1.0).expect("512x512 fits 5 levels");
    c.bench_function("laplacian_decode_512_5_levels", |b| {
        b.iter(|| black_box(pyramid.decode()));
    });
}

criterion_group!(benches, bench_reduce_expand, bench_pyramid);
criterion_main!(benches);
