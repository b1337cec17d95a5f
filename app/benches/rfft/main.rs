/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use blockfft::{BlockFft, C2RFftExecutor, FftSample, R2CFftExecutor, ScaleConfig};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use num_complex::Complex;
use rand::Rng;
use rustfft::FftPlanner;

fn check_real_group<T: FftSample>(c: &mut Criterion, n: usize, group: &str) {
    let input = (0..n)
        .map(|_| T::from_f64(rand::rng().random_range(-0.5..0.5)))
        .collect::<Vec<_>>();

    c.bench_function(format!("blockfft r2c {group} {n}").as_str(), |b| {
        let plan = BlockFft::make_r2c_fft::<T>(n, ScaleConfig::default()).unwrap();
        let mut scratch = vec![Complex::<T>::default(); plan.scratch_length()];
        let mut output = vec![Complex::<T>::default(); plan.complex_length()];
        b.iter(|| plan.execute(&input, &mut scratch, &mut output).unwrap())
    });

    c.bench_function(format!("blockfft c2r {group} {n}").as_str(), |b| {
        let plan = BlockFft::make_c2r_fft::<T>(n, ScaleConfig::default()).unwrap();
        let spectrum = input
            .iter()
            .take(plan.complex_length())
            .map(|&v| Complex { re: v, im: v })
            .collect::<Vec<_>>();
        let mut scratch = vec![Complex::<T>::default(); plan.scratch_length()];
        let mut output = vec![T::default(); plan.real_length()];
        b.iter(|| plan.execute(&spectrum, &mut scratch, &mut output).unwrap())
    });
}

fn check_reference(c: &mut Criterion, n: usize) {
    let input = (0..n)
        .map(|_| Complex::new(rand::rng().random_range(-0.5f32..0.5), 0.))
        .collect::<Vec<_>>();
    c.bench_function(format!("rustfft complex f32 {n}").as_str(), |b| {
        let plan = FftPlanner::new().plan_fft_forward(n);
        b.iter_batched(
            || input.to_vec(),
            |mut working| plan.process(&mut working),
            BatchSize::SmallInput,
        )
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.benchmark_group("RFft");
    for n in [128usize, 720, 2000, 2048, 8192] {
        check_reference(c, n);
        check_real_group::<f32>(c, n, "f32");
        check_real_group::<i16>(c, n, "q15");
        check_real_group::<i32>(c, n, "q31");
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
