/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use blockfft::{BlockFft, FftExecutor, FftSample, Rounding, ScaleConfig, ScalePolicy};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use num_complex::Complex;
use rand::Rng;
use rustfft::FftPlanner;

fn random_signal<T: FftSample>(n: usize) -> Vec<Complex<T>> {
    (0..n)
        .map(|_| Complex {
            re: T::from_f64(rand::rng().random_range(-0.5..0.5)),
            im: T::from_f64(rand::rng().random_range(-0.5..0.5)),
        })
        .collect()
}

pub fn bench_rustfft_average(c: &mut Criterion) {
    c.bench_function("rustfft avg", |b| {
        b.iter_batched(
            || {
                // Prepare all inputs and FFT plans
                (1..=1500)
                    .filter(|&n| BlockFft::make_forward_fft::<f32>(n, ScaleConfig::default()).is_ok())
                    .map(|n| {
                        let input: Vec<Complex<f32>> =
                            (0..n).map(|i| Complex::new(i as f32, 0.0)).collect();
                        let fft = FftPlanner::<f32>::new().plan_fft_forward(n);
                        (input, fft)
                    })
                    .collect::<Vec<_>>()
            },
            |plans_and_inputs| {
                for (input, fft) in plans_and_inputs.iter() {
                    let mut c = input.to_vec();
                    fft.process(&mut c);
                }
            },
            BatchSize::LargeInput,
        );
    });
}

pub fn bench_blockfft_average(c: &mut Criterion) {
    c.bench_function("blockfft avg", |b| {
        b.iter_batched(
            || {
                // Prepare all inputs and FFT plans
                (1..=1500)
                    .filter_map(|n| {
                        let fft = BlockFft::make_forward_fft::<f32>(n, ScaleConfig::default()).ok()?;
                        let input: Vec<Complex<f32>> =
                            (0..n).map(|i| Complex::new(i as f32, 0.0)).collect();
                        Some((input, fft))
                    })
                    .collect::<Vec<_>>()
            },
            |plans_and_inputs| {
                for (i, (input, fft)) in plans_and_inputs.iter().enumerate() {
                    let mut x = input.to_vec();
                    let mut y = vec![Complex::<f32>::default(); x.len()];
                    match fft.execute(&mut x, &mut y) {
                        Ok(_) => {}
                        Err(err) => panic!("err: {err} on {i}"),
                    };
                }
            },
            BatchSize::LargeInput,
        );
    });
}

fn check_fixed_group<T: FftSample>(c: &mut Criterion, n: usize, group: &str) {
    let input = random_signal::<T>(n);
    for (name, scale) in [
        ("dynamic", ScaleConfig::default()),
        (
            "static",
            ScaleConfig::new(ScalePolicy::Static, Rounding::HalfAwayFromZero),
        ),
    ] {
        c.bench_function(format!("blockfft {group} {name} {n}").as_str(), |b| {
            let plan = BlockFft::make_forward_fft::<T>(n, scale).unwrap();
            let mut y = vec![Complex::<T>::default(); n];
            b.iter_batched(
                || input.to_vec(),
                |mut x| plan.execute(&mut x, &mut y).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
}

fn check_float_group(c: &mut Criterion, n: usize) {
    let input = random_signal::<f32>(n);

    c.bench_function(format!("rustfft f32 {n}").as_str(), |b| {
        let plan = FftPlanner::new().plan_fft_forward(n);
        let mut working = input.to_vec();
        b.iter(|| {
            plan.process(&mut working);
        })
    });

    c.bench_function(format!("blockfft f32 {n}").as_str(), |b| {
        let plan = BlockFft::make_forward_fft::<f32>(n, ScaleConfig::default()).unwrap();
        let mut y = vec![Complex::<f32>::default(); n];
        b.iter_batched(
            || input.to_vec(),
            |mut x| plan.execute(&mut x, &mut y).unwrap(),
            BatchSize::SmallInput,
        )
    });

    c.bench_function(format!("blockfft inverse f32 {n}").as_str(), |b| {
        let plan = BlockFft::make_inverse_fft::<f32>(n, ScaleConfig::default()).unwrap();
        let mut y = vec![Complex::<f32>::default(); n];
        b.iter_batched(
            || input.to_vec(),
            |mut x| plan.execute(&mut x, &mut y).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.benchmark_group("Fft");
    bench_rustfft_average(c);
    bench_blockfft_average(c);

    for n in [64usize, 360, 1000, 1024, 4096] {
        check_float_group(c, n);
        check_fixed_group::<i16>(c, n, "q15");
        check_fixed_group::<i32>(c, n, "q31");
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
