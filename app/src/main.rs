/*
 * // Copyright (c) Radzivon Bartoshyk 6/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use blockfft::{BlockFft, FftExecutor, FftSample, Q15, R2CFftExecutor, ScaleConfig};
use num_complex::Complex;
use rand::Rng;
use std::time::Instant;

fn main() {
    let n = 360usize;
    let bin = 17usize;

    let forward = BlockFft::make_forward_fft::<Q15>(n, ScaleConfig::default()).unwrap();
    let inverse = BlockFft::make_inverse_fft::<Q15>(n, ScaleConfig::default()).unwrap();
    println!("stages {:?} / {:?}", forward.stages(), inverse.stages());

    let signal = (0..n)
        .map(|i| {
            let phase = 2. * std::f64::consts::PI * (bin * i) as f64 / n as f64;
            let noise = rand::rng().random_range(-0.01..0.01);
            Complex::new(
                Q15::from_f64(0.7 * phase.cos() + noise),
                Q15::from_f64(0.7 * phase.sin() + noise),
            )
        })
        .collect::<Vec<_>>();

    let mut x = signal.to_vec();
    let mut spectrum = vec![Complex::<Q15>::default(); n];
    let start = Instant::now();
    let forward_shift = forward.execute(&mut x, &mut spectrum).unwrap();
    println!("forward took {:?}, shift {forward_shift}", start.elapsed());

    let (peak, value) = spectrum
        .iter()
        .enumerate()
        .max_by_key(|(_, v)| v.re as i32 * v.re as i32 + v.im as i32 * v.im as i32)
        .unwrap();
    println!(
        "peak at bin {peak}: {value} -> {:.1}",
        (value.re as f64).hypot(value.im as f64) * 2f64.powi(forward_shift as i32)
    );

    let mut restored = vec![Complex::<Q15>::default(); n];
    let inverse_shift = inverse.execute(&mut spectrum, &mut restored).unwrap();
    let scale = 2f64.powi((forward_shift + inverse_shift) as i32) / n as f64;
    let worst = signal
        .iter()
        .zip(restored.iter())
        .map(|(a, b)| {
            (a.re as f64 - b.re as f64 * scale)
                .abs()
                .max((a.im as f64 - b.im as f64 * scale).abs())
        })
        .fold(0f64, f64::max);
    println!("inverse shift {inverse_shift}, worst round trip error {worst:.2} LSB");

    let real = signal.iter().map(|v| v.re).collect::<Vec<_>>();
    let r2c = BlockFft::make_r2c_fft::<Q15>(n, ScaleConfig::default()).unwrap();
    let mut scratch = vec![Complex::<Q15>::default(); r2c.scratch_length()];
    let mut half = vec![Complex::<Q15>::default(); r2c.complex_length()];
    let real_shift = r2c.execute(&real, &mut scratch, &mut half).unwrap();
    println!("r2c shift {real_shift}, bin {bin}: {}", half[bin]);
}
