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
use crate::FftDirection;
use crate::sample::FftSample;
use crate::util::compute_twiddle;
use num_complex::Complex;

/// Naive `O(n²)` transform in `f64`, the reference every executor is checked against.
pub(crate) fn reference_dft(input: &[Complex<f64>], direction: FftDirection) -> Vec<Complex<f64>> {
    let n = input.len();
    let twiddles: Vec<Complex<f64>> = (0..n)
        .map(|k| compute_twiddle(k, n, direction))
        .collect();
    (0..n)
        .map(|k| {
            let mut sum = Complex::new(0f64, 0f64);
            let mut twiddle_idx = 0usize;
            for src in input.iter() {
                sum += src * twiddles[twiddle_idx];
                twiddle_idx += k;
                if twiddle_idx >= n {
                    twiddle_idx -= n;
                }
            }
            sum
        })
        .collect()
}

/// Raw integer (or float) values of a buffer, unscaled.
pub(crate) fn to_f64_raw<T: FftSample>(input: &[Complex<T>]) -> Vec<Complex<f64>> {
    input
        .iter()
        .map(|v| {
            let scale = if T::FIXED {
                (1u64 << T::MAX_HEADROOM) as f64
            } else {
                1.
            };
            Complex::new(v.re.to_f64() * scale, v.im.to_f64() * scale)
        })
        .collect()
}

/// `‖actual - reference‖ / ‖reference‖`.
pub(crate) fn relative_rms_error(reference: &[Complex<f64>], actual: &[Complex<f64>]) -> f64 {
    assert_eq!(reference.len(), actual.len());
    let noise: f64 = reference
        .iter()
        .zip(actual.iter())
        .map(|(a, b)| (a - b).norm_sqr())
        .sum();
    let signal: f64 = reference.iter().map(|a| a.norm_sqr()).sum();
    (noise / signal).sqrt()
}

pub(crate) fn random_q15(n: usize, amplitude: i16) -> Vec<Complex<i16>> {
    use rand::Rng;
    (0..n)
        .map(|_| {
            Complex::new(
                rand::rng().random_range(-amplitude..amplitude),
                rand::rng().random_range(-amplitude..amplitude),
            )
        })
        .collect()
}

pub(crate) fn random_f64(n: usize) -> Vec<Complex<f64>> {
    use rand::Rng;
    (0..n)
        .map(|_| Complex::new(rand::rng().random(), rand::rng().random()))
        .collect()
}

#[test]
fn test_reference_dft_impulse() {
    let mut input = vec![Complex::new(0f64, 0f64); 8];
    input[0] = Complex::new(1., 0.);
    let spectrum = reference_dft(&input, FftDirection::Forward);
    assert!(spectrum.iter().all(|v| (v - Complex::new(1., 0.)).norm() < 1e-15));
}

#[test]
fn test_to_f64_raw() {
    let raw = to_f64_raw(&[Complex::new(-3i16, 1200i16)]);
    assert_eq!(raw[0], Complex::new(-3., 1200.));
    let raw = to_f64_raw(&[Complex::new(-3i32, 1200i32)]);
    assert_eq!(raw[0], Complex::new(-3., 1200.));
}
