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
use crate::BlockFftError;
use crate::butterflies::Radix;
use crate::plan::factorize;

/// Radix sequence of the dedicated power-of-two inverse pipeline.
///
/// A radix-4 ring-walking first stage, radix-4 inner stages and a radix-4 or
/// radix-8 terminal stage picked by the parity of `log2(n)`.
/// `None` when `n` is not a power of two or shorter than 4.
pub(crate) fn inverse_pow2_radices(n: usize) -> Option<Vec<Radix>> {
    if n < 4 || !n.is_power_of_two() {
        return None;
    }
    let log2 = n.trailing_zeros() as usize;
    let radices = if log2 % 2 == 0 {
        vec![Radix::Four; log2 / 2]
    } else {
        let mut radices = vec![Radix::Four; (log2 - 3) / 2];
        radices.push(Radix::Eight);
        radices
    };
    Some(radices)
}

/// Radices of an inverse transform of length `n`.
pub(crate) fn inverse_radices(n: usize) -> Result<Vec<Radix>, BlockFftError> {
    match inverse_pow2_radices(n) {
        Some(radices) => Ok(radices),
        None => factorize(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoscale::ScaleConfig;
    use crate::dft::{random_f64, random_q15, reference_dft, relative_rms_error, to_f64_raw};
    use crate::{BlockFft, FftDirection};
    use num_complex::Complex;

    #[test]
    fn test_pow2_radices() {
        assert_eq!(inverse_pow2_radices(2), None);
        assert_eq!(inverse_pow2_radices(12), None);
        assert_eq!(inverse_pow2_radices(4), Some(vec![Radix::Four]));
        assert_eq!(inverse_pow2_radices(8), Some(vec![Radix::Eight]));
        assert_eq!(
            inverse_pow2_radices(32),
            Some(vec![Radix::Four, Radix::Eight])
        );
        assert_eq!(
            inverse_pow2_radices(256),
            Some(vec![Radix::Four; 4])
        );
        assert_eq!(inverse_radices(2).unwrap(), vec![Radix::Two]);
        assert_eq!(inverse_radices(48).unwrap(), vec![Radix::Four, Radix::Four, Radix::Three]);
        assert_eq!(inverse_radices(7), Err(BlockFftError::UnsupportedLength(7)));
    }

    #[test]
    fn test_inverse_pow2_matches_reference() {
        for log2 in 2..=12 {
            let size = 1usize << log2;
            let ifft = BlockFft::make_inverse_fft::<f64>(size, ScaleConfig::default()).unwrap();
            let last = *ifft.stages().last().unwrap();
            let expected = if log2 % 2 == 0 { Radix::Four } else { Radix::Eight };
            assert_eq!(last, expected, "size {size}");

            let input = random_f64(size);
            let mut x = input.to_vec();
            let mut y = vec![Complex::<f64>::default(); size];
            ifft.execute(&mut x, &mut y).unwrap();
            let reference = reference_dft(&input, FftDirection::Inverse);
            let error = relative_rms_error(&reference, &y);
            assert!(error < 1e-12, "size {size}: error {error}");
        }
    }

    #[test]
    fn test_inverse_pow2_fixed() {
        for size in [8usize, 32, 128, 2048] {
            let ifft = BlockFft::make_inverse_fft::<i16>(size, ScaleConfig::default()).unwrap();
            let input = random_q15(size, 16384);
            let mut x = input.to_vec();
            let mut y = vec![Complex::<i16>::default(); size];
            let shift = ifft.execute(&mut x, &mut y).unwrap();
            let rescaled = to_f64_raw(&y)
                .iter()
                .map(|v| v * 2f64.powi(shift as i32))
                .collect::<Vec<_>>();
            let reference = reference_dft(&to_f64_raw(&input), FftDirection::Inverse);
            let error = relative_rms_error(&reference, &rescaled);
            assert!(error < 1e-2, "size {size}: error {error}");
        }
    }
}
