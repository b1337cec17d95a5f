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
use crate::autoscale::{ScaleConfig, ScaleRegister};
use crate::chain::StageChain;
use crate::plan::factorize;
use crate::sample::{FftSample, load_scaled, mul_real, mul_twiddle, store_saturated};
use crate::twiddles::TwiddleTable;
use crate::util::validate_length;
use crate::{BlockFftError, FftDirection};
use num_complex::Complex;
use num_traits::Zero;
use std::sync::Arc;

pub trait R2CFftExecutor<T> {
    /// Executes the Real-to-Complex Forward FFT.
    ///
    /// `input` holds `self.real_length()` samples, `scratch` must be
    /// `self.scratch_length()` long and is clobbered, `output` receives the
    /// `self.complex_length()` non-redundant bins.
    ///
    /// Returns the total right shift applied, the true spectrum is
    /// `output · 2^shift`.
    ///
    /// # Errors
    /// Returns a `BlockFftError` if any slice length does not match.
    fn execute(
        &self,
        input: &[T],
        scratch: &mut [Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<u32, BlockFftError>;
    /// Returns the **length** of the real-valued input (N).
    fn real_length(&self) -> usize;
    /// Returns the **length** of the complex-valued output (`N/2 + 1`).
    fn complex_length(&self) -> usize;
    fn scratch_length(&self) -> usize;
}

/// Even length real transform over a half length complex one.
///
/// Samples are packed pairwise as `z[n] = x[2n] + j·x[2n+1]`, transformed, and
/// the full spectrum is recovered by pairing bins `k` and `N/2 - k`.
pub(crate) struct R2CFftEvenInterceptor<T> {
    intercept: StageChain<T>,
    twiddles: Arc<TwiddleTable<T>>,
    length: usize,
    complex_length: usize,
    half: T,
}

impl<T: FftSample> R2CFftEvenInterceptor<T> {
    pub(crate) fn install(
        length: usize,
        scale: ScaleConfig,
    ) -> Result<R2CFftEvenInterceptor<T>, BlockFftError> {
        if length == 0 {
            return Err(BlockFftError::ZeroSizedFft);
        }
        if !length.is_multiple_of(2) {
            return Err(BlockFftError::OddRealLength(length));
        }
        let half_length = length / 2;
        let radices =
            factorize(half_length).map_err(|_| BlockFftError::UnsupportedLength(length))?;
        let twiddles = Arc::new(TwiddleTable::new(length)?);
        let intercept = StageChain::new(
            half_length,
            FftDirection::Forward,
            &radices,
            twiddles.clone(),
            scale,
        );
        Ok(R2CFftEvenInterceptor {
            intercept,
            twiddles,
            length,
            complex_length: half_length + 1,
            half: T::from_f64(0.5),
        })
    }

    /// Turns the packed half length spectrum into bins `0..=N/2`.
    fn reconstruct(
        &self,
        spectrum: &mut [Complex<T>],
        nyquist: &mut Complex<T>,
        register: &mut ScaleRegister,
    ) -> u32 {
        let half_length = spectrum.len();
        let shift = register.prepare::<T>(2);
        let rounding = register.rounding();

        let z0 = load_scaled(spectrum[0], shift, rounding);
        spectrum[0] = store_saturated(Complex {
            re: z0.re + z0.im,
            im: Zero::zero(),
        });
        *nyquist = store_saturated(Complex {
            re: z0.re - z0.im,
            im: Zero::zero(),
        });

        for k in 1..half_length.div_ceil(2) {
            let a = load_scaled(spectrum[k], shift, rounding);
            let b = load_scaled(spectrum[half_length - k], shift, rounding);
            let b_conj = Complex { re: b.re, im: -b.im };

            let even = mul_real(a + b_conj, self.half, rounding);
            let diff = mul_real(a - b_conj, self.half, rounding);
            let t = mul_twiddle(
                diff,
                self.twiddles.get(k, FftDirection::Forward),
                rounding,
            );
            // -j·t
            let odd = Complex { re: t.im, im: -t.re };

            spectrum[k] = store_saturated(even + odd);
            let mirrored = even - odd;
            spectrum[half_length - k] = store_saturated(Complex {
                re: mirrored.re,
                im: -mirrored.im,
            });
        }

        if half_length.is_multiple_of(2) {
            let center = load_scaled(spectrum[half_length / 2], shift, rounding);
            spectrum[half_length / 2] = store_saturated(Complex {
                re: center.re,
                im: -center.im,
            });
        }

        shift
    }
}

impl<T: FftSample> R2CFftExecutor<T> for R2CFftEvenInterceptor<T> {
    fn execute(
        &self,
        input: &[T],
        scratch: &mut [Complex<T>],
        output: &mut [Complex<T>],
    ) -> Result<u32, BlockFftError> {
        validate_length(input, self.length)?;
        validate_length(scratch, self.scratch_length())?;
        validate_length(output, self.complex_length)?;

        for (dst, src) in scratch.iter_mut().zip(input.chunks_exact(2)) {
            *dst = Complex {
                re: src[0],
                im: src[1],
            };
        }

        let mut register = ScaleRegister::start(self.intercept.scale(), scratch);
        let (spectrum, tail) = output.split_at_mut(self.length / 2);
        let mut shift = self.intercept.run(scratch, spectrum, &mut register);
        shift += self.reconstruct(spectrum, &mut tail[0], &mut register);
        Ok(shift)
    }

    fn real_length(&self) -> usize {
        self.length
    }

    fn complex_length(&self) -> usize {
        self.complex_length
    }

    fn scratch_length(&self) -> usize {
        self.length / 2
    }
}
