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
use crate::inverse::inverse_radices;
use crate::sample::{FftSample, load_scaled, mul_twiddle, store_saturated};
use crate::twiddles::TwiddleTable;
use crate::util::validate_length;
use crate::{BlockFftError, FftDirection};
use num_complex::Complex;
use std::sync::Arc;

pub trait C2RFftExecutor<T> {
    /// Executes the Complex-to-Real Inverse FFT.
    ///
    /// `input` holds the `self.complex_length()` bins `0..=N/2`; imaginary parts
    /// of the first and last bin are ignored. `scratch` must be
    /// `self.scratch_length()` long and is clobbered.
    ///
    /// The result is unnormalized: `output · 2^shift == N · x`.
    ///
    /// # Errors
    /// Returns a `BlockFftError` if any slice length does not match.
    fn execute(
        &self,
        input: &[Complex<T>],
        scratch: &mut [Complex<T>],
        output: &mut [T],
    ) -> Result<u32, BlockFftError>;
    /// Returns the **length** of the final **real-valued** output array (N).
    fn real_length(&self) -> usize;
    /// Returns the **length** of the **complex-valued** input array (`N/2 + 1`).
    fn complex_length(&self) -> usize;
    fn scratch_length(&self) -> usize;
}

pub(crate) struct C2RFftEvenInterceptor<T> {
    intercept: StageChain<T>,
    twiddles: Arc<TwiddleTable<T>>,
    length: usize,
    complex_length: usize,
}

impl<T: FftSample> C2RFftEvenInterceptor<T> {
    pub(crate) fn install(
        length: usize,
        scale: ScaleConfig,
    ) -> Result<C2RFftEvenInterceptor<T>, BlockFftError> {
        if length == 0 {
            return Err(BlockFftError::ZeroSizedFft);
        }
        if !length.is_multiple_of(2) {
            return Err(BlockFftError::OddRealLength(length));
        }
        let half_length = length / 2;
        let radices =
            inverse_radices(half_length).map_err(|_| BlockFftError::UnsupportedLength(length))?;
        let twiddles = Arc::new(TwiddleTable::new(length)?);
        let intercept = StageChain::new(
            half_length,
            FftDirection::Inverse,
            &radices,
            twiddles.clone(),
            scale,
        );
        Ok(C2RFftEvenInterceptor {
            intercept,
            twiddles,
            length,
            complex_length: half_length + 1,
        })
    }

    /// Folds the half spectrum into the packed spectrum of `x[2n] + j·x[2n+1]`,
    /// doubled.
    fn fold(
        &self,
        input: &[Complex<T>],
        packed: &mut [Complex<T>],
        register: &ScaleRegister,
    ) -> u32 {
        let half_length = packed.len();
        let shift = register.prepare::<T>(3);
        let rounding = register.rounding();

        let first = load_scaled(input[0], shift, rounding);
        let last = load_scaled(input[half_length], shift, rounding);
        packed[0] = store_saturated(Complex {
            re: first.re + last.re,
            im: first.re - last.re,
        });

        for k in 1..half_length.div_ceil(2) {
            let a = load_scaled(input[k], shift, rounding);
            let b = load_scaled(input[half_length - k], shift, rounding);
            let b_conj = Complex { re: b.re, im: -b.im };

            let sum = a + b_conj;
            let o = mul_twiddle(
                a - b_conj,
                self.twiddles.get(k, FftDirection::Inverse),
                rounding,
            );

            // sum + j·o and conj(sum) + j·conj(o)
            packed[k] = store_saturated(Complex {
                re: sum.re - o.im,
                im: sum.im + o.re,
            });
            packed[half_length - k] = store_saturated(Complex {
                re: sum.re + o.im,
                im: o.re - sum.im,
            });
        }

        if half_length.is_multiple_of(2) {
            let center = load_scaled(input[half_length / 2], shift, rounding);
            packed[half_length / 2] = store_saturated(Complex {
                re: center.re + center.re,
                im: -(center.im + center.im),
            });
        }

        shift
    }
}

impl<T: FftSample> C2RFftExecutor<T> for C2RFftEvenInterceptor<T> {
    fn execute(
        &self,
        input: &[Complex<T>],
        scratch: &mut [Complex<T>],
        output: &mut [T],
    ) -> Result<u32, BlockFftError> {
        validate_length(input, self.complex_length)?;
        validate_length(scratch, self.scratch_length())?;
        validate_length(output, self.length)?;

        let (packed, time) = scratch.split_at_mut(self.length / 2);

        let mut register = ScaleRegister::start(self.intercept.scale(), input);
        let mut shift = self.fold(input, packed, &register);
        register.observe(packed);
        shift += self.intercept.run(packed, time, &mut register);

        for (dst, src) in output.chunks_exact_mut(2).zip(time.iter()) {
            dst[0] = src.re;
            dst[1] = src.im;
        }
        Ok(shift)
    }

    fn real_length(&self) -> usize {
        self.length
    }

    fn complex_length(&self) -> usize {
        self.complex_length
    }

    fn scratch_length(&self) -> usize {
        self.length
    }
}
