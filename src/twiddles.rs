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
use crate::err::try_vec;
use crate::sample::FftSample;
use crate::util::compute_twiddle;
use crate::{BlockFftError, FftDirection};
use num_complex::Complex;

/// Forward rotations `exp(-2πi·j/period)` quantized to the sample format.
///
/// Stages address the table with a step multiplier, so one table serves every
/// stage of a transform and, for real transforms, the half-length inner
/// transform together with the spectrum reconstruction pass.
#[derive(Debug)]
pub(crate) struct TwiddleTable<T> {
    period: usize,
    table: Vec<Complex<T>>,
}

impl<T: FftSample> TwiddleTable<T> {
    pub(crate) fn new(period: usize) -> Result<TwiddleTable<T>, BlockFftError> {
        let mut table = try_vec![Complex::<T>::default(); period];
        for (j, dst) in table.iter_mut().enumerate() {
            let w = compute_twiddle(j, period, FftDirection::Forward);
            *dst = Complex {
                re: T::from_f64(w.re),
                im: T::from_f64(w.im),
            };
        }
        Ok(TwiddleTable { period, table })
    }

    #[inline]
    pub(crate) fn period(&self) -> usize {
        self.period
    }

    /// Inverse transforms read the conjugate rotation.
    #[inline]
    pub(crate) fn get(&self, index: usize, direction: FftDirection) -> Complex<T> {
        debug_assert!(index < self.period);
        let w = self.table[index];
        match direction {
            FftDirection::Forward => w,
            FftDirection::Inverse => Complex { re: w.re, im: -w.im },
        }
    }
}
