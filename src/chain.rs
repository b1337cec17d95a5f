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
use crate::butterflies::{ButterflyConstants, Radix};
use crate::plan::{StageDescriptor, describe};
use crate::sample::FftSample;
use crate::stage::{run_stage, run_stage_in_place};
use crate::twiddles::TwiddleTable;
use crate::util::validate_length;
use crate::{BlockFftError, FftDirection, FftExecutor};
use num_complex::Complex;
use std::sync::Arc;

/// Immutable pipeline of Stockham stages over a ping-pong buffer pair.
#[derive(Debug)]
pub(crate) struct StageChain<T> {
    length: usize,
    direction: FftDirection,
    stages: Vec<StageDescriptor>,
    twiddles: Arc<TwiddleTable<T>>,
    constants: ButterflyConstants<T>,
    scale: ScaleConfig,
}

impl<T: FftSample> StageChain<T> {
    pub(crate) fn new(
        length: usize,
        direction: FftDirection,
        radices: &[Radix],
        twiddles: Arc<TwiddleTable<T>>,
        scale: ScaleConfig,
    ) -> StageChain<T> {
        let stages = describe(length, radices, twiddles.period());
        StageChain {
            length,
            direction,
            stages,
            twiddles,
            constants: ButterflyConstants::new(direction),
            scale,
        }
    }

    #[inline]
    pub(crate) fn scale(&self) -> ScaleConfig {
        self.scale
    }

    /// Runs every stage, leaving the result in `y` and clobbering `x`.
    ///
    /// Stages alternate between the buffers; for an even stage count the
    /// terminal stage runs in place on `y` so parity always ends there.
    /// Returns the sum of the shifts applied.
    pub(crate) fn run(
        &self,
        x: &mut [Complex<T>],
        y: &mut [Complex<T>],
        register: &mut ScaleRegister,
    ) -> u32 {
        debug_assert_eq!(x.len(), self.length);
        debug_assert_eq!(y.len(), self.length);

        let count = self.stages.len();
        if count == 0 {
            y.copy_from_slice(x);
            return 0;
        }

        let ping_pong = if count % 2 == 1 { count } else { count - 1 };

        let mut v = 1usize;
        let mut shift_sum = 0u32;
        let mut src: &mut [Complex<T>] = x;
        let mut dst: &mut [Complex<T>] = y;

        for stage in self.stages[..ping_pong].iter() {
            shift_sum += run_stage(
                stage,
                &mut v,
                &self.twiddles,
                &self.constants,
                register,
                src,
                dst,
            );
            std::mem::swap(&mut src, &mut dst);
        }

        // odd number of swaps, `src` is `y` again
        if let Some(last) = self.stages.get(ping_pong) {
            shift_sum += run_stage_in_place(last, &mut v, &self.constants, register, src);
        }

        debug_assert_eq!(v, self.length);
        shift_sum
    }
}

impl<T: FftSample> FftExecutor<T> for StageChain<T> {
    fn execute(&self, x: &mut [Complex<T>], y: &mut [Complex<T>]) -> Result<u32, BlockFftError> {
        validate_length(x, self.length)?;
        validate_length(y, self.length)?;
        let mut register = ScaleRegister::start(self.scale, x);
        Ok(self.run(x, y, &mut register))
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    fn length(&self) -> usize {
        self.length
    }

    fn stages(&self) -> Vec<Radix> {
        self.stages.iter().map(|s| s.radix).collect()
    }
}

#[cfg(test)]
macro_rules! test_round_trip {
    ($method_name: ident, $data_type: ident, $lengths: expr, $tol: expr) => {
        #[test]
        fn $method_name() {
            for size in $lengths {
                let forward = BlockFft::make_forward_fft::<$data_type>(size, ScaleConfig::default())
                    .unwrap();
                let inverse = BlockFft::make_inverse_fft::<$data_type>(size, ScaleConfig::default())
                    .unwrap();
                let src = random_f64(size)
                    .iter()
                    .map(|v| Complex {
                        re: $data_type::from_f64(v.re - 0.5),
                        im: $data_type::from_f64(v.im - 0.5),
                    })
                    .collect::<Vec<_>>();

                let mut x = src.to_vec();
                let mut spectrum = vec![Complex::<$data_type>::default(); size];
                let forward_shift = forward.execute(&mut x, &mut spectrum).unwrap();
                let mut restored = vec![Complex::<$data_type>::default(); size];
                let inverse_shift = inverse.execute(&mut spectrum, &mut restored).unwrap();

                let scale = 2f64.powi((forward_shift + inverse_shift) as i32) / size as f64;
                let restored = to_f64_raw(&restored)
                    .iter()
                    .map(|v| v * scale)
                    .collect::<Vec<_>>();
                let error = relative_rms_error(&to_f64_raw(&src), &restored);
                assert!(
                    error < $tol,
                    "round trip error {error} for size {size}, shifts {forward_shift} {inverse_shift}"
                );
            }
        }
    };
}
