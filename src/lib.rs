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
//! Mixed-radix block floating point FFT.
//!
//! Transforms run as a chain of radix 2, 3, 4, 5 and 6 Stockham stages over a
//! caller owned buffer pair. Fixed point plans (`i16` as Q15, `i32` as Q31)
//! measure the headroom left after every stage and shift the next stage's
//! inputs just enough to never overflow; every executor returns the total
//! shift so the true result is `output · 2^shift`.
mod autoscale;
mod butterflies;
mod chain;
#[cfg(test)]
mod dft;
mod err;
mod inverse;
mod plan;
mod r2c;
mod sample;
mod stage;
mod twiddles;
mod util;

pub use autoscale::{ScaleConfig, ScalePolicy};
pub use butterflies::Radix;
pub use err::BlockFftError;
pub use r2c::{C2RFftExecutor, R2CFftExecutor};
pub use sample::{FftSample, Q15, Q31, Rounding};

use crate::chain::StageChain;
use crate::inverse::inverse_radices;
use crate::plan::factorize;
use crate::r2c::{C2RFftEvenInterceptor, R2CFftEvenInterceptor};
use crate::twiddles::TwiddleTable;
use num_complex::Complex;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub trait FftExecutor<T> {
    /// Transforms `x` into `y`.
    ///
    /// Both slices must be `self.length()` long. `x` is used as a ping-pong
    /// buffer and is clobbered; the result always lands in `y`.
    ///
    /// Returns the sum of the right shifts applied by every stage, always zero
    /// for floating point samples.
    fn execute(&self, x: &mut [Complex<T>], y: &mut [Complex<T>]) -> Result<u32, BlockFftError>;
    fn direction(&self) -> FftDirection;
    fn length(&self) -> usize;
    /// Radix of every stage in execution order.
    fn stages(&self) -> Vec<Radix>;
}

pub struct BlockFft {}

impl BlockFft {
    fn plan<T: FftSample>(
        n: usize,
        direction: FftDirection,
        scale: ScaleConfig,
    ) -> Result<StageChain<T>, BlockFftError> {
        let radices = match direction {
            FftDirection::Forward => factorize(n)?,
            FftDirection::Inverse => inverse_radices(n)?,
        };
        let twiddles = Arc::new(TwiddleTable::new(n)?);
        Ok(StageChain::new(n, direction, &radices, twiddles, scale))
    }

    pub fn make_forward_fft<T: FftSample>(
        n: usize,
        scale: ScaleConfig,
    ) -> Result<Box<dyn FftExecutor<T> + Send + Sync>, BlockFftError> {
        BlockFft::plan(n, FftDirection::Forward, scale)
            .map(|x| Box::new(x) as Box<dyn FftExecutor<T> + Send + Sync>)
    }

    /// Unnormalized inverse: `IFFT(FFT(x)) == N·x` once both shifts are undone.
    pub fn make_inverse_fft<T: FftSample>(
        n: usize,
        scale: ScaleConfig,
    ) -> Result<Box<dyn FftExecutor<T> + Send + Sync>, BlockFftError> {
        BlockFft::plan(n, FftDirection::Inverse, scale)
            .map(|x| Box::new(x) as Box<dyn FftExecutor<T> + Send + Sync>)
    }

    /// Real input forward transform of even length `n`, producing `n/2 + 1` bins.
    pub fn make_r2c_fft<T: FftSample>(
        n: usize,
        scale: ScaleConfig,
    ) -> Result<Box<dyn R2CFftExecutor<T> + Send + Sync>, BlockFftError> {
        R2CFftEvenInterceptor::install(n, scale)
            .map(|x| Box::new(x) as Box<dyn R2CFftExecutor<T> + Send + Sync>)
    }

    /// Inverse of [`BlockFft::make_r2c_fft`], unnormalized like [`BlockFft::make_inverse_fft`].
    pub fn make_c2r_fft<T: FftSample>(
        n: usize,
        scale: ScaleConfig,
    ) -> Result<Box<dyn C2RFftExecutor<T> + Send + Sync>, BlockFftError> {
        C2RFftEvenInterceptor::install(n, scale)
            .map(|x| Box::new(x) as Box<dyn C2RFftExecutor<T> + Send + Sync>)
    }
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}

impl FftDirection {
    pub fn inverse(self) -> FftDirection {
        match self {
            FftDirection::Forward => FftDirection::Inverse,
            FftDirection::Inverse => FftDirection::Forward,
        }
    }
}

impl Display for FftDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FftDirection::Forward => f.write_str("FftDirection::Forward"),
            FftDirection::Inverse => f.write_str("FftDirection::Inverse"),
        }
    }
}
