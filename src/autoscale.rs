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
use crate::sample::{FftSample, Rounding, complex_headroom};
use num_complex::Complex;

/// How the shift applied before each stage is chosen.
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ScalePolicy {
    /// Measure the headroom of every written buffer and shift only as much as
    /// the next stage needs.
    #[default]
    Dynamic,
    /// Shift by the worst case growth of every stage without measuring.
    Static,
}

/// Scaling configuration of a plan. Floating point plans ignore it.
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct ScaleConfig {
    pub policy: ScalePolicy,
    pub rounding: Rounding,
}

impl ScaleConfig {
    pub fn new(policy: ScalePolicy, rounding: Rounding) -> ScaleConfig {
        ScaleConfig { policy, rounding }
    }
}

/// Headroom of a whole block: the minimum over every component.
pub(crate) fn block_headroom<T: FftSample>(buffer: &[Complex<T>]) -> u32 {
    buffer
        .iter()
        .fold(T::MAX_HEADROOM, |acc, &v| acc.min(complex_headroom(v)))
}

/// Call scoped scale state threaded through every stage.
///
/// `bexp` is a lower bound of the headroom of the most recently written
/// buffer; with [`ScalePolicy::Static`] it is never measured.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct ScaleRegister {
    config: ScaleConfig,
    bexp: u32,
}

impl ScaleRegister {
    pub(crate) fn start<T: FftSample>(config: ScaleConfig, input: &[Complex<T>]) -> ScaleRegister {
        let bexp = if T::FIXED && config.policy == ScalePolicy::Dynamic {
            block_headroom(input)
        } else {
            0
        };
        ScaleRegister { config, bexp }
    }

    #[inline]
    pub(crate) fn rounding(&self) -> Rounding {
        self.config.rounding
    }

    #[cfg(test)]
    pub(crate) fn bexp(&self) -> u32 {
        self.bexp
    }

    /// Shift to apply to the inputs of a pass that grows by up to `required` bits.
    pub(crate) fn prepare<T: FftSample>(&self, required: u32) -> u32 {
        if !T::FIXED {
            return 0;
        }
        match self.config.policy {
            ScalePolicy::Dynamic => required.saturating_sub(self.bexp),
            ScalePolicy::Static => required,
        }
    }

    pub(crate) fn observe<T: FftSample>(&mut self, written: &[Complex<T>]) {
        if T::FIXED && self.config.policy == ScalePolicy::Dynamic {
            self.bexp = block_headroom(written);
        }
    }
}
