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
use crate::autoscale::ScaleRegister;
use crate::butterflies::{ButterflyConstants, MAX_RADIX};
use crate::plan::{StageDescriptor, StageKind};
use crate::sample::{FftSample, load_scaled, mul_twiddle, store_saturated};
use crate::twiddles::TwiddleTable;
use num_complex::Complex;
use num_traits::Zero;

/// Runs one Stockham pass `src -> dst`.
///
/// With `n = N / v` and `m = n / R`, group `(p, q)` reads `src[q + v·(p + r·m)]`
/// and writes `dst[q + v·(R·p + k)]`, output `k` rotated by `w[p·k·step]`.
/// Returns the shift applied to the inputs of this pass and advances `v`.
pub(crate) fn run_stage<T: FftSample>(
    stage: &StageDescriptor,
    v: &mut usize,
    twiddles: &TwiddleTable<T>,
    constants: &ButterflyConstants<T>,
    register: &mut ScaleRegister,
    src: &[Complex<T>],
    dst: &mut [Complex<T>],
) -> u32 {
    let length = src.len();
    let radix = stage.radix.radix();
    let span = *v;

    debug_assert_eq!(dst.len(), length);
    debug_assert!(length.is_multiple_of(span * radix));
    debug_assert!(stage.kind != StageKind::First || span == 1);

    let shift = register.prepare::<T>(stage.radix.required_headroom());
    let rounding = register.rounding();
    let direction = constants.direction();

    let m = length / (span * radix);
    let stride = length / radix;

    let mut lanes = [Complex::<T::Acc>::zero(); MAX_RADIX];
    let mut rotations = [Complex::<T>::default(); MAX_RADIX];

    for p in 0..m {
        for (k, rotation) in rotations.iter_mut().enumerate().take(radix).skip(1) {
            *rotation = twiddles.get(p * k * stage.twiddle_step, direction);
        }

        for q in 0..span {
            let base = q + span * p;
            // `base < stride`, so the first pass reads its ring without wrapping
            debug_assert!(base + (radix - 1) * stride < length);
            for (r, lane) in lanes[..radix].iter_mut().enumerate() {
                *lane = load_scaled(src[base + r * stride], shift, rounding);
            }

            stage.radix.combine(&mut lanes[..radix], constants, rounding);

            let out = q + span * radix * p;
            dst[out] = store_saturated(lanes[0]);
            for k in 1..radix {
                let value = if p == 0 {
                    lanes[k]
                } else {
                    mul_twiddle(lanes[k], rotations[k], rounding)
                };
                dst[out + k * span] = store_saturated(value);
            }
        }
    }

    *v = span * radix;
    register.observe(dst);
    shift
}

/// Terminal pass over a single buffer.
///
/// With `v·R == N` every group reads and writes the same `R` slots, and `p` is
/// always zero so no rotation is applied.
pub(crate) fn run_stage_in_place<T: FftSample>(
    stage: &StageDescriptor,
    v: &mut usize,
    constants: &ButterflyConstants<T>,
    register: &mut ScaleRegister,
    buffer: &mut [Complex<T>],
) -> u32 {
    let radix = stage.radix.radix();
    let span = *v;

    debug_assert_eq!(stage.kind, StageKind::Last);
    debug_assert_eq!(span * radix, buffer.len());

    let shift = register.prepare::<T>(stage.radix.required_headroom());
    let rounding = register.rounding();

    let mut lanes = [Complex::<T::Acc>::zero(); MAX_RADIX];

    for q in 0..span {
        for (r, lane) in lanes[..radix].iter_mut().enumerate() {
            *lane = load_scaled(buffer[q + r * span], shift, rounding);
        }
        stage.radix.combine(&mut lanes[..radix], constants, rounding);
        for (k, lane) in lanes[..radix].iter().enumerate() {
            buffer[q + k * span] = store_saturated(*lane);
        }
    }

    *v = span * radix;
    register.observe(buffer);
    shift
}
