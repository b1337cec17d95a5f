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
use num_integer::Integer;

/// Position of a stage in its pipeline.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub(crate) enum StageKind {
    /// `v == 1`, reads the caller's input at stride `N/R`.
    First,
    Inner,
    /// `v * R == N`, twiddle free and able to run in place.
    Last,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub(crate) struct StageDescriptor {
    pub(crate) radix: Radix,
    pub(crate) kind: StageKind,
    /// Twiddle table step of one unit of `p·k`.
    pub(crate) twiddle_step: usize,
}

/// Splits `n` into supported radices.
///
/// Pairs of 2 become radix-4, a leftover 2 is merged with a 3 into radix-6
/// when possible. Lengths with any other prime factor are rejected.
pub(crate) fn factorize(n: usize) -> Result<Vec<Radix>, BlockFftError> {
    if n == 0 {
        return Err(BlockFftError::ZeroSizedFft);
    }

    let mut remainder = n;
    let mut count = |divisor: usize| {
        let mut exponent = 0usize;
        loop {
            let (quotient, rem) = remainder.div_rem(&divisor);
            if rem != 0 {
                break;
            }
            remainder = quotient;
            exponent += 1;
        }
        exponent
    };

    let twos = count(2);
    let mut threes = count(3);
    let fives = count(5);

    if remainder != 1 {
        return Err(BlockFftError::UnsupportedLength(n));
    }

    let mut radices = Vec::new();
    radices.extend(std::iter::repeat_n(Radix::Four, twos / 2));
    if twos % 2 == 1 {
        if threes > 0 {
            threes -= 1;
            radices.push(Radix::Six);
        } else {
            radices.push(Radix::Two);
        }
    }
    radices.extend(std::iter::repeat_n(Radix::Three, threes));
    radices.extend(std::iter::repeat_n(Radix::Five, fives));
    Ok(radices)
}

/// Builds the stage sequence of an `n`-point transform reading a table of
/// period `period`.
pub(crate) fn describe(n: usize, radices: &[Radix], period: usize) -> Vec<StageDescriptor> {
    debug_assert_eq!(radices.iter().map(|r| r.radix()).product::<usize>(), n);
    debug_assert!(period.is_multiple_of(n));

    let stride = period / n;
    let count = radices.len();
    let mut v = 1usize;
    let mut stages = Vec::with_capacity(count);

    for (index, &radix) in radices.iter().enumerate() {
        let kind = if index + 1 == count {
            StageKind::Last
        } else if index == 0 {
            StageKind::First
        } else {
            StageKind::Inner
        };
        stages.push(StageDescriptor {
            radix,
            kind,
            twiddle_step: v * stride,
        });
        v *= radix.radix();
    }
    stages
}
