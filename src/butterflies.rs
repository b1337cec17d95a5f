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
use crate::sample::{FftSample, Rounding, mul_real};
use crate::util::compute_twiddle;
use num_complex::Complex;
use std::ops::Neg;

pub(crate) const MAX_RADIX: usize = 8;

/// Radices a stage can combine.
///
/// `Eight` only appears as the terminal stage of power-of-two inverse plans.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Radix {
    Two,
    Three,
    Four,
    Five,
    Six,
    Eight,
}

impl Radix {
    #[inline]
    pub fn radix(self) -> usize {
        match self {
            Radix::Two => 2,
            Radix::Three => 3,
            Radix::Four => 4,
            Radix::Five => 5,
            Radix::Six => 6,
            Radix::Eight => 8,
        }
    }

    /// Worst case growth of one stage in bits, `ceil(log2(R·√2))`.
    #[inline]
    pub(crate) fn required_headroom(self) -> u32 {
        match self {
            Radix::Two => 2,
            Radix::Three | Radix::Four | Radix::Five => 3,
            Radix::Six | Radix::Eight => 4,
        }
    }

    /// Applies the radix-R DFT matrix to `lanes[..R]` in place.
    #[inline]
    pub(crate) fn combine<T: FftSample>(
        self,
        lanes: &mut [Complex<T::Acc>],
        constants: &ButterflyConstants<T>,
        rounding: Rounding,
    ) {
        match self {
            Radix::Two => {
                let (y0, y1) = butterfly2(lanes[0], lanes[1]);
                lanes[0] = y0;
                lanes[1] = y1;
            }
            Radix::Three => {
                let (y0, y1, y2) = butterfly3(lanes[0], lanes[1], lanes[2], constants, rounding);
                lanes[0] = y0;
                lanes[1] = y1;
                lanes[2] = y2;
            }
            Radix::Four => {
                let (y0, y1, y2, y3) =
                    butterfly4(lanes[0], lanes[1], lanes[2], lanes[3], constants.direction);
                lanes[0] = y0;
                lanes[1] = y1;
                lanes[2] = y2;
                lanes[3] = y3;
            }
            Radix::Five => butterfly5(lanes, constants, rounding),
            Radix::Six => butterfly6(lanes, constants, rounding),
            Radix::Eight => butterfly8(lanes, constants, rounding),
        }
    }
}

/// Fixed coefficients of the odd radices, quantized once per plan.
#[derive(Debug, Copy, Clone)]
pub(crate) struct ButterflyConstants<T> {
    direction: FftDirection,
    twiddle3: Complex<T>,
    twiddle5_1: Complex<T>,
    twiddle5_2: Complex<T>,
    root_half: T,
}

fn quantize<T: FftSample>(value: Complex<f64>) -> Complex<T> {
    Complex {
        re: T::from_f64(value.re),
        im: T::from_f64(value.im),
    }
}

impl<T: FftSample> ButterflyConstants<T> {
    pub(crate) fn new(direction: FftDirection) -> ButterflyConstants<T> {
        ButterflyConstants {
            direction,
            twiddle3: quantize(compute_twiddle(1, 3, direction)),
            twiddle5_1: quantize(compute_twiddle(1, 5, direction)),
            twiddle5_2: quantize(compute_twiddle(2, 5, direction)),
            root_half: T::from_f64(0.5f64.sqrt()),
        }
    }

    #[inline]
    pub(crate) fn direction(&self) -> FftDirection {
        self.direction
    }
}

#[inline]
pub(crate) fn rotate_90<T: Copy + Neg<Output = T>>(
    value: Complex<T>,
    direction: FftDirection,
) -> Complex<T> {
    match direction {
        FftDirection::Forward => Complex {
            re: value.im,
            im: -value.re,
        },
        FftDirection::Inverse => Complex {
            re: -value.im,
            im: value.re,
        },
    }
}

#[inline]
fn butterfly2<A: Copy + num_traits::Num>(
    u0: Complex<A>,
    u1: Complex<A>,
) -> (Complex<A>, Complex<A>) {
    (u0 + u1, u0 - u1)
}

#[inline]
fn butterfly3<T: FftSample>(
    u0: Complex<T::Acc>,
    u1: Complex<T::Acc>,
    u2: Complex<T::Acc>,
    constants: &ButterflyConstants<T>,
    rounding: Rounding,
) -> (Complex<T::Acc>, Complex<T::Acc>, Complex<T::Acc>) {
    let twiddle = constants.twiddle3;
    let xp = u1 + u2;
    let xn = u1 - u2;
    let sum = u0 + xp;

    let w_1 = u0 + mul_real(xp, twiddle.re, rounding);
    let rot = mul_real(xn, twiddle.im, rounding);

    let y1 = Complex {
        re: w_1.re - rot.im,
        im: w_1.im + rot.re,
    };
    let y2 = Complex {
        re: w_1.re + rot.im,
        im: w_1.im - rot.re,
    };
    (sum, y1, y2)
}

#[inline]
fn butterfly4<A: Copy + num_traits::Num + Neg<Output = A>>(
    a: Complex<A>,
    b: Complex<A>,
    c: Complex<A>,
    d: Complex<A>,
    direction: FftDirection,
) -> (Complex<A>, Complex<A>, Complex<A>, Complex<A>) {
    let t0 = a + c;
    let t1 = a - c;
    let t2 = b + d;
    let t3 = rotate_90(b - d, direction);
    (t0 + t2, t1 + t3, t0 - t2, t1 - t3)
}

#[inline]
fn butterfly5<T: FftSample>(
    lanes: &mut [Complex<T::Acc>],
    constants: &ButterflyConstants<T>,
    rounding: Rounding,
) {
    let tw1 = constants.twiddle5_1;
    let tw2 = constants.twiddle5_2;
    let (u0, u1, u2, u3, u4) = (lanes[0], lanes[1], lanes[2], lanes[3], lanes[4]);

    let x14p = u1 + u4;
    let x14n = u1 - u4;
    let x23p = u2 + u3;
    let x23n = u2 - u3;
    lanes[0] = u0 + x14p + x23p;

    let a14 = u0 + mul_real(x14p, tw1.re, rounding) + mul_real(x23p, tw2.re, rounding);
    let a23 = u0 + mul_real(x14p, tw2.re, rounding) + mul_real(x23p, tw1.re, rounding);
    let b14 = mul_real(x14n, tw1.im, rounding) + mul_real(x23n, tw2.im, rounding);
    let b23 = mul_real(x14n, tw2.im, rounding) - mul_real(x23n, tw1.im, rounding);

    lanes[1] = Complex {
        re: a14.re - b14.im,
        im: a14.im + b14.re,
    };
    lanes[4] = Complex {
        re: a14.re + b14.im,
        im: a14.im - b14.re,
    };
    lanes[2] = Complex {
        re: a23.re - b23.im,
        im: a23.im + b23.re,
    };
    lanes[3] = Complex {
        re: a23.re + b23.im,
        im: a23.im - b23.re,
    };
}

/// Good-Thomas 2x3: radix-2 split over (0,3), (2,5), (4,1) then two radix-3 passes.
#[inline]
fn butterfly6<T: FftSample>(
    lanes: &mut [Complex<T::Acc>],
    constants: &ButterflyConstants<T>,
    rounding: Rounding,
) {
    let (s0, d0) = butterfly2(lanes[0], lanes[3]);
    let (s1, d1) = butterfly2(lanes[2], lanes[5]);
    let (s2, d2) = butterfly2(lanes[4], lanes[1]);

    let (y0, y4, y2) = butterfly3(s0, s1, s2, constants, rounding);
    let (y3, y1, y5) = butterfly3(d0, d1, d2, constants, rounding);

    lanes[0] = y0;
    lanes[1] = y1;
    lanes[2] = y2;
    lanes[3] = y3;
    lanes[4] = y4;
    lanes[5] = y5;
}

#[inline]
fn butterfly8<T: FftSample>(
    lanes: &mut [Complex<T::Acc>],
    constants: &ButterflyConstants<T>,
    rounding: Rounding,
) {
    let direction = constants.direction;
    let (u0, u2, u4, u6) = butterfly4(lanes[0], lanes[2], lanes[4], lanes[6], direction);
    let (u1, u3, u5, u7) = butterfly4(lanes[1], lanes[3], lanes[5], lanes[7], direction);

    let u3 = mul_real(rotate_90(u3, direction) + u3, constants.root_half, rounding);
    let u5 = rotate_90(u5, direction);
    let u7 = mul_real(rotate_90(u7, direction) - u7, constants.root_half, rounding);

    let (y0, y4) = butterfly2(u0, u1);
    let (y1, y5) = butterfly2(u2, u3);
    let (y2, y6) = butterfly2(u4, u5);
    let (y3, y7) = butterfly2(u6, u7);

    lanes[0] = y0;
    lanes[1] = y1;
    lanes[2] = y2;
    lanes[3] = y3;
    lanes[4] = y4;
    lanes[5] = y5;
    lanes[6] = y6;
    lanes[7] = y7;
}
