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
use num_complex::Complex;
use num_traits::{Num, PrimInt, Signed};
use std::fmt::Debug;
use std::ops::Neg;

/// Signed 16-bit fraction, one sign bit and 15 fractional bits.
pub type Q15 = i16;
/// Signed 32-bit fraction, one sign bit and 31 fractional bits.
pub type Q31 = i32;

/// Tie-break used whenever a fixed-point value is shifted or a product is narrowed.
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Rounding {
    #[default]
    HalfAwayFromZero,
    HalfToEven,
}

/// Arithmetic right shift rounded to nearest.
pub(crate) fn round_shift<I: PrimInt + Signed>(value: I, shift: u32, rounding: Rounding) -> I {
    if shift == 0 {
        return value;
    }
    let shift = shift as usize;
    let one = I::one();
    let half = one << (shift - 1);
    match rounding {
        Rounding::HalfAwayFromZero => {
            if value < I::zero() {
                -((-value + half) >> shift)
            } else {
                (value + half) >> shift
            }
        }
        Rounding::HalfToEven => {
            let floor = value >> shift;
            let remainder = value - (floor << shift);
            if remainder > half || (remainder == half && (floor & one) == one) {
                floor + one
            } else {
                floor
            }
        }
    }
}

/// Numeric strategy of one sample format.
///
/// Butterflies run on the wide accumulator [`FftSample::Acc`] and are narrowed
/// back with saturation once per stage. Fixed-point formats are interpreted as
/// signed fractions, `value / 2^FRACTION_BITS`.
pub trait FftSample:
    Copy + Default + Debug + PartialEq + Neg<Output = Self> + Send + Sync + 'static
{
    type Acc: Copy + Debug + Num + Neg<Output = Self::Acc> + Send + Sync + 'static;

    /// `false` for floating formats: they are never rescaled.
    const FIXED: bool;

    /// Headroom reported for a zero sample.
    const MAX_HEADROOM: u32;

    fn widen(self) -> Self::Acc;

    /// Saturating conversion back to the storage format.
    fn narrow(acc: Self::Acc) -> Self;

    /// Rounded fractional product `acc * coeff`.
    fn mul_q(acc: Self::Acc, coeff: Self, rounding: Rounding) -> Self::Acc;

    fn shr_round(self, shift: u32, rounding: Rounding) -> Self;

    /// Number of redundant sign bits.
    fn headroom(self) -> u32;

    /// Quantizes a value in `[-1, 1]`, saturating symmetrically.
    fn from_f64(value: f64) -> Self;

    fn to_f64(self) -> f64;
}

macro_rules! impl_fixed_sample {
    ($t:ty, $fraction:expr, $product:ty) => {
        impl FftSample for $t {
            type Acc = i64;

            const FIXED: bool = true;
            const MAX_HEADROOM: u32 = $fraction;

            #[inline]
            fn widen(self) -> i64 {
                self as i64
            }

            #[inline]
            fn narrow(acc: i64) -> Self {
                acc.clamp(<$t>::MIN as i64, <$t>::MAX as i64) as $t
            }

            #[inline]
            fn mul_q(acc: i64, coeff: Self, rounding: Rounding) -> i64 {
                round_shift((acc as $product) * (coeff as $product), $fraction, rounding) as i64
            }

            #[inline]
            fn shr_round(self, shift: u32, rounding: Rounding) -> Self {
                round_shift(self as i64, shift.min($fraction + 1), rounding) as $t
            }

            #[inline]
            fn headroom(self) -> u32 {
                if self < 0 {
                    (!self).leading_zeros() - 1
                } else {
                    self.leading_zeros() - 1
                }
            }

            fn from_f64(value: f64) -> Self {
                let scale = (1u64 << $fraction) as f64;
                let limit = <$t>::MAX as f64;
                (value * scale).round().clamp(-limit, limit) as $t
            }

            fn to_f64(self) -> f64 {
                self as f64 / (1u64 << $fraction) as f64
            }
        }
    };
}

impl_fixed_sample!(i16, 15, i64);
impl_fixed_sample!(i32, 31, i128);

macro_rules! impl_float_sample {
    ($t:ty) => {
        impl FftSample for $t {
            type Acc = $t;

            const FIXED: bool = false;
            const MAX_HEADROOM: u32 = u32::MAX;

            #[inline]
            fn widen(self) -> $t {
                self
            }

            #[inline]
            fn narrow(acc: $t) -> Self {
                acc
            }

            #[inline]
            fn mul_q(acc: $t, coeff: Self, _: Rounding) -> $t {
                acc * coeff
            }

            #[inline]
            fn shr_round(self, _: u32, _: Rounding) -> Self {
                self
            }

            #[inline]
            fn headroom(self) -> u32 {
                u32::MAX
            }

            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_float_sample!(f32);
impl_float_sample!(f64);

/// Loads a sample into the accumulator domain, applying the stage shift.
#[inline]
pub(crate) fn load_scaled<T: FftSample>(
    value: Complex<T>,
    shift: u32,
    rounding: Rounding,
) -> Complex<T::Acc> {
    Complex {
        re: value.re.shr_round(shift, rounding).widen(),
        im: value.im.shr_round(shift, rounding).widen(),
    }
}

#[inline]
pub(crate) fn store_saturated<T: FftSample>(value: Complex<T::Acc>) -> Complex<T> {
    Complex {
        re: T::narrow(value.re),
        im: T::narrow(value.im),
    }
}

#[inline]
pub(crate) fn mul_real<T: FftSample>(
    value: Complex<T::Acc>,
    coeff: T,
    rounding: Rounding,
) -> Complex<T::Acc> {
    Complex {
        re: T::mul_q(value.re, coeff, rounding),
        im: T::mul_q(value.im, coeff, rounding),
    }
}

#[inline]
pub(crate) fn mul_twiddle<T: FftSample>(
    value: Complex<T::Acc>,
    twiddle: Complex<T>,
    rounding: Rounding,
) -> Complex<T::Acc> {
    Complex {
        re: T::mul_q(value.re, twiddle.re, rounding) - T::mul_q(value.im, twiddle.im, rounding),
        im: T::mul_q(value.re, twiddle.im, rounding) + T::mul_q(value.im, twiddle.re, rounding),
    }
}

/// Headroom of a complex sample, the smaller of both components.
#[inline]
pub(crate) fn complex_headroom<T: FftSample>(value: Complex<T>) -> u32 {
    value.re.headroom().min(value.im.headroom())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        let r = Rounding::HalfAwayFromZero;
        assert_eq!(round_shift(5i64, 1, r), 3);
        assert_eq!(round_shift(-5i64, 1, r), -3);
        assert_eq!(round_shift(4i64, 1, r), 2);
        assert_eq!(round_shift(6i64, 2, r), 2);
        assert_eq!(round_shift(-6i64, 2, r), -2);
        assert_eq!(round_shift(-7i64, 0, r), -7);
    }

    #[test]
    fn test_round_half_to_even() {
        let r = Rounding::HalfToEven;
        assert_eq!(round_shift(5i64, 1, r), 2);
        assert_eq!(round_shift(7i64, 1, r), 4);
        assert_eq!(round_shift(-5i64, 1, r), -2);
        assert_eq!(round_shift(-7i64, 1, r), -4);
        assert_eq!(round_shift(11i64, 2, r), 3);
        assert_eq!(round_shift(-11i64, 2, r), -3);
    }

    #[test]
    fn test_headroom() {
        assert_eq!(0i16.headroom(), 15);
        assert_eq!((-1i16).headroom(), 15);
        assert_eq!(1i16.headroom(), 14);
        assert_eq!(16384i16.headroom(), 0);
        assert_eq!((-16384i16).headroom(), 1);
        assert_eq!((-16385i16).headroom(), 0);
        assert_eq!(i16::MIN.headroom(), 0);
        assert_eq!(i16::MAX.headroom(), 0);
        assert_eq!(0i32.headroom(), 31);
        assert_eq!(0x0000_ffffi32.headroom(), 15);
        assert_eq!(
            complex_headroom(Complex::new(0x0100i16, -0x1000i16)),
            (-0x1000i16).headroom()
        );
    }

    #[test]
    fn test_quantization() {
        assert_eq!(i16::from_f64(1.0), i16::MAX);
        assert_eq!(i16::from_f64(-1.0), -i16::MAX);
        assert_eq!(i16::from_f64(0.5), 16384);
        assert_eq!(i16::from_f64(-0.5), -16384);
        assert_eq!(i32::from_f64(0.25), 1 << 29);
        assert!((i16::from_f64(0.3).to_f64() - 0.3).abs() < 1.0 / 32768.0);
        assert_eq!(f32::from_f64(0.25), 0.25f32);
    }

    #[test]
    fn test_mul_q() {
        let r = Rounding::HalfAwayFromZero;
        assert_eq!(i16::mul_q(1000, 16384, r), 500);
        assert_eq!(i16::mul_q(-1001, 16384, r), -501);
        assert_eq!(i32::mul_q(1 << 40, 1 << 30, r), 1 << 39);
        assert_eq!(f64::mul_q(3.0, 0.5, r), 1.5);
    }

    #[test]
    fn test_shr_round_saturates_shift() {
        let r = Rounding::HalfAwayFromZero;
        assert_eq!(i16::MAX.shr_round(1, r), 16384);
        assert_eq!(i16::MIN.shr_round(1, r), -16384);
        assert_eq!(i16::MAX.shr_round(40, r), 0);
        assert_eq!(123.5f32.shr_round(3, r), 123.5);
    }

    #[test]
    fn test_narrow_saturates() {
        assert_eq!(i16::narrow(40000), i16::MAX);
        assert_eq!(i16::narrow(-40000), i16::MIN);
        assert_eq!(i32::narrow(1 << 40), i32::MAX);
    }

    #[test]
    fn test_mul_twiddle_rotates() {
        let r = Rounding::HalfAwayFromZero;
        let minus_j = Complex::new(0i16, -i16::MAX);
        let value = Complex::new(1000i64, 2000i64);
        let rotated = mul_twiddle::<i16>(value, minus_j, r);
        assert!((rotated.re - 2000).abs() <= 1);
        assert!((rotated.im + 1000).abs() <= 1);
    }
}
