#![no_main]

use blockfft::{BlockFft, FftExecutor, Rounding, ScaleConfig, ScalePolicy};
use libfuzzer_sys::fuzz_target;
use num_complex::Complex;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    size: u16,
    re: i16,
    im: i16,
    step: i16,
    policy: bool,
    even: bool,
}

fuzz_target!(|data: Target| {
    if data.size == 0 || data.size > 15000 {
        return;
    }
    let scale = ScaleConfig::new(
        if data.policy {
            ScalePolicy::Dynamic
        } else {
            ScalePolicy::Static
        },
        if data.even {
            Rounding::HalfToEven
        } else {
            Rounding::HalfAwayFromZero
        },
    );
    let size = data.size as usize;
    let Ok(forward) = BlockFft::make_forward_fft::<i16>(size, scale) else {
        return;
    };
    let backward = BlockFft::make_inverse_fft::<i16>(size, scale).unwrap();
    let mut x = (0..size)
        .map(|i| {
            Complex::new(
                data.re.wrapping_add(data.step.wrapping_mul(i as i16)),
                data.im.wrapping_sub(data.step.wrapping_mul(i as i16)),
            )
        })
        .collect::<Vec<_>>();
    let mut y = vec![Complex::<i16>::default(); size];
    let s0 = forward.execute(&mut x, &mut y).unwrap();
    let s1 = backward.execute(&mut y, &mut x).unwrap();
    assert!(s0 + s1 <= 64, "shift {s0} + {s1} for size {size}");
});
