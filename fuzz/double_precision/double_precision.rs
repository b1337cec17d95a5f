#![no_main]

use blockfft::{BlockFft, FftExecutor, ScaleConfig};
use libfuzzer_sys::fuzz_target;
use num_complex::Complex;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    size: u16,
    re: f64,
    im: f64,
}

fuzz_target!(|data: Target| {
    if data.size == 0 || data.size > 15000 {
        return;
    }
    let size = data.size as usize;
    let Ok(forward) = BlockFft::make_forward_fft::<f64>(size, ScaleConfig::default()) else {
        return;
    };
    let backward = BlockFft::make_inverse_fft::<f64>(size, ScaleConfig::default()).unwrap();
    let mut x = vec![Complex::new(data.re, data.im); size];
    let mut y = vec![Complex::<f64>::default(); size];
    assert_eq!(forward.execute(&mut x, &mut y).unwrap(), 0);
    assert_eq!(backward.execute(&mut y, &mut x).unwrap(), 0);
});
