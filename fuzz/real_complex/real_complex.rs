#![no_main]

use blockfft::{BlockFft, C2RFftExecutor, R2CFftExecutor, ScaleConfig};
use libfuzzer_sys::fuzz_target;
use num_complex::Complex;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    size: u16,
    samples: Vec<i16>,
}

fuzz_target!(|data: Target| {
    let size = data.size as usize * 2;
    if size == 0 || size > 30000 || data.samples.is_empty() {
        return;
    }
    let Ok(forward) = BlockFft::make_r2c_fft::<i16>(size, ScaleConfig::default()) else {
        return;
    };
    let inverse = BlockFft::make_c2r_fft::<i16>(size, ScaleConfig::default()).unwrap();
    let input = data.samples.iter().copied().cycle().take(size).collect::<Vec<_>>();
    let mut spectrum = vec![Complex::<i16>::default(); forward.complex_length()];
    let mut scratch = vec![Complex::<i16>::default(); forward.scratch_length()];
    forward.execute(&input, &mut scratch, &mut spectrum).unwrap();
    let mut output = vec![0i16; size];
    let mut scratch = vec![Complex::<i16>::default(); inverse.scratch_length()];
    inverse.execute(&spectrum, &mut scratch, &mut output).unwrap();
});
