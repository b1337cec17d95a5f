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
use std::error::Error;
use std::fmt::Formatter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockFftError {
    OutOfMemory(usize),
    InvalidInPlaceLength(usize, usize),
    UnsupportedLength(usize),
    OddRealLength(usize),
    ZeroSizedFft,
}

impl Error for BlockFftError {}

impl std::fmt::Display for BlockFftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockFftError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} bytes to vector",))
            }
            BlockFftError::InvalidInPlaceLength(s0, s1) => f.write_fmt(format_args!(
                "Buffer length expected to be {s0}, but it was {s1}"
            )),
            BlockFftError::UnsupportedLength(n) => f.write_fmt(format_args!(
                "Length {n} cannot be factored into radix 2, 3, 4, 5 and 6 stages"
            )),
            BlockFftError::OddRealLength(n) => f.write_fmt(format_args!(
                "Real transforms require an even length, but it was {n}"
            )),
            BlockFftError::ZeroSizedFft => f.write_str("Cannot execute FFT on zero-sized buffers"),
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::BlockFftError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;

#[cfg(test)]
mod tests {
    use super::*;

    fn allocate(n: usize) -> Result<Vec<u8>, BlockFftError> {
        Ok(try_vec![0u8; n])
    }

    #[test]
    fn test_try_vec_reports_out_of_memory() {
        assert_eq!(allocate(16).unwrap().len(), 16);
        assert_eq!(
            allocate(usize::MAX).unwrap_err(),
            BlockFftError::OutOfMemory(usize::MAX)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            BlockFftError::InvalidInPlaceLength(16, 8).to_string(),
            "Buffer length expected to be 16, but it was 8"
        );
        assert_eq!(
            BlockFftError::UnsupportedLength(7).to_string(),
            "Length 7 cannot be factored into radix 2, 3, 4, 5 and 6 stages"
        );
    }
}
