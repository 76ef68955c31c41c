// Copyright (c) 2025 shashasha developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! SHA-1 (FIPS 180-4): Merkle-Damgård framing over a 512-bit block compression
//! function, streamed the same way the sponge in [`crate::sponge`] is.

use anyhow::Result;

use crate::constants::{SHA1_BLOCK_BYTES, SHA1_BYTES, SHA1_H0, SHA1_K};
use crate::error::CryptoError;
use crate::traits::Hasher;

fn f(round: usize, b: u32, c: u32, d: u32) -> u32 {
    match round {
        0..20 => (b & c) | (!b & d),
        20..40 | 60..80 => b ^ c ^ d,
        40..60 => (b & c) | (b & d) | (c & d),
        _ => unreachable!("round index is always below 80"),
    }
}

fn compress(h: &mut [u32; 5], block: &[u8]) {
    debug_assert_eq!(block.len(), SHA1_BLOCK_BYTES);
    let mut w = [0u32; 80];
    for (i, word) in w.iter_mut().take(16).enumerate() {
        let off = i * 4;
        *word = u32::from_be_bytes([block[off], block[off + 1], block[off + 2], block[off + 3]]);
    }
    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *h;
    for (i, word) in w.iter().enumerate() {
        let k = SHA1_K[i / 20];
        let temp = a
            .rotate_left(5)
            .wrapping_add(f(i, b, c, d))
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(*word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    h[0] = h[0].wrapping_add(a);
    h[1] = h[1].wrapping_add(b);
    h[2] = h[2].wrapping_add(c);
    h[3] = h[3].wrapping_add(d);
    h[4] = h[4].wrapping_add(e);
}

/// A streaming SHA-1 hasher.
#[derive(Clone, Debug)]
pub struct Sha1 {
    h: [u32; 5],
    buffer: [u8; SHA1_BLOCK_BYTES],
    buffered: usize,
    total_len: u64,
    finalized: bool,
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha1 {
    /// Create a new SHA-1 hasher instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            h: SHA1_H0,
            buffer: [0u8; SHA1_BLOCK_BYTES],
            buffered: 0,
            total_len: 0,
            finalized: false,
        }
    }
}

impl Hasher<SHA1_BYTES> for Sha1 {
    fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(CryptoError::InvalidPhase.into());
        }
        self.total_len = self.total_len.wrapping_add(data.len() as u64);
        let mut data = data;

        if self.buffered > 0 {
            let needed = SHA1_BLOCK_BYTES - self.buffered;
            let take = needed.min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
            if self.buffered == SHA1_BLOCK_BYTES {
                let block = self.buffer;
                compress(&mut self.h, &block);
                self.buffered = 0;
            }
        }

        let mut chunks = data.chunks_exact(SHA1_BLOCK_BYTES);
        for chunk in &mut chunks {
            compress(&mut self.h, chunk);
        }
        let remainder = chunks.remainder();
        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffered = remainder.len();
        Ok(())
    }

    fn finalize(&mut self, output: &mut [u8; SHA1_BYTES]) -> Result<()> {
        if self.finalized {
            return Err(CryptoError::InvalidPhase.into());
        }
        self.finalized = true;

        let bit_len = self.total_len.wrapping_mul(8);
        let mut pad = [0u8; 2 * SHA1_BLOCK_BYTES];
        pad[0] = 0x80;
        let padded_len = if self.buffered < SHA1_BLOCK_BYTES - 8 {
            SHA1_BLOCK_BYTES - self.buffered
        } else {
            2 * SHA1_BLOCK_BYTES - self.buffered
        };
        pad[padded_len - 8..padded_len].copy_from_slice(&bit_len.to_be_bytes());

        let buffered = self.buffered;
        let mut buffer = self.buffer;
        for &byte in &pad[..padded_len] {
            buffer[self.buffered] = byte;
            self.buffered += 1;
            if self.buffered == SHA1_BLOCK_BYTES {
                let block = buffer;
                compress(&mut self.h, &block);
                self.buffered = 0;
            }
        }
        self.buffered = buffered;

        for (word, out_chunk) in self.h.iter().zip(output.chunks_exact_mut(4)) {
            out_chunk.copy_from_slice(&word.to_be_bytes());
        }
        Ok(())
    }
}

/// Swap each of the five 4-byte chaining words of a SHA-1 digest between
/// big- and little-endian, in place.
///
/// [`Hasher::finalize`] always produces the big-endian layout; call this on
/// the result if the consumer expects little-endian words instead.
pub fn sha1_swap_endian(digest: &mut [u8; SHA1_BYTES]) {
    for word in digest.chunks_exact_mut(4) {
        word.reverse();
    }
}

#[cfg(test)]
mod test {
    use anyhow::Result;

    use crate::{Hasher, Sha1, constants::SHA1_BYTES, utils::b2h};

    #[test]
    /// <https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Standards-and-Guidelines/documents/examples/SHA1.pdf>
    fn empty_string() -> Result<()> {
        let mut hasher = Sha1::new();
        let mut result = [0u8; SHA1_BYTES];
        hasher.finalize(&mut result)?;
        assert_eq!("da39a3ee5e6b4b0d3255bfef95601890afd80709", b2h(&result));
        Ok(())
    }

    #[test]
    /// Same NIST example document, the single-block "abc" message.
    fn three_bytes() -> Result<()> {
        let mut hasher = Sha1::new();
        hasher.update(b"abc")?;
        let mut result = [0u8; SHA1_BYTES];
        hasher.finalize(&mut result)?;
        assert_eq!("a9993e364706816aba3e25717850c26c9cd0d89d", b2h(&result));
        Ok(())
    }

    #[test]
    /// The NIST two-block message, exercising the padding length that spills
    /// into a second block.
    fn two_block_message() -> Result<()> {
        let mut hasher = Sha1::new();
        hasher.update(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq")?;
        let mut result = [0u8; SHA1_BYTES];
        hasher.finalize(&mut result)?;
        assert_eq!("84983e441c3bd26ebaae4aa1f95129e5e54670f1", b2h(&result));
        Ok(())
    }

    #[test]
    fn streaming_matches_one_shot() -> Result<()> {
        let mut streamed = Sha1::new();
        streamed.update(b"the quick brown fox ")?;
        streamed.update(b"jumps over the lazy dog")?;
        let mut streamed_out = [0u8; SHA1_BYTES];
        streamed.finalize(&mut streamed_out)?;

        let mut one_shot = Sha1::new();
        one_shot.update(b"the quick brown fox jumps over the lazy dog")?;
        let mut one_shot_out = [0u8; SHA1_BYTES];
        one_shot.finalize(&mut one_shot_out)?;

        assert_eq!(streamed_out, one_shot_out);
        Ok(())
    }

    #[test]
    fn finalize_after_finalize_is_an_error() -> Result<()> {
        let mut hasher = Sha1::new();
        let mut result = [0u8; SHA1_BYTES];
        hasher.finalize(&mut result)?;
        assert!(hasher.finalize(&mut result).is_err());
        Ok(())
    }

    #[test]
    fn exactly_one_block_of_input() -> Result<()> {
        // 64 bytes of input lands exactly on the block boundary, forcing the
        // padding to spill into a second block entirely made of padding.
        let mut hasher = Sha1::new();
        hasher.update(&[0x61u8; 64])?;
        let mut result = [0u8; SHA1_BYTES];
        hasher.finalize(&mut result)?;

        let mut one_shot = Sha1::new();
        one_shot.update(&[0x61u8; 32])?;
        one_shot.update(&[0x61u8; 32])?;
        let mut one_shot_out = [0u8; SHA1_BYTES];
        one_shot.finalize(&mut one_shot_out)?;
        assert_eq!(result, one_shot_out);
        Ok(())
    }

    #[test]
    fn swap_endian_reverses_each_word_and_is_its_own_inverse() -> Result<()> {
        use super::sha1_swap_endian;

        let mut hasher = Sha1::new();
        let mut digest = [0u8; SHA1_BYTES];
        hasher.finalize(&mut digest)?;
        let big_endian = digest;

        sha1_swap_endian(&mut digest);
        assert_ne!(big_endian, digest);
        // da39a3ee, the first big-endian word, reverses to ee a3 39 da.
        assert_eq!(&digest[0..4], &[0xee, 0xa3, 0x39, 0xda]);

        sha1_swap_endian(&mut digest);
        assert_eq!(big_endian, digest);
        Ok(())
    }
}
