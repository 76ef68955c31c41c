// Copyright (c) 2025 shashasha developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

use anyhow::Result;

use crate::{
    Hasher,
    constants::{SHA3_384_BYTES, SHA3_384_RATE},
    sha3::Sha3,
};

/// SHA3-384 hash function (`SHA3-384(M) = KECCAK[768](M||01, 384)`)
#[derive(Clone, Debug)]
pub struct Sha3_384 {
    inner: Sha3<{ SHA3_384_BYTES }>,
}

impl Default for Sha3_384 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha3_384 {
    /// Create a new SHA3-384 hasher instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Sha3::new(SHA3_384_RATE),
        }
    }
}

impl Hasher<{ SHA3_384_BYTES }> for Sha3_384 {
    fn update(&mut self, data: &[u8]) -> Result<()> {
        self.inner.update(data)
    }

    fn finalize(&mut self, output: &mut [u8; SHA3_384_BYTES]) -> Result<()> {
        self.inner.finalize(output)
    }
}

#[cfg(test)]
mod test {
    use anyhow::Result;

    use crate::{Hasher, Sha3_384, constants::SHA3_384_BYTES, utils::b2h};

    #[test]
    /// <https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Standards-and-Guidelines/documents/examples/SHA3-384_Msg0.pdf>
    fn empty_string() -> Result<()> {
        let mut hasher = Sha3_384::new();
        let mut result = [0u8; SHA3_384_BYTES];
        hasher.finalize(&mut result)?;
        assert_eq!(
            "0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f00",
            b2h(&result)
        );
        Ok(())
    }

    #[test]
    fn streaming_matches_one_shot() -> Result<()> {
        let mut streamed = Sha3_384::new();
        streamed.update(b"Hello, ")?;
        streamed.update(b"world!")?;
        let mut streamed_out = [0u8; SHA3_384_BYTES];
        streamed.finalize(&mut streamed_out)?;

        let mut one_shot = Sha3_384::new();
        one_shot.update(b"Hello, world!")?;
        let mut one_shot_out = [0u8; SHA3_384_BYTES];
        one_shot.finalize(&mut one_shot_out)?;

        assert_eq!(streamed_out, one_shot_out);
        Ok(())
    }
}
