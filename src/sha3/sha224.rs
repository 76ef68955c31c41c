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
    constants::{SHA3_224_BYTES, SHA3_224_RATE},
    sha3::Sha3,
};

/// SHA3-224 hash function (`SHA3-224(M) = KECCAK[448](M||01, 224)`)
#[derive(Clone, Debug)]
pub struct Sha3_224 {
    inner: Sha3<{ SHA3_224_BYTES }>,
}

impl Default for Sha3_224 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha3_224 {
    /// Create a new SHA3-224 hasher instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Sha3::new(SHA3_224_RATE),
        }
    }
}

impl Hasher<{ SHA3_224_BYTES }> for Sha3_224 {
    fn update(&mut self, data: &[u8]) -> Result<()> {
        self.inner.update(data)
    }

    fn finalize(&mut self, output: &mut [u8; SHA3_224_BYTES]) -> Result<()> {
        self.inner.finalize(output)
    }
}
