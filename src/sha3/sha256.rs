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
    constants::{SHA3_256_BYTES, SHA3_256_RATE},
    sha3::Sha3,
};

/// SHA3-256 hash function (`SHA3-256(M) = KECCAK[512](M||01, 256)`)
#[derive(Clone, Debug)]
pub struct Sha3_256 {
    inner: Sha3<{ SHA3_256_BYTES }>,
}

impl Default for Sha3_256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha3_256 {
    /// Create a new SHA3-256 hasher instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Sha3::new(SHA3_256_RATE),
        }
    }
}

impl Hasher<{ SHA3_256_BYTES }> for Sha3_256 {
    fn update(&mut self, data: &[u8]) -> Result<()> {
        self.inner.update(data)
    }

    fn finalize(&mut self, output: &mut [u8; SHA3_256_BYTES]) -> Result<()> {
        self.inner.finalize(output)
    }
}
