// Copyright (c) 2025 shashasha developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

use anyhow::Result;

use crate::{XofHasher, constants::SHAKE_128_RATE, shake::Shake};

/// SHAKE128 XOF function (`SHAKE128(M, d) = KECCAK[256](M||1111, d)`)
#[derive(Clone, Debug)]
pub struct Shake128 {
    inner: Shake,
}

impl Shake128 {
    /// Create a new SHAKE128 XOF hasher instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Shake::new(SHAKE_128_RATE),
        }
    }
}

impl Default for Shake128 {
    fn default() -> Self {
        Self::new()
    }
}

impl XofHasher for Shake128 {
    fn update(&mut self, data: &[u8]) -> Result<()> {
        self.inner.update(data)
    }

    fn finish(&mut self) -> Result<()> {
        self.inner.finish()
    }

    fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
        self.inner.squeeze(output)
    }
}
