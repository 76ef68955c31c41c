// Copyright (c) 2025 shashasha developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

use anyhow::Result;

use crate::sponge::Keccak1600Sponge;

pub(crate) mod shake128;
pub(crate) mod shake256;

/// The FIPS-202 domain separation suffix for SHAKE (`1111`, bit-reversed into a byte).
const SHAKE_DS: u8 = 0x1F;

/// SHA-3 XOF hash functions (SHAKE128 and SHAKE256)
#[derive(Clone, Debug)]
struct Shake {
    sponge: Keccak1600Sponge,
}

impl Shake {
    fn new(rate: usize) -> Self {
        Self {
            sponge: Keccak1600Sponge::new(rate),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        self.sponge.absorb(data)
    }

    fn finish(&mut self) -> Result<()> {
        self.sponge.finish(SHAKE_DS)
    }

    fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
        self.sponge.squeeze(output)
    }
}
