// Copyright (c) 2025 shashasha developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! A byte-oriented Keccak-f\[1600\] sponge, shared by the SHA3 and SHAKE
//! facades in [`crate::sha3`] and [`crate::shake`].

use anyhow::Result;

use crate::{
    CryptoError, f_1600,
    utils::{state_byte, xor_state_byte},
};

/// Which half of the absorb/squeeze lifecycle a sponge is in.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Phase {
    Absorbing,
    Squeezing,
}

/// A Keccak-f\[1600\] sponge parameterized by its rate.
///
/// Input is absorbed byte-at-a-time, XORed into the rate portion of the
/// state, permuting whenever the rate region fills. `finish` applies the
/// domain-separation byte and the final pad10*1 bit, after which the sponge
/// may only be squeezed.
#[derive(Clone, Debug)]
pub(crate) struct Keccak1600Sponge {
    state: [u64; 25],
    rate: usize,
    offset: usize,
    phase: Phase,
}

impl Keccak1600Sponge {
    /// Create a new sponge with the given rate, in bytes.
    #[must_use]
    pub(crate) fn new(rate: usize) -> Self {
        Self {
            state: [0u64; 25],
            rate,
            offset: 0,
            phase: Phase::Absorbing,
        }
    }

    /// Absorb `data` into the sponge, permuting the state each time the rate
    /// region fills.
    ///
    /// # Errors
    /// Returns [`CryptoError::InvalidPhase`] if called after [`Self::finish`].
    pub(crate) fn absorb(&mut self, data: &[u8]) -> Result<()> {
        if self.phase != Phase::Absorbing {
            return Err(CryptoError::InvalidPhase.into());
        }
        for &byte in data {
            xor_state_byte(&mut self.state, self.offset, byte);
            self.offset += 1;
            if self.offset == self.rate {
                f_1600(&mut self.state)?;
                self.offset = 0;
            }
        }
        Ok(())
    }

    /// Apply the domain separation byte and the final pad10*1 bit, then
    /// switch the sponge into the squeezing phase.
    ///
    /// # Errors
    /// Returns [`CryptoError::InvalidPhase`] if called more than once.
    pub(crate) fn finish(&mut self, ds_byte: u8) -> Result<()> {
        if self.phase != Phase::Absorbing {
            return Err(CryptoError::InvalidPhase.into());
        }
        xor_state_byte(&mut self.state, self.offset, ds_byte);
        xor_state_byte(&mut self.state, self.rate - 1, 0x80);
        f_1600(&mut self.state)?;
        self.offset = 0;
        self.phase = Phase::Squeezing;
        Ok(())
    }

    /// Fill `out` with the next `out.len()` bytes of sponge output,
    /// permuting the state each time the rate region is exhausted.
    ///
    /// Successive calls concatenate, as if one call had squeezed the sum of
    /// the lengths.
    ///
    /// # Errors
    /// Returns [`CryptoError::InvalidPhase`] if called before [`Self::finish`].
    pub(crate) fn squeeze(&mut self, out: &mut [u8]) -> Result<()> {
        if self.phase != Phase::Squeezing {
            return Err(CryptoError::InvalidPhase.into());
        }
        for byte in out {
            if self.offset == self.rate {
                f_1600(&mut self.state)?;
                self.offset = 0;
            }
            *byte = state_byte(&self.state, self.offset);
            self.offset += 1;
        }
        Ok(())
    }
}
