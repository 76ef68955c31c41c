// Copyright (c) 2025 shashasha developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

use thiserror::Error;

/// Errors produced by the primitives in this crate.
#[derive(Copy, Clone, Debug, Error)]
pub enum CryptoError {
    /// Thrown if a CBC operation is given a length of zero or one that is not
    /// a multiple of the AES block size.
    #[error("invalid length {0}, expected a positive multiple of 16")]
    InvalidLength(usize),
    /// Thrown if a sponge is absorbed into after `finish` has been called, or
    /// squeezed from before it has.
    #[error("invalid sponge phase for this operation")]
    InvalidPhase,
    /// Thrown if the round count is not allowed for the given `Lane` size
    #[error("invalid round count {0}")]
    InvalidRoundCount(usize),
    /// Thrown if the truncate function fails for the given round constant
    #[error("truncate failed for round constant {0:#x}")]
    TruncateFailed(u64),
}
