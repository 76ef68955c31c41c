// Copyright (c) 2025 shashasha developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! The AES block cipher (FIPS-197): key schedule, ECB and CBC entry points.

mod cbc;
mod cipher;
pub(crate) mod variant;

use anyhow::Result;

pub use self::cbc::{aes_cbc_decrypt, aes_cbc_encrypt};
pub use self::variant::{Aes128, Aes192, Aes256, AesVariant};
use self::cipher::{KeySchedule, decrypt_block, encrypt_block};
use crate::constants::AES_BLOCK_BYTES;

/// Encrypt a single 16-byte block under `key` (`V::KEY_BYTES` bytes long).
///
/// # Errors
/// Never fails. Unlike the CBC entry points, a single block has no length
/// to validate: `plain`/`cipher` and `out` are fixed-size 16-byte arrays,
/// and `key` is expected to be `V::KEY_BYTES` bytes long (see
/// [`AesVariant::KEY_BYTES`]).
pub fn aes_ecb_encrypt<V: AesVariant>(
    key: &[u8],
    plain: &[u8; AES_BLOCK_BYTES],
    out: &mut [u8; AES_BLOCK_BYTES],
) -> Result<()> {
    let schedule = KeySchedule::<V>::new(key);
    *out = *plain;
    encrypt_block(&schedule, out);
    Ok(())
}

/// Decrypt a single 16-byte block under `key` (`V::KEY_BYTES` bytes long).
///
/// # Errors
/// Never fails. Unlike the CBC entry points, a single block has no length
/// to validate: `plain`/`cipher` and `out` are fixed-size 16-byte arrays,
/// and `key` is expected to be `V::KEY_BYTES` bytes long (see
/// [`AesVariant::KEY_BYTES`]).
pub fn aes_ecb_decrypt<V: AesVariant>(
    key: &[u8],
    cipher: &[u8; AES_BLOCK_BYTES],
    out: &mut [u8; AES_BLOCK_BYTES],
) -> Result<()> {
    let schedule = KeySchedule::<V>::new(key);
    *out = *cipher;
    decrypt_block(&schedule, out);
    Ok(())
}
