// Copyright (c) 2025 shashasha developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! CBC chaining over the single-block AES primitives.

use anyhow::Result;

use crate::aes::cipher::{KeySchedule, decrypt_block, encrypt_block};
use crate::aes::variant::AesVariant;
use crate::constants::AES_BLOCK_BYTES;
use crate::error::CryptoError;
use crate::utils::xor_into;

fn check_length(len: usize) -> Result<()> {
    if len == 0 || len % AES_BLOCK_BYTES != 0 {
        return Err(CryptoError::InvalidLength(len).into());
    }
    Ok(())
}

/// Encrypt `plain` under CBC chaining, writing `plain.len()` bytes to `out`.
///
/// `plain.len()` MUST be a positive multiple of the AES block size;
/// `out` and `plain` may alias (encryption proceeds block-by-block, each
/// block only touching its own 16 bytes of `out` after it has finished
/// reading the matching 16 bytes of `plain`).
///
/// # Errors
/// Returns [`CryptoError::InvalidLength`] if `plain.len()` is zero or not a
/// multiple of 16.
pub fn aes_cbc_encrypt<V: AesVariant>(
    key: &[u8],
    iv: &[u8; AES_BLOCK_BYTES],
    plain: &[u8],
    out: &mut [u8],
) -> Result<()> {
    check_length(plain.len())?;
    debug_assert_eq!(plain.len(), out.len());
    let schedule = KeySchedule::<V>::new(key);
    let mut chain = *iv;
    for (plain_block, out_block) in plain
        .chunks_exact(AES_BLOCK_BYTES)
        .zip(out.chunks_exact_mut(AES_BLOCK_BYTES))
    {
        let mut block = [0u8; AES_BLOCK_BYTES];
        block.copy_from_slice(plain_block);
        xor_into(&mut block, &chain);
        encrypt_block(&schedule, &mut block);
        out_block.copy_from_slice(&block);
        chain = block;
    }
    Ok(())
}

/// Decrypt `cipher` under CBC chaining, writing `cipher.len()` bytes to `out`.
///
/// Aliasing `out == cipher` is safe: each block's ciphertext is saved as the
/// next chaining value before `out` is overwritten.
///
/// # Errors
/// Returns [`CryptoError::InvalidLength`] if `cipher.len()` is zero or not a
/// multiple of 16.
pub fn aes_cbc_decrypt<V: AesVariant>(
    key: &[u8],
    iv: &[u8; AES_BLOCK_BYTES],
    cipher: &[u8],
    out: &mut [u8],
) -> Result<()> {
    check_length(cipher.len())?;
    debug_assert_eq!(cipher.len(), out.len());
    let schedule = KeySchedule::<V>::new(key);
    let mut chain = *iv;
    for (cipher_block, out_block) in cipher
        .chunks_exact(AES_BLOCK_BYTES)
        .zip(out.chunks_exact_mut(AES_BLOCK_BYTES))
    {
        let mut next_chain = [0u8; AES_BLOCK_BYTES];
        next_chain.copy_from_slice(cipher_block);
        let mut block = next_chain;
        decrypt_block(&schedule, &mut block);
        xor_into(&mut block, &chain);
        out_block.copy_from_slice(&block);
        chain = next_chain;
    }
    Ok(())
}
