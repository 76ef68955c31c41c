// Copyright (c) 2025 shashasha developers
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! A Keccak implementation derived from <https://github.com/RustCrypto/sponges/tree/master/keccak>
//!

use crate::{
    CryptoError,
    constants::{LANE_COUNT, PI, RHO, ROUND_CONSTS},
    lane::Lane,
};

use anyhow::Result;

/// Keccak-p permutation with width 200 (`Keccak-p[200, nr]`)
///
/// # Errors
///
/// If the round count is larger than the round count for the given lane an error will be thrown.
///
pub fn p_200(state: &mut [u8; LANE_COUNT], round_count: usize) -> Result<()> {
    keccak_p::<u8>(state, round_count)
}

/// Keccak-f permutation with width 200 (`Keccak-f[200]` = `Keccak-p[200, 18]`).
///
/// # Errors
///
/// If the round count is larger than the round count for the give lane an error will be thrown.
///
pub fn f_200(state: &mut [u8; LANE_COUNT]) -> Result<()> {
    p_200(state, u8::KECCAK_F_ROUND_COUNT)
}

/// Keccak-p permutation with width 400 (`Keccak-p[400, nr]`)
///
/// # Errors
///
/// If the round count is larger than the round count for the given lane an error will be thrown.
///
pub fn p_400(state: &mut [u16; LANE_COUNT], round_count: usize) -> Result<()> {
    keccak_p::<u16>(state, round_count)
}

/// Keccak-f permutation with width 400 (`Keccak-f[400]` = `Keccak-p[400, 20]`).
///
/// # Errors
///
/// If the round count is larger than the round count for the give lane an error will be thrown.
///
pub fn f_400(state: &mut [u16; LANE_COUNT]) -> Result<()> {
    p_400(state, u16::KECCAK_F_ROUND_COUNT)
}

/// Keccak-p permutation with width 800 (`Keccak-p[800, nr]`)
///
/// # Errors
///
/// If the round count is larger than the round count for the given lane an error will be thrown.
///
pub fn p_800(state: &mut [u32; LANE_COUNT], round_count: usize) -> Result<()> {
    keccak_p::<u32>(state, round_count)
}

/// Keccak-f permutation with width 800 (`Keccak-f[800]` = `Keccak-p[800, 22]`).
///
/// # Errors
///
/// If the round count is larger than the round count for the give lane an error will be thrown.
///
pub fn f_800(state: &mut [u32; LANE_COUNT]) -> Result<()> {
    p_800(state, u32::KECCAK_F_ROUND_COUNT)
}

/// Keccak-p permutation with width 1600 (`Keccak-p[1600, nr]`)
///
/// # Errors
///
/// If the round count is larger than the round count for the given lane an error will be thrown.
///
pub fn p_1600(state: &mut [u64; LANE_COUNT], round_count: usize) -> Result<()> {
    keccak_p::<u64>(state, round_count)
}

/// Keccak-f permutation with width 1600 (`Keccak-f[1600]` = `Keccak-p[1600, 24]`).
///
/// # Errors
///
/// If the round count is larger than the round count for the give lane an error will be thrown.
///
pub fn f_1600(state: &mut [u64; LANE_COUNT]) -> Result<()> {
    p_1600(state, u64::KECCAK_F_ROUND_COUNT)
}

#[cfg_attr(feature = "unroll", unroll::unroll_for_loops)]
#[cfg_attr(feature = "unroll", allow(unused_assignments))]
fn keccak_p<L: Lane>(state: &mut [L; LANE_COUNT], round_count: usize) -> Result<()> {
    if round_count <= L::KECCAK_F_ROUND_COUNT {
        let round_consts =
            &ROUND_CONSTS[(L::KECCAK_F_ROUND_COUNT - round_count)..L::KECCAK_F_ROUND_COUNT];

        for round_const in round_consts {
            let mut array = [L::default(); 5];

            for x in 0..5 {
                for y in 0..5 {
                    array[x] ^= state[5 * y + x];
                }
            }

            // Theta
            for x in 0..5 {
                let parity_1 = array[(x + 4) % 5];
                let parity_2 = array[(x + 1) % 5].rotate_left(1);
                for y in 0..5 {
                    state[5 * y + x] ^= parity_1 ^ parity_2;
                }
            }

            // Pi and Rho
            let mut last = state[1];
            for x in 0..24 {
                array[0] = state[PI[x]];
                state[PI[x]] = last.rotate_left(RHO[x]);
                last = array[0];
            }

            // Chi
            for step in 0..5 {
                let y = 5 * step;
                array.copy_from_slice(&state[y..][..5]);

                for x in 0..5 {
                    let theta_1 = !array[(x + 1) % 5];
                    let theta_2 = array[(x + 2) % 5];
                    state[y + x] = array[x] ^ (theta_1 & theta_2);
                }
            }

            // Iota
            state[0] ^=
                L::truncate(*round_const).map_err(|_| CryptoError::TruncateFailed(*round_const))?;
        }

        Ok(())
    } else {
        Err(CryptoError::InvalidRoundCount(round_count).into())
    }
}
