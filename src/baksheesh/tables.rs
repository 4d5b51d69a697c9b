//! BAKSHEESH tables and constants.
//!
//! This module holds the fixed, key-independent data that drives the
//! BAKSHEESH round function: the 4-bit S-box and its inverse, the 35 round
//! constants, and the 128-bit permutation table (and its inverse) that
//! scatters state bits across nibbles each round.
//!
//! These tables are the same family of tables used by GIFT-128, per the
//! paper "BAKSHEESH: Similar Yet Different From GIFT": BAKSHEESH reuses
//! GIFT's bit-permutation structure while changing the S-box, the round
//! constants, and the key schedule.

/// Number of nibbles in a BAKSHEESH state (128 bits / 4 bits per nibble).
pub const BLOCK_NIBBLES: usize = 32;

/// Number of rounds in the BAKSHEESH round function.
pub const ROUNDS: usize = 35;

/// The BAKSHEESH S-box: a bijection on 4-bit values.
pub const S_BOX: [u8; 16] = [3, 0, 6, 13, 11, 5, 8, 14, 12, 15, 9, 2, 4, 10, 7, 1];

/// The inverse of [`S_BOX`]. `INV_S_BOX[S_BOX[x]] == x` for all `x` in `0..16`.
pub const INV_S_BOX: [u8; 16] = [1, 15, 11, 0, 12, 5, 2, 14, 6, 10, 13, 4, 8, 3, 7, 9];

/// Round constants, one 6-bit value per round.
///
/// Each `RC[r]` is XORed bit-by-bit into fixed positions of the state during
/// `AddRoundConstant`, together with an always-1 bit at a fixed position (see
/// [`add_round_constant`](super::block::add_round_constant)).
pub const RC: [u8; ROUNDS] = [
    2, 33, 16, 9, 36, 19, 40, 53, 26, 13, 38, 51, 56, 61, 62, 31, 14, 7, 34, 49, 24, 45, 54, 59,
    28, 47, 22, 43, 20, 11, 4, 3, 32, 17, 8,
];

/// The BAKSHEESH bit permutation, expressed as the GIFT-family general rule:
/// the bit at nibble `j`, within-nibble position `k` (so source bit index
/// `4*j + k`) moves to destination bit index `32*k + ((j + 8*k) mod 32)`.
///
/// `PERM[i]` gives the destination bit index for source bit index `i`.
pub const PERM: [u8; 128] = [
    0, 40, 80, 120, 1, 41, 81, 121, 2, 42, 82, 122, 3, 43, 83, 123, 4, 44, 84, 124, 5, 45, 85,
    125, 6, 46, 86, 126, 7, 47, 87, 127, 8, 48, 88, 96, 9, 49, 89, 97, 10, 50, 90, 98, 11, 51,
    91, 99, 12, 52, 92, 100, 13, 53, 93, 101, 14, 54, 94, 102, 15, 55, 95, 103, 16, 56, 64, 104,
    17, 57, 65, 105, 18, 58, 66, 106, 19, 59, 67, 107, 20, 60, 68, 108, 21, 61, 69, 109, 22, 62,
    70, 110, 23, 63, 71, 111, 24, 32, 72, 112, 25, 33, 73, 113, 26, 34, 74, 114, 27, 35, 75, 115,
    28, 36, 76, 116, 29, 37, 77, 117, 30, 38, 78, 118, 31, 39, 79, 119,
];

/// The inverse of [`PERM`]: `PERM_INV[PERM[i]] == i` for all `i` in `0..128`.
pub const PERM_INV: [u8; 128] = [
    0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48, 52, 56, 60, 64, 68, 72, 76, 80, 84, 88, 92,
    96, 100, 104, 108, 112, 116, 120, 124, 97, 101, 105, 109, 113, 117, 121, 125, 1, 5, 9, 13,
    17, 21, 25, 29, 33, 37, 41, 45, 49, 53, 57, 61, 65, 69, 73, 77, 81, 85, 89, 93, 66, 70, 74,
    78, 82, 86, 90, 94, 98, 102, 106, 110, 114, 118, 122, 126, 2, 6, 10, 14, 18, 22, 26, 30, 34,
    38, 42, 46, 50, 54, 58, 62, 35, 39, 43, 47, 51, 55, 59, 63, 67, 71, 75, 79, 83, 87, 91, 95,
    99, 103, 107, 111, 115, 119, 123, 127, 3, 7, 11, 15, 19, 23, 27, 31,
];
