//! BAKSHEESH block driver (ECB mode).
//!
//! This module provides the multi-block entry points: each 32-byte chunk of
//! the input is treated as one nibble-per-byte [`Block`](super::block::Block)
//! and transformed independently, electronic codebook, no chaining. It is
//! the Rust counterpart of the reference C driver's `ALIGN_TO_32_BLOCK_SIZE`
//! plus block loop.
//!
//! Length handling is a deliberate contract, not an oversight: the input
//! length is rounded **down** to the nearest multiple of 32, and any
//! trailing bytes are silently ignored. Padding is explicitly out of scope;
//! callers who need it apply it before calling in, and strip it after
//! calling out.

use super::context::Context;
use super::tables::BLOCK_NIBBLES as BLOCK_SIZE;

/// Encrypt `input` in ECB mode under `ctx`.
///
/// Only `input.len() & !31` bytes are processed; any trailing bytes beyond
/// the last full 32-byte block are ignored, and the returned `Vec` has
/// exactly that aligned length.
pub fn encrypt(ctx: &Context, input: &[u8]) -> Vec<u8> {
    transform(input, |block| ctx.encrypt_block(block))
}

/// Decrypt `input` in ECB mode under `ctx`. Symmetric inverse of
/// [`encrypt`]: same alignment/truncation contract applies.
pub fn decrypt(ctx: &Context, input: &[u8]) -> Vec<u8> {
    transform(input, |block| ctx.decrypt_block(block))
}

fn transform(input: &[u8], block_fn: impl Fn(&[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE]) -> Vec<u8> {
    let aligned_len = input.len() & !(BLOCK_SIZE - 1);
    let mut output = Vec::with_capacity(aligned_len);

    for chunk in input[..aligned_len].chunks_exact(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        output.extend_from_slice(&block_fn(&block));
    }

    output
}
