//! A Rust-based software library for the BAKSHEESH lightweight block cipher.
//!
//! BAKSHEESH is a 128-bit SPN cipher in the GIFT family, specified in
//! "BAKSHEESH: Similar Yet Different From GIFT". This crate implements the
//! cipher primitive: key schedule, single-block encryption/decryption, and
//! an ECB driver for aligned multi-block data. See [`baksheesh`] for the
//! full API.

mod baksheesh;

pub use baksheesh::{ecb, Block, Context, BLOCK_SIZE, ROUNDS};
