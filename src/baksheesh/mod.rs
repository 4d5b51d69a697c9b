//! BAKSHEESH: a 128-bit lightweight SPN block cipher closely related to the
//! GIFT family, described in "BAKSHEESH: Similar Yet Different From GIFT".
//!
//! This module provides the cipher core: key schedule, single-block
//! encryption/decryption, and an ECB driver for aligned multi-block data.
//! Padding, chaining modes beyond ECB, and authenticated encryption are
//! explicitly out of scope; callers needing those compose them on top of
//! [`Context`] and the ECB functions exported here.
//!
//! # Example
//!
//! ```
//! use baksheesh::{Context, ecb};
//!
//! let key = [0u8; 32];
//! let plaintext = [0u8; 32];
//!
//! let ctx = Context::new(key);
//! let ciphertext = ecb::encrypt(&ctx, &plaintext);
//! let decrypted = ecb::decrypt(&ctx, &ciphertext);
//!
//! assert_eq!(decrypted, plaintext);
//! ```

mod block;
mod context;
pub mod ecb;
mod tables;

pub use block::Block;
pub use context::Context;
pub use tables::BLOCK_NIBBLES as BLOCK_SIZE;
pub use tables::ROUNDS;

#[cfg(test)]
mod tests;
