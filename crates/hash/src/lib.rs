// Copyright 2026 Irreducible Inc.

//! The GOST R 34.11-94 hash function.
//!
//! Each 32-byte block is compressed into a 256-bit chain value with a step function built from
//! four GOST 28147-89 encryptions and the Ψ linear shuffle. Finalization folds the message bit
//! length and a modular checksum of all blocks into the chain value with two more steps.
//!
//! ```
//! use gost94_hash::{Gost94, SboxParamSet};
//!
//! let mut hasher = Gost94::with_params(SboxParamSet::CryptoPro);
//! hasher.write(b"message ");
//! hasher.write(b"digest");
//! assert_eq!(hasher.sum()[..4], [0xa0, 0x1b, 0x72, 0x29]);
//! ```

pub mod accumulator;
mod block;
pub mod cipher;
mod engine;
mod error;
pub mod key_schedule;
pub mod params;
pub mod shuffle;
pub mod step;

pub use ::digest;
pub use ::digest::Digest;
pub use block::{Block, BLOCK_SIZE};
pub use engine::Gost94;
pub use error::Error;
pub use params::SboxParamSet;
