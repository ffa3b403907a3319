// Copyright 2026 Irreducible Inc.

//! GOST 28147-89 block encryption, the keyed primitive behind each step of the hash.
//!
//! Only the encryption direction in the simple substitution mode is needed. The nibble-wise
//! S-box of the selected parameter set is merged at compile time into four byte-wide tables, so
//! a round performs four lookups instead of eight.

use std::{array, fmt};

use crate::params::{SBox, SboxParamSet, CRYPTO_PRO_SBOX, TEST_SBOX};

/// Cipher block size in bytes.
pub const CIPHER_BLOCK_SIZE: usize = 8;

/// Cipher key size in bytes.
pub const KEY_SIZE: usize = 32;

/// Input and output of a single encryption.
pub type CipherBlock = [u8; CIPHER_BLOCK_SIZE];
pub type Key = [u8; KEY_SIZE];

/// Byte-wide substitution tables; table `i` handles byte `i` of a little-endian word.
type ByteTables = [[u8; 256]; 4];

const fn expand(sbox: &SBox) -> ByteTables {
	let mut out = [[0u8; 256]; 4];
	let mut i = 0;
	while i < 4 {
		let mut byte = 0;
		while byte < 256 {
			out[i][byte] = (sbox[2 * i + 1][byte >> 4] << 4) | sbox[2 * i][byte & 0x0f];
			byte += 1;
		}
		i += 1;
	}
	out
}

static TEST_TABLES: ByteTables = expand(&TEST_SBOX);
static CRYPTO_PRO_TABLES: ByteTables = expand(&CRYPTO_PRO_SBOX);

/// GOST 28147-89 bound to one S-box parameter set.
///
/// The key is supplied per call: the hash derives four fresh keys for every block, so there is
/// no key schedule worth caching.
#[derive(Clone, Copy)]
pub struct Gost28147 {
	params: SboxParamSet,
	tables: &'static ByteTables,
}

impl Gost28147 {
	pub fn new(params: SboxParamSet) -> Self {
		let tables = match params {
			SboxParamSet::Test => &TEST_TABLES,
			SboxParamSet::CryptoPro => &CRYPTO_PRO_TABLES,
		};
		Self { params, tables }
	}

	pub fn params(&self) -> SboxParamSet {
		self.params
	}

	#[inline]
	fn substitute(&self, x: u32) -> u32 {
		let bytes = x.to_le_bytes();
		u32::from_le_bytes(array::from_fn(|i| self.tables[i][bytes[i] as usize]))
	}

	#[inline]
	fn round_function(&self, half: u32, subkey: u32) -> u32 {
		self.substitute(half.wrapping_add(subkey)).rotate_left(11)
	}

	/// Encrypts `block` in place under `key`.
	///
	/// Subkeys are taken in the order `k0..k7` three times, then `k7..k0`.
	pub fn encrypt_block(&self, block: &mut CipherBlock, key: &Key) {
		let subkeys = subkeys(key);
		let [a0, a1, a2, a3, b0, b1, b2, b3] = *block;
		let mut a = u32::from_le_bytes([a0, a1, a2, a3]);
		let mut b = u32::from_le_bytes([b0, b1, b2, b3]);

		let schedule = subkeys
			.iter()
			.cycle()
			.take(3 * subkeys.len())
			.chain(subkeys.iter().rev());
		for &subkey in schedule {
			let t = b ^ self.round_function(a, subkey);
			b = a;
			a = t;
		}

		block[..4].copy_from_slice(&b.to_le_bytes());
		block[4..].copy_from_slice(&a.to_le_bytes());
	}
}

fn subkeys(key: &Key) -> [u32; 8] {
	array::from_fn(|i| {
		u32::from_le_bytes([key[4 * i], key[4 * i + 1], key[4 * i + 2], key[4 * i + 3]])
	})
}

impl fmt::Debug for Gost28147 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Gost28147")
			.field("params", &self.params)
			.finish_non_exhaustive()
	}
}
