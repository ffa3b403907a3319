// Copyright 2026 Irreducible Inc.

//! Derivation of the four cipher keys used by a single step.

use crate::{
	block::{xor, xor_assign},
	cipher::Key,
	Block, BLOCK_SIZE,
};

/// One key per 8-byte quarter of the chain value.
pub const NUM_KEYS: usize = 4;

const WORD_SIZE: usize = BLOCK_SIZE / 4;

/// `C3`, least significant byte first.
const C3: Block = [
	0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00,
	0x00, 0xff, 0xff, 0x00, 0xff, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0xff,
];

/// `C1..C4`. `C1` is never applied and only `C3` is non-zero.
const ROUND_CONSTANTS: [Block; NUM_KEYS] = [[0; BLOCK_SIZE], [0; BLOCK_SIZE], C3, [0; BLOCK_SIZE]];

/// The `A` transform: with `x = w3 ‖ w2 ‖ w1 ‖ w0` in 64-bit words, returns
/// `(w0 ⊕ w1) ‖ w3 ‖ w2 ‖ w1`.
pub fn shift_words(x: &Block) -> Block {
	let mut out = [0u8; BLOCK_SIZE];
	out[..BLOCK_SIZE - WORD_SIZE].copy_from_slice(&x[WORD_SIZE..]);
	for i in 0..WORD_SIZE {
		out[BLOCK_SIZE - WORD_SIZE + i] = x[i] ^ x[WORD_SIZE + i];
	}
	out
}

/// The `P` transform: byte `8i + k` moves to position `i + 4k`.
///
/// Viewing the block as a 4×8 byte matrix this is a transposition.
pub fn transpose_bytes(y: &Block) -> Block {
	let mut out = [0u8; BLOCK_SIZE];
	for i in 0..4 {
		for k in 0..WORD_SIZE {
			out[i + 4 * k] = y[WORD_SIZE * i + k];
		}
	}
	out
}

/// Derives `K1..K4` from the chain value `h` and the message block `m`.
pub fn derive_keys(h: &Block, m: &Block) -> [Key; NUM_KEYS] {
	let mut u = *h;
	let mut v = *m;
	let mut keys = [[0u8; BLOCK_SIZE]; NUM_KEYS];
	keys[0] = transpose_bytes(&xor(&u, &v));
	for (key, constant) in keys.iter_mut().zip(&ROUND_CONSTANTS).skip(1) {
		u = shift_words(&u);
		xor_assign(&mut u, constant);
		v = shift_words(&shift_words(&v));
		*key = transpose_bytes(&xor(&u, &v));
	}
	keys
}

#[cfg(test)]
mod tests {
	use super::*;

	fn counting_block() -> Block {
		std::array::from_fn(|i| i as u8)
	}

	#[test]
	fn test_shift_words() {
		let x = counting_block();
		let out = shift_words(&x);
		assert_eq!(out[..24], x[8..]);
		for i in 0..8 {
			assert_eq!(out[24 + i], x[i] ^ x[8 + i]);
		}
	}

	#[test]
	fn test_transpose_bytes_is_a_permutation() {
		let out = transpose_bytes(&counting_block());
		let mut seen = [false; BLOCK_SIZE];
		for &b in &out {
			assert!(!seen[b as usize]);
			seen[b as usize] = true;
		}
		assert_eq!(out[..8], [0, 8, 16, 24, 1, 9, 17, 25]);
		assert_eq!(out[28..], [7, 15, 23, 31]);
	}

	#[test]
	fn test_c3_high_to_low() {
		let mut big_endian = C3;
		big_endian.reverse();
		assert_eq!(
			big_endian,
			[
				0xff, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0xff, 0x00, 0xff,
				0xff, 0x00, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0xff, 0x00, 0xff, 0x00,
				0xff, 0x00, 0xff, 0x00,
			]
		);
	}

	#[test]
	fn test_zero_inputs() {
		let zero = [0u8; BLOCK_SIZE];
		let keys = derive_keys(&zero, &zero);
		assert_eq!(keys[0], zero);
		assert_eq!(keys[1], zero);
		// Only C3 can make a key non-zero when both inputs vanish.
		assert_eq!(keys[2], transpose_bytes(&C3));
		assert_eq!(keys[3], transpose_bytes(&shift_words(&C3)));
	}

	#[test]
	fn test_first_key_depends_on_xor_only() {
		let h = counting_block();
		let m = [0xa5u8; BLOCK_SIZE];
		let swapped = derive_keys(&m, &h);
		let keys = derive_keys(&h, &m);
		assert_eq!(keys[0], swapped[0]);
		assert_ne!(keys[1], swapped[1]);
	}
}
