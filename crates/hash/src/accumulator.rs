// Copyright 2026 Irreducible Inc.

//! Running checksum Σ and message bit length L, both 256-bit and wrapping modulo 2^256.

use crate::{Block, BLOCK_SIZE};

const LIMBS: usize = BLOCK_SIZE / 8;

/// Unsigned 256-bit integer as little-endian 64-bit limbs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct U256([u64; LIMBS]);

impl U256 {
	fn from_le_bytes(bytes: &Block) -> Self {
		let mut limbs = [0u64; LIMBS];
		for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
			let mut word = [0u8; 8];
			word.copy_from_slice(chunk);
			*limb = u64::from_le_bytes(word);
		}
		Self(limbs)
	}

	fn to_le_bytes(self) -> Block {
		let mut out = [0u8; BLOCK_SIZE];
		for (chunk, limb) in out.chunks_exact_mut(8).zip(self.0) {
			chunk.copy_from_slice(&limb.to_le_bytes());
		}
		out
	}

	fn wrapping_add_assign(&mut self, rhs: &Self) {
		let mut carry = false;
		for (limb, &rhs) in self.0.iter_mut().zip(&rhs.0) {
			let (sum, overflow_rhs) = limb.overflowing_add(rhs);
			let (sum, overflow_carry) = sum.overflowing_add(carry as u64);
			*limb = sum;
			carry = overflow_rhs | overflow_carry;
		}
	}
}

/// Σ and L for the blocks absorbed since the last reset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Accumulator {
	checksum: U256,
	bit_len: U256,
}

impl Accumulator {
	/// Adds a message block to Σ.
	#[inline]
	pub fn absorb_block(&mut self, block: &Block) {
		self.checksum.wrapping_add_assign(&U256::from_le_bytes(block));
	}

	/// Adds `8 * len` to L.
	#[inline]
	pub fn add_message_bytes(&mut self, len: usize) {
		let bits = (len as u128) << 3;
		self.bit_len
			.wrapping_add_assign(&U256([bits as u64, (bits >> 64) as u64, 0, 0]));
	}

	/// Σ as a little-endian block.
	pub fn checksum(&self) -> Block {
		self.checksum.to_le_bytes()
	}

	/// L as a little-endian block.
	pub fn bit_length(&self) -> Block {
		self.bit_len.to_le_bytes()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_checksum_carries_across_limbs() {
		let mut acc = Accumulator::default();
		let mut block = [0u8; BLOCK_SIZE];
		block[..8].fill(0xff);
		acc.absorb_block(&block);
		block.fill(0);
		block[0] = 1;
		acc.absorb_block(&block);

		let mut expected = [0u8; BLOCK_SIZE];
		expected[8] = 1;
		assert_eq!(acc.checksum(), expected);
	}

	#[test]
	fn test_checksum_wraps_modulo_2_256() {
		let mut acc = Accumulator::default();
		acc.absorb_block(&[0xff; BLOCK_SIZE]);
		let mut one = [0u8; BLOCK_SIZE];
		one[0] = 1;
		acc.absorb_block(&one);
		assert_eq!(acc.checksum(), [0u8; BLOCK_SIZE]);
	}

	#[test]
	fn test_bit_length() {
		let mut acc = Accumulator::default();
		acc.add_message_bytes(0);
		assert_eq!(acc.bit_length(), [0u8; BLOCK_SIZE]);

		acc.add_message_bytes(3);
		acc.add_message_bytes(32);
		let mut expected = [0u8; BLOCK_SIZE];
		// 35 bytes is 280 bits.
		expected[..2].copy_from_slice(&280u16.to_le_bytes());
		assert_eq!(acc.bit_length(), expected);
	}

	#[cfg(target_pointer_width = "64")]
	#[test]
	fn test_bit_length_exceeds_64_bits() {
		let mut acc = Accumulator::default();
		acc.add_message_bytes(1 << 61);
		acc.add_message_bytes(1 << 61);
		let mut expected = [0u8; BLOCK_SIZE];
		// 2 * 2^61 bytes is 2^65 bits.
		expected[8] = 2;
		assert_eq!(acc.bit_length(), expected);
	}
}
