// Copyright 2026 Irreducible Inc.

//! The step (compression) function `(H, M) → H′`.

use crate::{
	block::xor_assign,
	cipher::{CipherBlock, Gost28147, CIPHER_BLOCK_SIZE},
	key_schedule::derive_keys,
	shuffle::{psi, psi_rounds},
	Block,
};

/// Ψ applications on the encrypted chain value before the message is mixed in.
pub const PRE_MIX_ROUNDS: usize = 12;
/// Ψ applications after the chain value is mixed in.
pub const POST_MIX_ROUNDS: usize = 61;

/// Compresses message block `m` into chain value `h`.
///
/// Each 8-byte quarter of `h` is encrypted under its own derived key, and the result is folded
/// back together with `m` and `h` as `Ψ^61(h ⊕ Ψ(m ⊕ Ψ^12(s)))`.
pub fn step(cipher: &Gost28147, h: &Block, m: &Block) -> Block {
	let keys = derive_keys(h, m);

	let mut s = *h;
	for (quarter, key) in s.chunks_exact_mut(CIPHER_BLOCK_SIZE).zip(&keys) {
		let mut block: CipherBlock = [0; CIPHER_BLOCK_SIZE];
		block.copy_from_slice(quarter);
		cipher.encrypt_block(&mut block, key);
		quarter.copy_from_slice(&block);
	}

	shuffle(h, m, s)
}

fn shuffle(h: &Block, m: &Block, mut s: Block) -> Block {
	psi_rounds(&mut s, PRE_MIX_ROUNDS);
	xor_assign(&mut s, m);
	psi(&mut s);
	xor_assign(&mut s, h);
	psi_rounds(&mut s, POST_MIX_ROUNDS);
	s
}
