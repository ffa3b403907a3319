// Copyright 2026 Irreducible Inc.

/// Size in bytes of a message block, of the chain value and of the digest.
pub const BLOCK_SIZE: usize = 32;

/// A 256-bit value in the internal byte order, least significant byte first.
pub type Block = [u8; BLOCK_SIZE];

#[inline]
pub(crate) fn xor(a: &Block, b: &Block) -> Block {
	let mut out = *a;
	xor_assign(&mut out, b);
	out
}

#[inline]
pub(crate) fn xor_assign(a: &mut Block, b: &Block) {
	for (x, y) in a.iter_mut().zip(b) {
		*x ^= y;
	}
}
