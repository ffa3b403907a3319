// Copyright 2026 Irreducible Inc.

//! The Ψ shuffle: a linear feedback shift over the sixteen 16-bit lanes of a block.

use crate::{Block, BLOCK_SIZE};

const LANE_SIZE: usize = 2;

/// Lanes XORed into the feedback lane.
pub const PSI_TAPS: [usize; 6] = [0, 1, 2, 3, 12, 15];

#[inline]
fn lane(block: &Block, i: usize) -> u16 {
	u16::from_le_bytes([block[LANE_SIZE * i], block[LANE_SIZE * i + 1]])
}

/// One application of Ψ: every lane moves down by one position and the top lane receives
/// `y0 ⊕ y1 ⊕ y2 ⊕ y3 ⊕ y12 ⊕ y15`.
#[inline]
pub fn psi(block: &mut Block) {
	let feedback = PSI_TAPS.iter().fold(0u16, |acc, &i| acc ^ lane(block, i));
	block.copy_within(LANE_SIZE.., 0);
	block[BLOCK_SIZE - LANE_SIZE..].copy_from_slice(&feedback.to_le_bytes());
}

/// `rounds` consecutive applications of [`psi`].
#[inline]
pub fn psi_rounds(block: &mut Block, rounds: usize) {
	for _ in 0..rounds {
		psi(block);
	}
}
