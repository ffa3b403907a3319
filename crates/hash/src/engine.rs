// Copyright 2026 Irreducible Inc.

use std::{cmp, fmt};

use digest::{
	consts::U32, core_api::BlockSizeUser, FixedOutput, FixedOutputReset, HashMarker, Output,
	OutputSizeUser, Reset, Update,
};
use subtle::ConstantTimeEq;

use crate::{
	accumulator::Accumulator,
	cipher::Gost28147,
	params::SboxParamSet,
	step::step,
	Block, Error, BLOCK_SIZE,
};

/// Chain value before the first block, shared by both parameter sets.
const INITIAL_STATE: Block = [0; BLOCK_SIZE];

/// Incremental GOST R 34.11-94 hasher.
///
/// Besides the inherent `write`/`sum`/`reset` API, the hasher implements the RustCrypto trait
/// family and is therefore usable as a [`digest::Digest`]. [`Default`] and `Digest::new` select
/// [`SboxParamSet::Test`].
#[derive(Clone)]
pub struct Gost94 {
	cipher: Gost28147,
	state: Block,
	accumulator: Accumulator,
	buffer: Block,
	filled_bytes: usize,
}

impl Gost94 {
	/// Hasher over [`SboxParamSet::Test`].
	pub fn new() -> Self {
		Self::with_params(SboxParamSet::default())
	}

	pub fn with_params(params: SboxParamSet) -> Self {
		tracing::debug!(param_set = %params, "constructing GOST R 34.11-94 hasher");
		Self {
			cipher: Gost28147::new(params),
			state: INITIAL_STATE,
			accumulator: Accumulator::default(),
			buffer: [0; BLOCK_SIZE],
			filled_bytes: 0,
		}
	}

	/// Constructs a hasher from a parameter set name or OID, see [`SboxParamSet`]'s `FromStr`.
	pub fn from_param_set_name(name: &str) -> Result<Self, Error> {
		Ok(Self::with_params(name.parse()?))
	}

	/// Constructs a hasher for the parameter set selected by the environment.
	pub fn from_env() -> Result<Self, Error> {
		Ok(Self::with_params(SboxParamSet::from_env()?))
	}

	pub fn params(&self) -> SboxParamSet {
		self.cipher.params()
	}

	/// Number of buffered bytes that do not yet form a full block.
	pub fn pending_len(&self) -> usize {
		self.filled_bytes
	}

	/// Appends `data` to the message.
	pub fn write(&mut self, data: impl AsRef<[u8]>) {
		let mut data = data.as_ref();
		self.accumulator.add_message_bytes(data.len());

		if self.filled_bytes != 0 {
			let to_copy = cmp::min(data.len(), BLOCK_SIZE - self.filled_bytes);
			self.buffer[self.filled_bytes..self.filled_bytes + to_copy]
				.copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];
			self.filled_bytes += to_copy;

			if self.filled_bytes == BLOCK_SIZE {
				let block = self.buffer;
				self.absorb(&block);
				self.filled_bytes = 0;
			}
		}

		let mut chunks = data.chunks_exact(BLOCK_SIZE);
		for chunk in &mut chunks {
			let mut block = [0; BLOCK_SIZE];
			block.copy_from_slice(chunk);
			self.absorb(&block);
		}

		let remaining = chunks.remainder();
		if !remaining.is_empty() {
			self.buffer[..remaining.len()].copy_from_slice(remaining);
			self.filled_bytes = remaining.len();
		}
	}

	/// Digest of everything written so far. The hasher itself is left untouched.
	pub fn sum(&self) -> Output<Self> {
		let mut out = Output::<Self>::default();
		self.clone().finalize_in_place(&mut out);
		out
	}

	/// Appends the current digest to `buf`.
	pub fn sum_into(&self, buf: &mut Vec<u8>) {
		buf.extend_from_slice(&self.sum());
	}

	/// Compares the current digest with `expected` in constant time.
	///
	/// A length mismatch is reported as inequality.
	pub fn verify(&self, expected: &[u8]) -> bool {
		self.sum().as_slice().ct_eq(expected).into()
	}

	/// Forgets the message, keeping the parameter set.
	pub fn reset(&mut self) {
		self.state = INITIAL_STATE;
		self.accumulator = Accumulator::default();
		self.buffer = [0; BLOCK_SIZE];
		self.filled_bytes = 0;
	}

	#[inline]
	fn absorb(&mut self, block: &Block) {
		self.accumulator.absorb_block(block);
		self.state = step(&self.cipher, &self.state, block);
	}

	fn finalize_in_place(&mut self, out: &mut Output<Self>) {
		tracing::trace!(
			param_set = %self.params(),
			pending = self.filled_bytes,
			"finalizing GOST R 34.11-94 digest"
		);

		if self.filled_bytes != 0 {
			self.buffer[self.filled_bytes..].fill(0);
			let block = self.buffer;
			self.absorb(&block);
			self.filled_bytes = 0;
		}

		let bit_len = self.accumulator.bit_length();
		self.state = step(&self.cipher, &self.state, &bit_len);
		let checksum = self.accumulator.checksum();
		self.state = step(&self.cipher, &self.state, &checksum);

		// The chain value is little-endian; the digest is published most significant byte first.
		for (o, &b) in out.iter_mut().zip(self.state.iter().rev()) {
			*o = b;
		}
	}
}

impl Default for Gost94 {
	fn default() -> Self {
		Self::new()
	}
}

impl HashMarker for Gost94 {}

impl Update for Gost94 {
	fn update(&mut self, data: &[u8]) {
		self.write(data);
	}
}

impl OutputSizeUser for Gost94 {
	type OutputSize = U32;
}

impl BlockSizeUser for Gost94 {
	type BlockSize = U32;
}

impl FixedOutput for Gost94 {
	fn finalize_into(mut self, out: &mut Output<Self>) {
		self.finalize_in_place(out);
	}
}

impl Reset for Gost94 {
	fn reset(&mut self) {
		Gost94::reset(self);
	}
}

impl FixedOutputReset for Gost94 {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		self.finalize_in_place(out);
		Gost94::reset(self);
	}
}

impl fmt::Debug for Gost94 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Gost94")
			.field("params", &self.params())
			.field("pending", &self.filled_bytes)
			.finish_non_exhaustive()
	}
}
