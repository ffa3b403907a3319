// Copyright 2026 Irreducible Inc.

//! Substitution-box parameter sets for the GOST 28147-89 cipher inside GOST R 34.11-94.
//!
//! Digests computed under different parameter sets are unrelated to each other, so the set is
//! fixed when a hasher is constructed and never changes afterwards.

use std::{fmt, str::FromStr};

use gost94_utils::{bail, env::string_env_setting};

use crate::Error;

/// Environment variable consulted by [`SboxParamSet::from_env`].
pub const PARAM_SET_ENV_VAR: &str = "GOST94_PARAM_SET";

/// Eight rows of sixteen 4-bit entries. Row `i` substitutes the `i`-th least significant nibble.
pub type SBox = [[u8; 16]; 8];

pub(crate) const TEST_SBOX: SBox = [
	[4, 10, 9, 2, 13, 8, 0, 14, 6, 11, 1, 12, 7, 15, 5, 3],
	[14, 11, 4, 12, 6, 13, 15, 10, 2, 3, 8, 1, 0, 7, 5, 9],
	[5, 8, 1, 13, 10, 3, 4, 2, 14, 15, 12, 7, 6, 0, 9, 11],
	[7, 13, 10, 1, 0, 8, 9, 15, 14, 4, 6, 12, 11, 2, 5, 3],
	[6, 12, 7, 1, 5, 15, 13, 8, 4, 10, 9, 14, 0, 3, 11, 2],
	[4, 11, 10, 0, 7, 2, 1, 13, 3, 6, 8, 5, 9, 12, 15, 14],
	[13, 11, 4, 1, 3, 15, 5, 9, 0, 10, 14, 7, 6, 8, 2, 12],
	[1, 15, 13, 0, 5, 7, 10, 4, 9, 2, 3, 14, 6, 11, 8, 12],
];

pub(crate) const CRYPTO_PRO_SBOX: SBox = [
	[10, 4, 5, 6, 8, 1, 3, 7, 13, 12, 14, 0, 9, 2, 11, 15],
	[5, 15, 4, 0, 2, 13, 11, 9, 1, 7, 6, 3, 12, 14, 10, 8],
	[7, 15, 12, 14, 9, 4, 1, 0, 3, 11, 5, 2, 6, 10, 8, 13],
	[4, 10, 7, 12, 0, 15, 2, 8, 14, 1, 6, 5, 13, 11, 9, 3],
	[7, 6, 4, 11, 9, 12, 2, 10, 1, 8, 0, 14, 15, 13, 3, 5],
	[7, 6, 2, 4, 13, 9, 15, 0, 10, 1, 5, 11, 8, 14, 12, 3],
	[13, 14, 4, 1, 7, 0, 5, 10, 3, 12, 8, 15, 6, 2, 9, 11],
	[1, 3, 10, 9, 5, 11, 4, 15, 8, 6, 7, 14, 13, 0, 2, 12],
];

/// Named S-box parameter set, as registered in RFC 4357.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SboxParamSet {
	/// `id-GostR3411-94-TestParamSet`, the table of the worked examples in the standard itself.
	#[default]
	Test,
	/// `id-GostR3411-94-CryptoProParamSet`.
	CryptoPro,
}

impl SboxParamSet {
	/// Every registered parameter set.
	pub const ALL: [Self; 2] = [Self::Test, Self::CryptoPro];

	/// Canonical identifier of the parameter set.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Test => "id-GostR3411-94-TestParamSet",
			Self::CryptoPro => "id-GostR3411-94-CryptoProParamSet",
		}
	}

	/// Object identifier in dotted notation.
	pub const fn oid(self) -> &'static str {
		match self {
			Self::Test => "1.2.643.2.2.30.0",
			Self::CryptoPro => "1.2.643.2.2.30.1",
		}
	}

	/// The eight substitution rows of the parameter set.
	pub const fn sbox(self) -> &'static SBox {
		match self {
			Self::Test => &TEST_SBOX,
			Self::CryptoPro => &CRYPTO_PRO_SBOX,
		}
	}

	/// Reads the parameter set from [`PARAM_SET_ENV_VAR`], falling back to the default when it
	/// is unset.
	pub fn from_env() -> Result<Self, Error> {
		match string_env_setting(PARAM_SET_ENV_VAR) {
			Some(val) => val.parse(),
			None => Ok(Self::default()),
		}
	}
}

impl fmt::Display for SboxParamSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for SboxParamSet {
	type Err = Error;

	/// Accepts the canonical identifier, the dotted OID or a short alias, ignoring ASCII case.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if let Some(params) = Self::ALL
			.into_iter()
			.find(|params| s == params.oid() || s.eq_ignore_ascii_case(params.name()))
		{
			return Ok(params);
		}

		match s.to_ascii_lowercase().as_str() {
			"test" | "default" | "gostr3411_94_testparamset" => Ok(Self::Test),
			"cryptopro" | "crypto-pro" | "gostr3411_94_cryptoproparamset" => Ok(Self::CryptoPro),
			_ => {
				tracing::warn!(param_set = s, "rejecting unknown S-box parameter set");
				bail!(Error::UnknownParamSet(s.to_string()));
			}
		}
	}
}
