// Copyright 2026 Irreducible Inc.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unknown S-box parameter set: {0:?}")]
	UnknownParamSet(String),
}
