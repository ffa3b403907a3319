// Copyright 2023-2026 Irreducible Inc.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::env::boolean_env_flag_set;

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Calling this more than once is harmless; only the first installation wins.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer())
		.try_init();
}

/// Same as [`init_tracing`], but only when `GOST94_LOG` is set to a truthy value.
///
/// Returns whether a subscriber installation was attempted.
pub fn init_tracing_from_env() -> bool {
	if !boolean_env_flag_set("GOST94_LOG") {
		return false;
	}
	init_tracing();
	true
}
