// Copyright 2024-2026 Irreducible Inc.

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => is_truthy(&val),
		Err(_) => false,
	}
}

/// Read an optional string setting from the environment.
///
/// Unset and empty variables are both reported as `None`.
pub fn string_env_setting(name: &str) -> Option<String> {
	std::env::var(name)
		.ok()
		.map(|val| val.trim().to_string())
		.filter(|val| !val.is_empty())
}

fn is_truthy(val: &str) -> bool {
	["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val)
}
