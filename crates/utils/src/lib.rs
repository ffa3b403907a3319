// Copyright 2024-2026 Irreducible Inc.

pub mod env;
pub mod error_utils;
pub mod tracing;
