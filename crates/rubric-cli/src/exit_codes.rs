//! Unified exit codes for the rubric CLI.
//! These codes are part of the public contract consumed by CI pipelines.

pub const SUCCESS: i32 = 0;
pub const GATE_FAILED: i32 = 1; // Pass-rate threshold or regression budget exceeded
pub const CONFIG_ERROR: i32 = 2; // Bad dataset/baseline/provider configuration
