//! Standalone helpers that are not behaviors themselves.

pub mod debounce;
