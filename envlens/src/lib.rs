//! # envlens
//!
//! Typed read-only accessor over the process's ambient key/value
//! configuration store (environment variables).
//!
//! This crate provides:
//! - An [`Environment`] accessor with optional, defaulted, numeric, and
//!   feature-flag lookups
//! - A provider seam ([`EnvProvider`]) so production binds the real process
//!   environment and tests bind an in-memory map
//! - Uniform absent/default semantics: missing, empty, and malformed values
//!   never raise, they collapse to absent or a supplied default
//!
//! # Best Practices
//!
//! - Build one [`Environment`] at process startup and pass it by reference
//!   to consumers
//! - Every lookup is a live read; nothing is cached across calls
//! - Diagnostics go through `tracing` and never affect return values

pub mod environment;
pub mod provider;

pub use environment::{DEFAULT_NAME, DEFAULT_NAME_KEY, Environment};
pub use provider::{EnvProvider, MapEnv, ProcessEnv, StoreError};
