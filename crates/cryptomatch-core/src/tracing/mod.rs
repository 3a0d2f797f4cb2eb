//! Observability for CryptoMatch.
//! `tracing` crate with `EnvFilter`, per-module log levels.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
