//! Observability for decibans.
//! `tracing` crate with `EnvFilter`, configured through `DECIBANS_LOG`.

pub mod setup;

pub use setup::init_tracing;
