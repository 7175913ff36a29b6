//! Observability for GoAST.
//! `tracing` with an `EnvFilter` read from `GOAST_LOG`.

pub mod setup;

pub use setup::init_tracing;
