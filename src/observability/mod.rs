//! Tracing setup for the shelf engine.

pub mod init;

pub use init::init_tracing;
