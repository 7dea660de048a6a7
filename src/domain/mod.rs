//! Domain layer - framework-agnostic error type shared by every module.

pub mod errors;

pub use errors::ClientError;
