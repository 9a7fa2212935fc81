//! Meritus Core — Fundamental types, configuration, and errors for the
//! Meritus education credential registry.

pub mod config;
pub mod error;
pub mod types;

pub use config::RegistryConfig;
pub use error::CoreError;
pub use types::AccountId;
