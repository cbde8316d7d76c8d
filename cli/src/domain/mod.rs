//! Domain layer: pure types, constants, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod collection;
pub mod config;
pub mod error;

pub use collection::{Collection, CollectionCommand};
pub use config::{EffectiveOptions, EnvVars, ProvisionConfig, ProvisionOptions, ProvisionSettings};
pub use error::ProvisionError;
