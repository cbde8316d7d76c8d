//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: directory layout,
//! environment script sourcing, executable lookup, settings, and process
//! execution.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod layout;
pub mod locate;
pub mod process;
pub mod settings;
