//! Unit tests for solr-provision
//!
//! These tests exercise the library against temporary directories and
//! `/bin/sh` stand-ins. They do not need a Solr installation.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod helpers;
mod process_launcher;
mod settings_store;
