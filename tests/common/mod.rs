//! Common test utilities for catpick CLI and property tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working and home directories plus CLI helpers
//! - Fixtures: reusable taxonomy documents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
