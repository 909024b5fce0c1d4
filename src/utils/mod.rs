//! Utility functions and helpers for the gemlens adapter.
//!
//! This module provides cross-cutting concerns like structured logging and
//! URL sanitization.
//!
//! # Submodules
//!
//! - `logging`: Tracing and logging initialization with security filters.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
