/*
 * lib.rs
 * Copyright (c) 2025 Vernier contributors
 */

//! Shared utilities for benchmark reporting.
//!
//! Pretty-printing helpers that turn raw measurements into the strings
//! placed into report template contexts, the run-configuration structure
//! that drives parameter sweeps, and optimization barriers that keep timed
//! code from being optimized away.

pub mod barrier;
pub mod fmt;
pub mod run;

pub use barrier::{observe, touch};
pub use fmt::{percentage, pretty_duration};
pub use run::RunConfiguration;
