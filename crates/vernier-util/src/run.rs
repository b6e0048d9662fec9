/*
 * run.rs
 * Copyright (c) 2025 Vernier contributors
 */

//! Benchmark run configuration.

use serde::{Deserialize, Serialize};

/// Settings for a parameterized benchmark run.
///
/// This is plain data: the sweep driver uses it to produce the parameter
/// values a benchmark is measured at, and the resulting measurements are
/// what end up in report template contexts. Nothing here is interpreted by
/// the template engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfiguration {
    /// Name of the parameter being swept.
    pub name: String,

    /// Sweep operation identifier (`+` for additive, `*` for geometric).
    pub operation: String,

    /// Initial parameter value.
    pub init: f64,

    /// Step applied by the sweep operation between runs.
    pub step: f64,

    /// Number of runs in the sweep.
    pub count: usize,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        RunConfiguration {
            name: String::new(),
            operation: "+".to_string(),
            init: 1.0,
            step: 1.0,
            count: 1,
        }
    }
}
