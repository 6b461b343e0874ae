// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! A minimal harness which times a closure over a fixed number of iterations and prints one
//! report line per run.
//!
//! ```
//! use polyhash::benchmark::{run, BenchmarkConfiguration};
//! use polyhash::hash::kr_hash;
//!
//! let configuration = BenchmarkConfiguration::new(1000);
//! let result = run("K&R Hash : {} seconds", &configuration, || kr_hash("abc"));
//! assert!(result.render().starts_with("K&R Hash : "));
//! ```

use crate::error::{PolyhashError, PolyhashResult};
use crate::template;
use std::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Number of iterations used when nothing else is configured.
pub const DEFAULT_ITERATIONS: u64 = 10_000_000;

/// Settings shared by all runs of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchmarkConfiguration {
    iterations: u64,
}

impl BenchmarkConfiguration {
    /// A configuration running the timed operation `iterations` times. Zero is allowed.
    pub fn new(iterations: u64) -> Self {
        trace!(iterations, "benchmark configured");
        Self { iterations }
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

impl Default for BenchmarkConfiguration {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl TryFrom<i64> for BenchmarkConfiguration {
    type Error = PolyhashError;

    fn try_from(iterations: i64) -> Result<Self, Self::Error> {
        u64::try_from(iterations)
            .map(Self::new)
            .map_err(|_| PolyhashError::InvalidIterations(iterations))
    }
}

/// Outcome of a single run.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkResult {
    description: String,
    elapsed: Duration,
}

impl BenchmarkResult {
    pub fn new(description: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            description: description.into(),
            elapsed,
        }
    }

    /// The description template the result is rendered with.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// The report line, without a trailing newline.
    pub fn render(&self) -> String {
        template::render(&self.description, self.elapsed_secs())
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Call `operation` the configured number of times and measure the total wall clock time.
///
/// The return value of every call is passed through [black_box] and dropped so the calls are not
/// optimized away.
pub fn run<R, F: FnMut() -> R>(
    description: &str,
    configuration: &BenchmarkConfiguration,
    mut operation: F,
) -> BenchmarkResult {
    let iterations = configuration.iterations();
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(operation());
    }
    let elapsed = start.elapsed();
    debug!(
        description,
        iterations,
        elapsed_secs = elapsed.as_secs_f64(),
        "benchmark finished"
    );
    BenchmarkResult::new(description, elapsed)
}

/// Write the report line of `result` followed by a newline.
pub fn report<W: Write>(writer: &mut W, result: &BenchmarkResult) -> PolyhashResult<()> {
    writeln!(writer, "{}", result)?;
    Ok(())
}

/// Run a benchmark and print its report line to stdout.
pub fn benchmark<R, F: FnMut() -> R>(
    description: &str,
    configuration: &BenchmarkConfiguration,
    operation: F,
) -> PolyhashResult<BenchmarkResult> {
    let result = run(description, configuration, operation);
    report(&mut std::io::stdout().lock(), &result)?;
    Ok(result)
}
