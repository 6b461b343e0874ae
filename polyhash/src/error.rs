// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Collection of errors to be used in polyhash.
//!
//! The hash functions are total and never fail. Errors only arise when building a benchmark
//! configuration, rendering a report in strict mode, or writing a report line.

use thiserror::Error;

pub type PolyhashResult<T> = Result<T, PolyhashError>;

/// Collection of errors to be used in polyhash.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum PolyhashError {
    /// The iteration count of a benchmark was negative.
    #[error("Expected a non-negative iteration count, got {0}")]
    InvalidIterations(i64),

    /// A description template has no `{}` marker to substitute the elapsed time into.
    #[error("Description template does not contain a placeholder")]
    MissingPlaceholder,

    /// Writing a report line failed.
    #[error("Failed to write report: {0}")]
    Io(String),
}

impl From<std::io::Error> for PolyhashError {
    fn from(e: std::io::Error) -> Self {
        PolyhashError::Io(e.to_string())
    }
}
