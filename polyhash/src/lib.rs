// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0
#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]

#[cfg(test)]
#[path = "tests/hash_tests.rs"]
pub mod hash_tests;

#[cfg(test)]
#[path = "tests/template_tests.rs"]
pub mod template_tests;

#[cfg(test)]
#[path = "tests/benchmark_tests.rs"]
pub mod benchmark_tests;

pub mod benchmark;
pub mod error;
pub mod hash;
pub mod template;
