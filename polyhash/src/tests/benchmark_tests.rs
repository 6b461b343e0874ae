// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::benchmark::{
    benchmark, report, run, BenchmarkConfiguration, BenchmarkResult, DEFAULT_ITERATIONS,
};
use crate::error::PolyhashError;
use crate::hash::kr_hash;
use std::time::Duration;

#[test]
fn test_configuration() {
    assert_eq!(BenchmarkConfiguration::new(5).iterations(), 5);
    assert_eq!(
        BenchmarkConfiguration::default().iterations(),
        DEFAULT_ITERATIONS
    );
    assert_eq!(DEFAULT_ITERATIONS, 10_000_000);
    assert_eq!(
        BenchmarkConfiguration::try_from(0i64).unwrap().iterations(),
        0
    );
    assert_eq!(
        BenchmarkConfiguration::try_from(-1i64),
        Err(PolyhashError::InvalidIterations(-1))
    );
}

#[test]
fn test_run_counts_iterations() {
    let mut calls = 0u64;
    let configuration = BenchmarkConfiguration::new(1234);
    let result = run("count: {}", &configuration, || calls += 1);
    assert_eq!(calls, 1234);
    assert_eq!(result.description(), "count: {}");
}

#[test]
fn test_zero_iterations() {
    let mut calls = 0u64;
    let configuration = BenchmarkConfiguration::try_from(0i64).unwrap();
    let result = run("Nothing: {} seconds", &configuration, || {
        calls += 1;
        kr_hash("never hashed")
    });
    assert_eq!(calls, 0);
    assert!(result.elapsed_secs() >= 0.0);
    assert!(result.elapsed() < Duration::from_secs(1));

    let mut out = Vec::new();
    report(&mut out, &result).unwrap();
    let line = String::from_utf8(out).unwrap();
    assert!(line.starts_with("Nothing: 0.0"));
    assert!(line.ends_with(" seconds\n"));
}

#[test]
fn test_elapsed_grows_with_iterations() {
    let input = "The quick brown fox jumps over the lazy dog.";
    let short = run("{}", &BenchmarkConfiguration::new(0), || kr_hash(input));
    let long = run("{}", &BenchmarkConfiguration::new(200_000), || kr_hash(input));
    assert!(short.elapsed_secs() >= 0.0);
    assert!(long.elapsed() >= short.elapsed());
}

#[test]
fn test_report_line() {
    let result = BenchmarkResult::new("X: {} seconds", Duration::from_millis(1500));
    assert_eq!(result.elapsed_secs(), 1.5);
    assert_eq!(result.render(), "X: 1.500000 seconds");
    assert_eq!(result.to_string(), "X: 1.500000 seconds");

    let mut out = Vec::new();
    report(&mut out, &result).unwrap();
    assert_eq!(out, b"X: 1.500000 seconds\n");
}

#[test]
fn test_benchmark_prints_and_returns_result() {
    let configuration = BenchmarkConfiguration::new(10);
    let result = benchmark("K&R Hash : {} seconds", &configuration, || kr_hash("abc")).unwrap();
    assert_eq!(result.description(), "K&R Hash : {} seconds");
    assert!(result.render().ends_with(" seconds"));
}
