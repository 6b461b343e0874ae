// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use polyhash::benchmark::{report, run, BenchmarkConfiguration, DEFAULT_ITERATIONS};
use polyhash::error::{PolyhashError, PolyhashResult};
use polyhash::hash::HashAlgorithm;
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "The quick brown fox jumps over the lazy dog.";
const LABEL_WIDTH: usize = 20;
const RULE_WIDTH: usize = 80;

#[derive(Parser)]
#[command(name = "polyhash-cli")]
#[command(about = "Print and benchmark polynomial string hashes", long_about = None)]
struct Args {
    /// The string to hash.
    #[clap(short, long, default_value = SAMPLE)]
    input: String,

    /// Number of times each hash function is called in the benchmark.
    #[clap(
        short = 'n',
        long,
        default_value_t = DEFAULT_ITERATIONS as i64,
        allow_negative_numbers = true
    )]
    iterations: i64,

    /// Only print the digests.
    #[clap(long)]
    skip_benchmark: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match execute(Args::parse()) {
        Ok(_) => {
            std::process::exit(exitcode::OK);
        }
        Err(e @ PolyhashError::Io(_)) => {
            // stdout is what failed, so report on stderr.
            eprintln!("Error: {}", e);
            std::process::exit(exitcode::IOERR);
        }
        Err(e) => {
            println!("Error: {}", e);
            std::process::exit(exitcode::DATAERR);
        }
    }
}

fn execute(args: Args) -> PolyhashResult<()> {
    let configuration = BenchmarkConfiguration::try_from(args.iterations)?;
    let mut out = std::io::stdout().lock();

    writeln!(out, "\n{}", args.input)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    for algorithm in HashAlgorithm::ALL {
        writeln!(
            out,
            "{:<width$}: {}",
            algorithm.label(),
            algorithm.digest(&args.input),
            width = LABEL_WIDTH
        )?;
    }

    if args.skip_benchmark {
        return Ok(());
    }

    writeln!(
        out,
        "\nBenchmark: {} Iterations",
        describe_iterations(configuration.iterations())
    )?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    info!(iterations = configuration.iterations(), "starting benchmarks");
    for algorithm in HashAlgorithm::ALL {
        let description = format!(
            "{:<width$}: {{}} seconds",
            algorithm.label(),
            width = LABEL_WIDTH
        );
        let input = args.input.as_bytes();
        let result = run(&description, &configuration, || algorithm.digest(input));
        report(&mut out, &result)?;
    }
    Ok(())
}

/// `10000000` becomes `10 Million`, anything else is printed as is.
fn describe_iterations(iterations: u64) -> String {
    const MILLION: u64 = 1_000_000;
    if iterations >= MILLION && iterations % MILLION == 0 {
        format!("{} Million", iterations / MILLION)
    } else {
        iterations.to_string()
    }
}
