// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::report::{FindReport, RandomReport};
use crate::CliError;
use clap::{Parser, Subcommand};
use common_utils_core::{
    find_string, find_string_in_sorted_copy, try_random_string_with, validate_length,
    FastrandRandom, Random, SeededRandom,
};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "common-utils", version, about, long_about = None)]
pub struct Cli {
    /// Print a JSON object instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sort the words and report the target's index, -1 if absent
    Find {
        target: String,

        words: Vec<String>,

        /// Search a sorted copy and leave the words in their original order
        #[arg(long)]
        keep_order: bool,
    },
    /// Generate alphanumeric strings
    Random {
        #[arg(allow_negative_numbers = true)]
        length: i64,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Number of strings to generate
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
}

impl Cli {
    pub fn run(self) -> Result<String, Box<dyn std::error::Error>> {
        match self.command {
            Commands::Find {
                target,
                words,
                keep_order,
            } => {
                let report = run_find(&target, words, keep_order);
                render(self.json, &report, FindReport::to_text)
            }
            Commands::Random {
                length,
                seed,
                count,
            } => {
                let report = run_random(length, seed, count)?;
                render(self.json, &report, RandomReport::to_text)
            }
        }
    }
}

fn render<T: serde::Serialize>(
    json: bool,
    report: &T,
    to_text: impl Fn(&T) -> String,
) -> Result<String, Box<dyn std::error::Error>> {
    if json {
        Ok(serde_json::to_string(report)?)
    } else {
        Ok(to_text(report))
    }
}

pub fn run_find(target: &str, mut words: Vec<String>, keep_order: bool) -> FindReport {
    if keep_order {
        let found = find_string_in_sorted_copy(&words, target);
        FindReport::new(target, found, None)
    } else {
        let found = find_string(&mut words, target);
        FindReport::new(target, found, Some(words))
    }
}

/// Checks `length` before anything is drawn, so a bad length fails even for `count == 0`.
pub fn run_random(length: i64, seed: Option<u64>, count: usize) -> Result<RandomReport, CliError> {
    let size = validate_length(length)?;
    let random: Box<dyn Random> = match seed {
        Some(seed) => {
            info!(seed, "using seeded source");
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(FastrandRandom),
    };

    let mut strings: Vec<String> = Vec::new();
    strings
        .try_reserve_exact(count)
        .map_err(|_| CliError::CountTooLarge(count))?;
    for _ in 0..count {
        strings.push(try_random_string_with(&*random, length)?);
    }

    Ok(RandomReport {
        length: size,
        seed,
        strings,
    })
}
