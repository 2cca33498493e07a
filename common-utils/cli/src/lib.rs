// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod cli_error;
pub use cli_error::CliError;

pub mod commands;
pub use commands::{run_find, run_random, Cli, Commands};

pub mod report;
pub use report::{FindReport, RandomReport, NOT_FOUND};
