// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use common_utils_core::UtilsError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error(transparent)]
    Utils(#[from] UtilsError),

    /// Not enough memory to hold the requested number of strings
    #[error("cannot generate {0} strings")]
    CountTooLarge(usize),
}
