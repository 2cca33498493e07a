// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilsError {
    /// A random string was requested with a length below zero
    #[error("length must be non-negative, got {0}")]
    NegativeLength(i64),

    /// Length does not fit `usize` or its buffer cannot be allocated
    #[error("length {0} exceeds the addressable size")]
    LengthTooLarge(i64),
}
