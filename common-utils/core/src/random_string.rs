// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{FastrandRandom, Random, UtilsError, ALPHABET};
use tracing::trace;

/// Random string of exactly `length` characters from [`ALPHABET`],
/// drawn with the thread-local default source.
pub fn random_string(length: usize) -> String {
    random_string_with(&FastrandRandom, length)
}

/// Same as [`random_string`] but draws from `random`.
/// Each character is picked independently and uniformly, with replacement.
pub fn random_string_with<R: Random + ?Sized>(random: &R, length: usize) -> String {
    let mut out = String::with_capacity(length);
    fill(random, &mut out, length);
    out
}

/// Entry point for signed lengths, negative values are rejected.
pub fn try_random_string(length: i64) -> Result<String, UtilsError> {
    try_random_string_with(&FastrandRandom, length)
}

/// Fallible counterpart of [`random_string_with`]: a buffer that cannot be
/// allocated is reported as [`UtilsError::LengthTooLarge`] instead of aborting.
pub fn try_random_string_with<R: Random + ?Sized>(
    random: &R,
    length: i64,
) -> Result<String, UtilsError> {
    let size = validate_length(length)?;
    let mut out = String::new();
    out.try_reserve_exact(size)
        .map_err(|_| UtilsError::LengthTooLarge(length))?;
    fill(random, &mut out, size);
    Ok(out)
}

/// Converts a signed length into a usable one.
pub fn validate_length(length: i64) -> Result<usize, UtilsError> {
    if length < 0 {
        return Err(UtilsError::NegativeLength(length));
    }
    usize::try_from(length).map_err(|_| UtilsError::LengthTooLarge(length))
}

fn fill<R: Random + ?Sized>(random: &R, out: &mut String, length: usize) {
    trace!(length, "random_string");
    for _ in 0..length {
        out.push(ALPHABET[random.usize(0..ALPHABET.len())] as char);
    }
}
