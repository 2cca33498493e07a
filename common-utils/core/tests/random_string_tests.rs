// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use common_utils_core::{
    is_alphabet_char, random_string, random_string_with, try_random_string,
    try_random_string_with, validate_length, FastrandRandom, Random, SeededRandom, UtilsError,
    ALPHABET,
};
use std::sync::Arc;
use std::thread;

/// Always returns the lowest value of the range.
struct FixedRandom;

impl Random for FixedRandom {
    fn usize(&self, range: std::ops::Range<usize>) -> usize {
        range.start
    }
}

/// Cycles through the range, one step per draw.
struct CountingRandom {
    next: std::sync::atomic::AtomicUsize,
}

impl Random for CountingRandom {
    fn usize(&self, range: std::ops::Range<usize>) -> usize {
        let step = self.next.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        range.start + step % range.len()
    }
}

fn chi_squared(sample: &str) -> f64 {
    let mut counts = [0usize; 62];
    for c in sample.bytes() {
        let index = ALPHABET
            .iter()
            .position(|&a| a == c)
            .expect("character outside alphabet");
        counts[index] += 1;
    }
    let expected = sample.len() as f64 / ALPHABET.len() as f64;
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

// ============================================================
// random_string tests (default source)
// ============================================================

#[test]
fn test_zero_length_is_empty() {
    assert_eq!(random_string(0), "");
}

#[test]
fn test_length_is_exact() {
    for n in [1, 2, 7, 62, 100, 4096] {
        assert_eq!(random_string(n).len(), n);
        assert_eq!(random_string(n).chars().count(), n);
    }
}

#[test]
fn test_characters_come_from_alphabet() {
    let s = random_string(10_000);
    assert!(s.chars().all(is_alphabet_char), "unexpected char in {}", s);
}

#[test]
fn test_default_source_distribution_is_roughly_uniform() {
    // df = 61, the 0.001 critical value is about 101
    let sample: String = (0..62_000).map(|_| random_string(1)).collect();
    let stat = chi_squared(&sample);
    assert!(stat < 150.0, "chi-squared {} too high", stat);
}

// ============================================================
// random_string_with tests (injected source)
// ============================================================

#[test]
fn test_index_maps_to_alphabet_order() {
    assert_eq!(random_string_with(&FixedRandom, 4), "0000");

    let counting = CountingRandom {
        next: std::sync::atomic::AtomicUsize::new(0),
    };
    assert_eq!(
        random_string_with(&counting, 62),
        "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"
    );
}

#[test]
fn test_same_seed_reproduces_string() {
    let first = random_string_with(&SeededRandom::new(2025), 64);
    let second = random_string_with(&SeededRandom::new(2025), 64);
    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_differ() {
    let first = random_string_with(&SeededRandom::new(1), 64);
    let second = random_string_with(&SeededRandom::new(2), 64);
    assert_ne!(first, second);
}

#[test]
fn test_seeded_distribution_is_roughly_uniform() {
    let random = SeededRandom::new(0xC0FFEE);
    let sample: String = (0..62_000).map(|_| random_string_with(&random, 1)).collect();
    let stat = chi_squared(&sample);
    assert!(stat < 150.0, "chi-squared {} too high", stat);
}

#[test]
fn test_trait_object_source() {
    let random: Box<dyn Random> = Box::new(FastrandRandom);
    let s = random_string_with(&*random, 32);
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(is_alphabet_char));
}

#[test]
fn test_shared_seeded_source_across_threads() {
    let random = Arc::new(SeededRandom::new(99));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let random = Arc::clone(&random);
            thread::spawn(move || random_string_with(&*random, 256))
        })
        .collect();

    for handle in handles {
        let s = handle.join().expect("worker panicked");
        assert_eq!(s.len(), 256);
        assert!(s.chars().all(is_alphabet_char));
    }
}

// ============================================================
// try_random_string tests (signed lengths)
// ============================================================

#[test]
fn test_try_accepts_non_negative() {
    assert_eq!(try_random_string(0), Ok(String::new()));
    assert_eq!(try_random_string(12).map(|s| s.len()), Ok(12));
}

#[test]
fn test_try_rejects_negative() {
    let err = try_random_string(-1).unwrap_err();
    assert_eq!(err, UtilsError::NegativeLength(-1));
    assert_eq!(err.to_string(), "length must be non-negative, got -1");
}

#[test]
fn test_try_with_seed_matches_unchecked() {
    let checked = try_random_string_with(&SeededRandom::new(5), 20);
    let unchecked = random_string_with(&SeededRandom::new(5), 20);
    assert_eq!(checked, Ok(unchecked));
}

#[test]
fn test_try_reports_unallocatable_length() {
    assert_eq!(
        try_random_string(i64::MAX),
        Err(UtilsError::LengthTooLarge(i64::MAX))
    );
    assert_eq!(
        try_random_string_with(&FixedRandom, i64::MAX),
        Err(UtilsError::LengthTooLarge(i64::MAX))
    );
}

// ============================================================
// validate_length tests
// ============================================================

#[test]
fn test_validate_length_accepts_zero_and_positive() {
    assert_eq!(validate_length(0), Ok(0));
    assert_eq!(validate_length(17), Ok(17));
}

#[test]
fn test_validate_length_rejects_negative() {
    assert_eq!(validate_length(-3), Err(UtilsError::NegativeLength(-3)));
    assert_eq!(
        validate_length(i64::MIN),
        Err(UtilsError::NegativeLength(i64::MIN))
    );
}
