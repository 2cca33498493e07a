// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod alphabet;
pub use alphabet::{is_alphabet_char, ALPHABET};

mod utils_error;
pub use utils_error::UtilsError;

pub mod random;
pub use random::Random;

pub mod fastrand_random;
pub use fastrand_random::FastrandRandom;

pub mod seeded_random;
pub use seeded_random::SeededRandom;

mod find_string;
pub use find_string::{find_string, find_string_in_sorted_copy};

mod random_string;
pub use random_string::{
    random_string, random_string_with, try_random_string, try_random_string_with,
    validate_length,
};
