// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Serialize;

/// Printed for a target that is not in the sequence
pub const NOT_FOUND: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindReport {
    pub target: String,
    pub index: i64,
    /// Sorted sequence, absent when the caller asked to keep the original order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<Vec<String>>,
}

impl FindReport {
    pub fn new(target: &str, found: Option<usize>, sorted: Option<Vec<String>>) -> Self {
        Self {
            target: target.to_string(),
            index: found.map_or(NOT_FOUND, |i| i as i64),
            sorted,
        }
    }

    pub fn to_text(&self) -> String {
        match &self.sorted {
            Some(sorted) => format!("{}\n{}", self.index, sorted.join(" ")),
            None => self.index.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RandomReport {
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub strings: Vec<String>,
}

impl RandomReport {
    pub fn to_text(&self) -> String {
        self.strings.join("\n")
    }
}
