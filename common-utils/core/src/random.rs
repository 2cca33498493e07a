// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Source of uniformly distributed values.
/// Implementations handle their own synchronization.
pub trait Random: Send + Sync {
    /// Uniform value in the half-open `range`. The range must not be empty.
    fn usize(&self, range: std::ops::Range<usize>) -> usize;
}
