//! Buckets represent the value range between two adjacent limits and a count
//! of observations within that range.

#[cfg(feature = "serde-serialize")]
use serde::Serialize;

/// A bucket represents a half-open range of values and a count of
/// observations that fall into that range. A missing bound means the range is
/// unbounded on that side.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
pub struct Bucket {
    pub(crate) count: u64,
    pub(crate) lower: Option<i64>,
    pub(crate) upper: Option<i64>,
}

impl Bucket {
    /// Returns the number of observations within the bucket's range.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the inclusive lower bound for the bucket, or `None` for the
    /// first bucket.
    pub fn lower(&self) -> Option<i64> {
        self.lower
    }

    /// Returns the exclusive upper bound for the bucket, or `None` for the
    /// last bucket.
    pub fn upper(&self) -> Option<i64> {
        self.upper
    }

    /// Returns true if the value falls within the bucket's range.
    pub fn contains(&self, value: i64) -> bool {
        !matches!(self.lower, Some(lower) if lower > value)
            && !matches!(self.upper, Some(upper) if upper <= value)
    }
}
