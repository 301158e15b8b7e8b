#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{bisect_right, Error};
use log::debug;

/// A strictly increasing set of boundary values which partitions the `i64`
/// domain into `len() + 1` buckets.
///
/// Bucket `0` holds values below the first limit, bucket `i` holds values in
/// `limits[i - 1]..limits[i]`, and the last bucket holds values greater than
/// or equal to the largest limit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<i64>", into = "Vec<i64>")
)]
pub struct Limits {
    limits: Box<[i64]>,
}

impl Limits {
    /// Create a new set of limits.
    ///
    /// An error is returned if the values are not strictly increasing. The
    /// error names the first offending index. An empty set is allowed and
    /// results in a single bucket spanning all values.
    pub fn new(limits: Vec<i64>) -> Result<Self, Error> {
        if let Some(index) = limits
            .windows(2)
            .position(|pair| pair[0] >= pair[1])
            .map(|i| i + 1)
        {
            debug!(
                "rejecting limits: {} at index {} does not exceed {}",
                limits[index],
                index,
                limits[index - 1]
            );
            return Err(Error::Unsorted { index });
        }

        Ok(Self {
            limits: limits.into(),
        })
    }

    /// Returns the bucket index for the provided value.
    pub fn locate(&self, value: i64) -> usize {
        bisect_right(&self.limits, &value)
    }

    /// Returns the number of limits.
    pub fn len(&self) -> usize {
        self.limits.len()
    }

    /// Returns true if there are no limits.
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Returns the number of buckets, which is one more than the number of
    /// limits.
    pub fn buckets(&self) -> usize {
        self.limits.len() + 1
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.limits
    }

    /// Returns the inclusive lower and exclusive upper bound of the bucket at
    /// the provided index. `None` means unbounded on that side.
    ///
    /// # Panics
    /// This function will panic if the index is not less than `buckets()`.
    pub fn bucket_range(&self, index: usize) -> (Option<i64>, Option<i64>) {
        assert!(index < self.buckets(), "bucket index out of range");

        let lower = index.checked_sub(1).map(|i| self.limits[i]);
        let upper = self.limits.get(index).copied();

        (lower, upper)
    }
}

impl TryFrom<Vec<i64>> for Limits {
    type Error = Error;

    fn try_from(limits: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(limits)
    }
}

impl From<Limits> for Vec<i64> {
    fn from(limits: Limits) -> Self {
        limits.limits.into_vec()
    }
}
