use crate::{bisect_right, Bucket, Error, Limits};
use log::debug;

/// Bins the data into counts using the provided limits.
///
/// The result has `limits.len() + 1` entries. Each data value increments the
/// count at `bisect_right(limits, value)`, so values equal to a limit are
/// counted in the bin above it. `limits` should be sorted in ascending order,
/// which is not checked here. Use [`Limits`] and [`Bins`] for a validated
/// variant.
pub fn bin_it(limits: &[i64], data: &[i64]) -> Vec<u64> {
    let mut bins = vec![0_u64; limits.len() + 1];

    for value in data {
        let index = bisect_right(limits, value);
        bins[index] = bins[index].wrapping_add(1);
    }

    bins
}

/// A set of bin counters that uses plain 64bit counters for each bucket
/// defined by a set of [`Limits`].
#[derive(Clone, Debug, PartialEq)]
pub struct Bins {
    limits: Limits,
    counts: Box<[u64]>,
}

impl Bins {
    /// Creates a new set of zeroed bins for the provided limits.
    pub fn new(limits: Limits) -> Self {
        let counts: Box<[u64]> = vec![0; limits.buckets()].into();

        Self { limits, counts }
    }

    /// Increment the counter for the bucket corresponding to the provided value
    /// by one.
    pub fn increment(&mut self, value: i64) {
        self.add(value, 1)
    }

    /// Add some count to the counter for the bucket corresponding to the
    /// provided value.
    pub fn add(&mut self, value: i64, count: u64) {
        let index = self.limits.locate(value);
        self.counts[index] = self.counts[index].wrapping_add(count);
    }

    /// Resets all counters to zero.
    pub fn clear(&mut self) {
        self.counts.iter_mut().for_each(|count| *count = 0);
    }

    /// Get a reference to the raw counters.
    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    /// Consumes the bins and returns the raw counters.
    pub fn into_counts(self) -> Vec<u64> {
        self.counts.into_vec()
    }

    /// Returns the limits which define the buckets.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns the sum of all counters.
    pub fn total(&self) -> u128 {
        self.counts.iter().map(|v| *v as u128).sum()
    }

    /// Returns the bucket at the provided index, if it exists.
    pub fn bucket(&self, index: usize) -> Option<Bucket> {
        let count = *self.counts.get(index)?;
        let (lower, upper) = self.limits.bucket_range(index);

        Some(Bucket {
            count,
            lower,
            upper,
        })
    }

    /// Adds the other bins to these bins and returns the result as a new set
    /// of bins.
    ///
    /// An error is returned if the two sets of bins have different limits or
    /// if there is an overflow.
    pub fn checked_add(&self, other: &Bins) -> Result<Bins, Error> {
        self.check_compatible(other)?;

        let mut result = self.clone();

        for (this, other) in result.counts.iter_mut().zip(other.counts.iter()) {
            *this = this.checked_add(*other).ok_or(Error::Overflow)?;
        }

        Ok(result)
    }

    /// Adds the other bins to these bins and returns the result as a new set
    /// of bins.
    ///
    /// An error is returned if the two sets of bins have different limits.
    pub fn wrapping_add(&self, other: &Bins) -> Result<Bins, Error> {
        self.check_compatible(other)?;

        let mut result = self.clone();

        for (this, other) in result.counts.iter_mut().zip(other.counts.iter()) {
            *this = this.wrapping_add(*other);
        }

        Ok(result)
    }

    fn check_compatible(&self, other: &Bins) -> Result<(), Error> {
        if self.limits != other.limits {
            debug!(
                "cannot combine bins: limits {:?} differ from {:?}",
                self.limits.as_slice(),
                other.limits.as_slice()
            );
            return Err(Error::IncompatibleLimits);
        }

        Ok(())
    }
}

impl Extend<i64> for Bins {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.increment(value);
        }
    }
}

impl<'a> IntoIterator for &'a Bins {
    type Item = Bucket;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            index: 0,
            bins: self,
        }
    }
}

/// An iterator across the buckets, in ascending order.
pub struct Iter<'a> {
    index: usize,
    bins: &'a Bins,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Bucket;

    fn next(&mut self) -> Option<<Self as std::iter::Iterator>::Item> {
        let bucket = self.bins.bucket(self.index)?;
        self.index += 1;
        Some(bucket)
    }
}
