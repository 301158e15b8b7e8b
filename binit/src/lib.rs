// Copyright 2022 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bin integers into counts according to a sorted set of boundary limits.
//!
//! Each value is placed using an upper-bound binary search, so a value equal
//! to a limit is counted in the bin above that limit.
//!
//! ```
//! let bins = binit::bin_it(&[10, 20], &[5, 10, 15, 20, 25]);
//! assert_eq!(bins, vec![1, 2, 2]);
//! ```
//!
//! For incremental recording against a validated boundary set, see [`Bins`]
//! and [`Limits`].

mod bins;
mod bisect;
mod bucket;
mod error;
mod limits;

pub mod fixture;

pub use bins::{bin_it, Bins, Iter};
pub use bisect::bisect_right;
pub use bucket::Bucket;
pub use error::Error;
pub use limits::Limits;
