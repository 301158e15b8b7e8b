// Copyright 2022 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runs the fixed self-check, panicking if the binning result differs from
//! the expected counts.

use binit::{bin_it, fixture};

fn main() {
    assert_eq!(bin_it(fixture::LIMITS, fixture::DATA), fixture::EXPECTED);
}
