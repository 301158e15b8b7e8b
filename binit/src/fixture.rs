//! The fixed self-check input and its expected bin counts.

/// Boundary limits for the self-check.
pub const LIMITS: &[i64] = &[23, 37, 43, 53, 67, 83];

/// Fifty data values for the self-check.
pub const DATA: &[i64] = &[
    95, 21, 94, 12, 99, 4, 70, 75, 83, 93, 52, 80, 57, 5, 53, 86, 65, 17, 92, 83, 71, 61, 54, 58,
    47, 16, 8, 9, 32, 84, 7, 87, 46, 19, 30, 37, 96, 6, 98, 40, 79, 97, 45, 64, 60, 29, 49, 36,
    43, 55,
];

/// The counts `bin_it(LIMITS, DATA)` must produce.
pub const EXPECTED: &[u64] = &[11, 4, 2, 6, 9, 5, 13];
