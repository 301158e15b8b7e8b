/// Returns the index of the first element in `data` that is strictly greater
/// than `item`.
///
/// This is the insertion point that keeps `data` sorted with `item` placed
/// after any elements equal to it. The result is always in `0..=data.len()`.
/// `data` must be sorted in non-decreasing order, otherwise the result is
/// unspecified (but still in range).
pub fn bisect_right<T: Ord>(data: &[T], item: &T) -> usize {
    let mut low = 0;
    let mut high = data.len();

    while low < high {
        let middle = low + (high - low) / 2;
        if item < &data[middle] {
            high = middle;
        } else {
            low = middle + 1;
        }
    }

    low
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // linear scan used to check the binary search
    fn bisect_right_reference(data: &[i64], item: i64) -> usize {
        data.iter().take_while(|v| **v <= item).count()
    }

    #[test]
    fn empty() {
        let empty: [i64; 0] = [];
        assert_eq!(bisect_right(&empty, &0), 0);
        assert_eq!(bisect_right(&empty, &i64::MIN), 0);
        assert_eq!(bisect_right(&empty, &i64::MAX), 0);
    }

    #[test]
    fn equal_goes_right() {
        assert_eq!(bisect_right(&[10], &9), 0);
        assert_eq!(bisect_right(&[10], &10), 1);
        assert_eq!(bisect_right(&[10], &11), 1);

        assert_eq!(bisect_right(&[1, 2, 2, 2, 3], &2), 4);
        assert_eq!(bisect_right(&[2, 2, 2], &2), 3);
    }

    #[test]
    fn extremes() {
        let limits = [23, 37, 43, 53, 67, 83];
        assert_eq!(bisect_right(&limits, &i64::MIN), 0);
        assert_eq!(bisect_right(&limits, &22), 0);
        assert_eq!(bisect_right(&limits, &83), limits.len());
        assert_eq!(bisect_right(&limits, &i64::MAX), limits.len());
    }

    #[test]
    fn other_integer_types() {
        assert_eq!(bisect_right(&[1_u8, 5, 9], &5), 2);
        assert_eq!(bisect_right(&[u64::MAX], &u64::MAX), 1);
        assert_eq!(bisect_right(&[-3_i32, 0, 3], &-1), 1);
    }

    #[test]
    // the upper bound search agrees with a linear scan and is monotonic
    fn random() {
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let len = rng.gen_range(0..64);
            let mut limits: Vec<i64> = (0..len).map(|_| rng.gen_range(-100..100)).collect();
            limits.sort();

            let mut previous = 0;
            for item in -110..110 {
                let index = bisect_right(&limits, &item);
                assert_eq!(index, bisect_right_reference(&limits, item));
                assert!(index >= previous);
                previous = index;
            }
        }
    }
}
