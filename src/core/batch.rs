//! Purpose: Fixed-size batching of a sequence into owned buckets.
//! Exports: `Batch`, `bucket_capacity`.
//! Invariants: Buckets never exceed the configured size; only the final bucket may be partial.

pub struct Batch<I: Iterator> {
    source: I,
    size: usize,
    done: bool,
}

impl<I: Iterator> Batch<I> {
    pub(crate) fn new(source: I, size: usize) -> Self {
        debug_assert!(size > 0);
        Self {
            source,
            size,
            done: false,
        }
    }
}

impl<I: Iterator> Iterator for Batch<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut bucket = Vec::with_capacity(bucket_capacity(self.source.size_hint(), self.size));
        while bucket.len() < self.size {
            match self.source.next() {
                Some(item) => bucket.push(item),
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        if bucket.is_empty() { None } else { Some(bucket) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lower, upper) = self.source.size_hint();
        (lower.div_ceil(self.size), upper.map(|hi| hi.div_ceil(self.size)))
    }
}

/// Preallocation only; the hint never decides how many elements are pulled.
pub(crate) fn bucket_capacity(hint: (usize, Option<usize>), size: usize) -> usize {
    let (lower, upper) = hint;
    upper.unwrap_or(lower).min(size)
}

#[cfg(test)]
mod tests {
    use super::bucket_capacity;
    use crate::core::seq::SeqExt;

    #[test]
    fn last_bucket_may_be_partial() {
        let buckets: Vec<_> = (1..=7).batch(3).collect();
        assert_eq!(buckets, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    }

    #[test]
    fn exact_division_has_no_partial_bucket() {
        let buckets: Vec<_> = (1..=6).batch(3).collect();
        assert_eq!(buckets, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn empty_source_yields_no_buckets() {
        let mut buckets = std::iter::empty::<u8>().batch(4);
        assert!(buckets.next().is_none());
    }

    #[test]
    #[should_panic(expected = "batch size must be non-zero")]
    fn zero_size_is_a_contract_violation() {
        let _ = (1..=3).batch(0);
    }

    #[test]
    fn capacity_follows_the_hint_but_caps_at_size() {
        assert_eq!(bucket_capacity((10, Some(10)), 4), 4);
        assert_eq!(bucket_capacity((2, Some(2)), 4), 2);
        assert_eq!(bucket_capacity((0, None), 4), 0);
    }

    #[test]
    fn size_hint_counts_buckets() {
        let buckets = (1..=7).batch(3);
        assert_eq!(buckets.size_hint(), (3, Some(3)));
    }
}
