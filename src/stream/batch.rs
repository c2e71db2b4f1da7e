//! Purpose: Fixed-size batching over an asynchronous stream.
//! Exports: `BatchStream`.
//! Invariants: Same bucket contract as the sync adapter; the source is dropped at stream end.

use tokio_stream::{Stream, StreamExt};

use crate::core::batch::bucket_capacity;

pub struct BatchStream<S: Stream> {
    source: Option<S>,
    size: usize,
}

impl<S: Stream + Unpin> BatchStream<S> {
    pub(crate) fn new(source: S, size: usize) -> Self {
        debug_assert!(size > 0);
        Self {
            source: Some(source),
            size,
        }
    }

    pub async fn next_batch(&mut self) -> Option<Vec<S::Item>> {
        let mut ended = false;
        let mut bucket = Vec::new();
        if let Some(source) = self.source.as_mut() {
            bucket.reserve(bucket_capacity(source.size_hint(), self.size));
            while bucket.len() < self.size {
                match source.next().await {
                    Some(item) => bucket.push(item),
                    None => {
                        ended = true;
                        break;
                    }
                }
            }
        } else {
            return None;
        }
        if ended {
            self.source = None;
        }
        if bucket.is_empty() { None } else { Some(bucket) }
    }
}

#[cfg(test)]
mod tests {
    use crate::stream::seq::SeqStreamExt;

    #[tokio::test]
    async fn buckets_match_the_sync_contract() {
        let mut batches = tokio_stream::iter(1..=7).batch(3);
        assert_eq!(batches.next_batch().await, Some(vec![1, 2, 3]));
        assert_eq!(batches.next_batch().await, Some(vec![4, 5, 6]));
        assert_eq!(batches.next_batch().await, Some(vec![7]));
        assert!(batches.next_batch().await.is_none());
        assert!(batches.next_batch().await.is_none());
    }

    #[tokio::test]
    async fn empty_stream_yields_no_buckets() {
        let mut batches = tokio_stream::iter(std::iter::empty::<u8>()).batch(2);
        assert!(batches.next_batch().await.is_none());
    }
}
