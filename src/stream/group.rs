//! Purpose: Adjacent-run grouping over an asynchronous stream.
//! Exports: `GroupAdjacentStream`.
//! Invariants: Same run contract as the sync adapter; the source is dropped at stream end.

use tokio_stream::{Stream, StreamExt};

pub struct GroupAdjacentStream<S: Stream, K, F> {
    source: Option<S>,
    key_fn: F,
    pending: Option<(K, Vec<S::Item>)>,
}

impl<S, K, F> GroupAdjacentStream<S, K, F>
where
    S: Stream + Unpin,
    K: PartialEq,
    F: FnMut(&S::Item) -> K,
{
    pub(crate) fn new(source: S, key_fn: F) -> Self {
        Self {
            source: Some(source),
            key_fn,
            pending: None,
        }
    }

    pub async fn next_group(&mut self) -> Option<(K, Vec<S::Item>)> {
        loop {
            let item = match self.source.as_mut() {
                Some(source) => source.next().await,
                None => return self.pending.take(),
            };
            match item {
                Some(item) => {
                    let key = (self.key_fn)(&item);
                    match self.pending.as_mut() {
                        Some((current, body)) if *current == key => body.push(item),
                        Some(_) => return self.pending.replace((key, vec![item])),
                        None => self.pending = Some((key, vec![item])),
                    }
                }
                None => {
                    self.source = None;
                    return self.pending.take();
                }
            }
        }
    }
}
