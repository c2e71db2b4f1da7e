//! Purpose: Group runs of adjacent elements that share a derived key.
//! Exports: `GroupAdjacent`.
//! Invariants: Concatenating group bodies reproduces the source order; groups are non-empty.

pub struct GroupAdjacent<I: Iterator, K, F> {
    source: I,
    key_fn: F,
    pending: Option<(K, Vec<I::Item>)>,
    done: bool,
}

impl<I: Iterator, K, F> GroupAdjacent<I, K, F> {
    pub(crate) fn new(source: I, key_fn: F) -> Self {
        Self {
            source,
            key_fn,
            pending: None,
            done: false,
        }
    }
}

impl<I, K, F> Iterator for GroupAdjacent<I, K, F>
where
    I: Iterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    type Item = (K, Vec<I::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.source.next() {
                Some(item) => {
                    let key = (self.key_fn)(&item);
                    match self.pending.as_mut() {
                        Some((current, body)) if *current == key => body.push(item),
                        Some(_) => return self.pending.replace((key, vec![item])),
                        None => self.pending = Some((key, vec![item])),
                    }
                }
                None => {
                    self.done = true;
                    return self.pending.take();
                }
            }
        }
    }
}
