//! Purpose: The `SeqStreamExt` extension trait: async zips, batching, and grouping.
//! Exports: `SeqStreamExt` (blanket impl for every `Stream`).
//! Role: Constructor surface for the pull-based async adapters; folds live in
//! `stream::fold` as free functions.
//! Invariants: Constructors validate arguments eagerly and consume nothing.

use tokio_stream::Stream;

use crate::stream::batch::BatchStream;
use crate::stream::group::GroupAdjacentStream;
use crate::stream::zip::{
    EquiZipStream2, EquiZipStream3, EquiZipStream4, ZipLongestStream2, ZipLongestStream3,
    ZipLongestStream4, ZipShortestStream2, ZipShortestStream3, ZipShortestStream4,
};

pub trait SeqStreamExt: Stream {
    /// Strict lockstep pairing; see the sync `equi_zip` for the contract.
    fn equi_zip<B>(self, second: B) -> EquiZipStream2<Self, B>
    where
        Self: Sized + Unpin,
        B: Stream + Unpin,
    {
        EquiZipStream2::new(self, second)
    }

    fn equi_zip3<B, C>(self, second: B, third: C) -> EquiZipStream3<Self, B, C>
    where
        Self: Sized + Unpin,
        B: Stream + Unpin,
        C: Stream + Unpin,
    {
        EquiZipStream3::new(self, second, third)
    }

    fn equi_zip4<B, C, D>(self, second: B, third: C, fourth: D) -> EquiZipStream4<Self, B, C, D>
    where
        Self: Sized + Unpin,
        B: Stream + Unpin,
        C: Stream + Unpin,
        D: Stream + Unpin,
    {
        EquiZipStream4::new(self, second, third, fourth)
    }

    fn zip_shortest<B>(self, second: B) -> ZipShortestStream2<Self, B>
    where
        Self: Sized + Unpin,
        B: Stream + Unpin,
    {
        ZipShortestStream2::new(self, second)
    }

    fn zip_shortest3<B, C>(self, second: B, third: C) -> ZipShortestStream3<Self, B, C>
    where
        Self: Sized + Unpin,
        B: Stream + Unpin,
        C: Stream + Unpin,
    {
        ZipShortestStream3::new(self, second, third)
    }

    fn zip_shortest4<B, C, D>(
        self,
        second: B,
        third: C,
        fourth: D,
    ) -> ZipShortestStream4<Self, B, C, D>
    where
        Self: Sized + Unpin,
        B: Stream + Unpin,
        C: Stream + Unpin,
        D: Stream + Unpin,
    {
        ZipShortestStream4::new(self, second, third, fourth)
    }

    fn zip_longest<B>(self, second: B) -> ZipLongestStream2<Self, B>
    where
        Self: Sized + Unpin,
        B: Stream + Unpin,
    {
        ZipLongestStream2::new(self, second)
    }

    fn zip_longest3<B, C>(self, second: B, third: C) -> ZipLongestStream3<Self, B, C>
    where
        Self: Sized + Unpin,
        B: Stream + Unpin,
        C: Stream + Unpin,
    {
        ZipLongestStream3::new(self, second, third)
    }

    fn zip_longest4<B, C, D>(
        self,
        second: B,
        third: C,
        fourth: D,
    ) -> ZipLongestStream4<Self, B, C, D>
    where
        Self: Sized + Unpin,
        B: Stream + Unpin,
        C: Stream + Unpin,
        D: Stream + Unpin,
    {
        ZipLongestStream4::new(self, second, third, fourth)
    }

    /// Async batching; same contract and panic condition as the sync `batch`.
    fn batch(self, size: usize) -> BatchStream<Self>
    where
        Self: Sized + Unpin,
    {
        assert!(size > 0, "batch size must be non-zero");
        BatchStream::new(self, size)
    }

    fn group_adjacent<K, F>(self, key_fn: F) -> GroupAdjacentStream<Self, K, F>
    where
        Self: Sized + Unpin,
        K: PartialEq,
        F: FnMut(&Self::Item) -> K,
    {
        GroupAdjacentStream::new(self, key_fn)
    }
}

impl<S: Stream> SeqStreamExt for S {}
