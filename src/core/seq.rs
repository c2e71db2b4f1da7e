//! Purpose: The `SeqExt` extension trait: zips, folds, batching, and grouping on iterators.
//! Exports: `SeqExt` (blanket impl for every `Iterator`).
//! Role: Single import point for the synchronous operator surface.
//! Invariants: Adapter constructors validate arguments eagerly and consume nothing.

use crate::core::batch::Batch;
use crate::core::error::Error;
use crate::core::fold::seq_folds;
use crate::core::group::GroupAdjacent;
use crate::core::zip::{
    EquiZip2, EquiZip3, EquiZip4, ZipLongest2, ZipLongest3, ZipLongest4, ZipShortest2,
    ZipShortest3, ZipShortest4,
};

pub trait SeqExt: Iterator {
    /// Pair corresponding elements, requiring both sequences to agree in length.
    ///
    /// Yields `Ok` tuples while every source advances; when one source ends
    /// before the others the adapter yields a single `Err` naming the short
    /// side, then fuses.
    fn equi_zip<B>(self, second: B) -> EquiZip2<Self, B::IntoIter>
    where
        Self: Sized,
        B: IntoIterator,
    {
        EquiZip2::new(self, second.into_iter())
    }

    fn equi_zip3<B, C>(self, second: B, third: C) -> EquiZip3<Self, B::IntoIter, C::IntoIter>
    where
        Self: Sized,
        B: IntoIterator,
        C: IntoIterator,
    {
        EquiZip3::new(self, second.into_iter(), third.into_iter())
    }

    fn equi_zip4<B, C, D>(
        self,
        second: B,
        third: C,
        fourth: D,
    ) -> EquiZip4<Self, B::IntoIter, C::IntoIter, D::IntoIter>
    where
        Self: Sized,
        B: IntoIterator,
        C: IntoIterator,
        D: IntoIterator,
    {
        EquiZip4::new(self, second.into_iter(), third.into_iter(), fourth.into_iter())
    }

    /// Pair corresponding elements, ending at the shortest sequence.
    fn zip_shortest<B>(self, second: B) -> ZipShortest2<Self, B::IntoIter>
    where
        Self: Sized,
        B: IntoIterator,
    {
        ZipShortest2::new(self, second.into_iter())
    }

    fn zip_shortest3<B, C>(
        self,
        second: B,
        third: C,
    ) -> ZipShortest3<Self, B::IntoIter, C::IntoIter>
    where
        Self: Sized,
        B: IntoIterator,
        C: IntoIterator,
    {
        ZipShortest3::new(self, second.into_iter(), third.into_iter())
    }

    fn zip_shortest4<B, C, D>(
        self,
        second: B,
        third: C,
        fourth: D,
    ) -> ZipShortest4<Self, B::IntoIter, C::IntoIter, D::IntoIter>
    where
        Self: Sized,
        B: IntoIterator,
        C: IntoIterator,
        D: IntoIterator,
    {
        ZipShortest4::new(self, second.into_iter(), third.into_iter(), fourth.into_iter())
    }

    /// Pair corresponding elements, padding exhausted sides with `None` until
    /// every sequence ends.
    fn zip_longest<B>(self, second: B) -> ZipLongest2<Self, B::IntoIter>
    where
        Self: Sized,
        B: IntoIterator,
    {
        ZipLongest2::new(self, second.into_iter())
    }

    fn zip_longest3<B, C>(self, second: B, third: C) -> ZipLongest3<Self, B::IntoIter, C::IntoIter>
    where
        Self: Sized,
        B: IntoIterator,
        C: IntoIterator,
    {
        ZipLongest3::new(self, second.into_iter(), third.into_iter())
    }

    fn zip_longest4<B, C, D>(
        self,
        second: B,
        third: C,
        fourth: D,
    ) -> ZipLongest4<Self, B::IntoIter, C::IntoIter, D::IntoIter>
    where
        Self: Sized,
        B: IntoIterator,
        C: IntoIterator,
        D: IntoIterator,
    {
        ZipLongest4::new(self, second.into_iter(), third.into_iter(), fourth.into_iter())
    }

    /// Yield buckets of `size` elements; the final bucket may be partial.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. Bucket capacity comes from the source's size
    /// hint, so exact-size sources allocate each bucket once.
    fn batch(self, size: usize) -> Batch<Self>
    where
        Self: Sized,
    {
        assert!(size > 0, "batch size must be non-zero");
        Batch::new(self, size)
    }

    /// Yield `(key, run)` for each run of adjacent elements with equal keys.
    fn group_adjacent<K, F>(self, key_fn: F) -> GroupAdjacent<Self, K, F>
    where
        Self: Sized,
        K: PartialEq,
        F: FnMut(&Self::Item) -> K,
    {
        GroupAdjacent::new(self, key_fn)
    }

    seq_folds! {
        fold1, 1, (v1);
        fold2, 2, (v1, v2);
        fold3, 3, (v1, v2, v3);
        fold4, 4, (v1, v2, v3, v4);
        fold5, 5, (v1, v2, v3, v4, v5);
        fold6, 6, (v1, v2, v3, v4, v5, v6);
        fold7, 7, (v1, v2, v3, v4, v5, v6, v7);
        fold8, 8, (v1, v2, v3, v4, v5, v6, v7, v8);
        fold9, 9, (v1, v2, v3, v4, v5, v6, v7, v8, v9);
        fold10, 10, (v1, v2, v3, v4, v5, v6, v7, v8, v9, v10);
        fold11, 11, (v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11);
        fold12, 12, (v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12);
        fold13, 13, (v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13);
        fold14, 14, (v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14);
        fold15, 15, (v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15);
        fold16, 16, (v1, v2, v3, v4, v5, v6, v7, v8, v9, v10, v11, v12, v13, v14, v15, v16);
    }
}

impl<I: Iterator> SeqExt for I {}
