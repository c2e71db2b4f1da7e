//! Purpose: Define the stable public Rust API boundary for lockstep.
//! Exports: Operator traits, adapter types, and the error model.
//! Role: Public, additive-only surface; binaries and tests import from here.
//! Invariants: Re-exports only; operator semantics live in `core` and `stream`.

#[doc(hidden)]
pub use crate::core::error::to_exit_code;

pub use crate::core::batch::Batch;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::group::GroupAdjacent;
pub use crate::core::keymap::OptionKeyMap;
pub use crate::core::lock::{Lock, LockGuard};
pub use crate::core::seq::SeqExt;
pub use crate::core::zip::{
    EquiZip2, EquiZip3, EquiZip4, ZipLongest2, ZipLongest3, ZipLongest4, ZipShortest2,
    ZipShortest3, ZipShortest4,
};
pub use crate::stream::batch::BatchStream;
pub use crate::stream::fold as stream_fold;
pub use crate::stream::group::GroupAdjacentStream;
pub use crate::stream::seq::SeqStreamExt;
pub use crate::stream::zip::{
    EquiZipStream2, EquiZipStream3, EquiZipStream4, ZipLongestStream2, ZipLongestStream3,
    ZipLongestStream4, ZipShortestStream2, ZipShortestStream3, ZipShortestStream4,
};
