//! Purpose: Lockstep zip pulls over asynchronous streams.
//! Exports: `EquiZipStream2..4`, `ZipShortestStream2..4`, `ZipLongestStream2..4`.
//! Role: Pull-based async state machines behind the `SeqStreamExt` zip methods.
//! Invariants: Sources advance in lockstep and are dropped at the terminal transition.
//! Invariants: A strict zip yields its mismatch error once, then only `None`.

use tokio_stream::{Stream, StreamExt};

use crate::core::error::Error;
use crate::core::zip::equi_mismatch;

macro_rules! stream_zip_family {
    ($equi:ident, $shortest:ident, $longest:ident, $($S:ident => $s:ident),+) => {
        pub struct $equi<$($S: Stream),+> {
            $($s: Option<$S>,)+
            done: bool,
        }

        impl<$($S),+> $equi<$($S),+>
        where
            $($S: Stream + Unpin,)+
        {
            pub(crate) fn new($($s: $S),+) -> Self {
                Self {
                    $($s: Some($s),)+
                    done: false,
                }
            }

            /// Pull the next lockstep tuple, the mismatch error, or `None` at a clean end.
            pub async fn next_tuple(&mut self) -> Option<Result<($($S::Item,)+), Error>> {
                if self.done {
                    return None;
                }
                $(
                    let $s = match self.$s.as_mut() {
                        Some(source) => source.next().await,
                        None => None,
                    };
                )+
                let present = [$($s.is_some()),+];
                if present.iter().all(|p| *p) {
                    return Some(Ok(($($s?,)+)));
                }
                self.finish();
                if present.iter().all(|p| !*p) {
                    return None;
                }
                let side = present.iter().position(|p| !*p).unwrap_or(0);
                Some(Err(equi_mismatch(side)))
            }

            fn finish(&mut self) {
                self.done = true;
                $(self.$s = None;)+
            }
        }

        pub struct $shortest<$($S: Stream),+> {
            $($s: Option<$S>,)+
            done: bool,
        }

        impl<$($S),+> $shortest<$($S),+>
        where
            $($S: Stream + Unpin,)+
        {
            pub(crate) fn new($($s: $S),+) -> Self {
                Self {
                    $($s: Some($s),)+
                    done: false,
                }
            }

            pub async fn next_tuple(&mut self) -> Option<($($S::Item,)+)> {
                if self.done {
                    return None;
                }
                $(
                    let $s = match self.$s.as_mut() {
                        Some(source) => source.next().await,
                        None => None,
                    };
                    let Some($s) = $s else {
                        self.finish();
                        return None;
                    };
                )+
                Some(($($s,)+))
            }

            fn finish(&mut self) {
                self.done = true;
                $(self.$s = None;)+
            }
        }

        pub struct $longest<$($S: Stream),+> {
            $($s: Option<$S>,)+
            done: bool,
        }

        impl<$($S),+> $longest<$($S),+>
        where
            $($S: Stream + Unpin,)+
        {
            pub(crate) fn new($($s: $S),+) -> Self {
                Self {
                    $($s: Some($s),)+
                    done: false,
                }
            }

            pub async fn next_tuple(&mut self) -> Option<($(Option<$S::Item>,)+)> {
                if self.done {
                    return None;
                }
                $(
                    let $s = match self.$s.as_mut() {
                        Some(source) => source.next().await,
                        None => None,
                    };
                    if $s.is_none() {
                        self.$s = None;
                    }
                )+
                if [$($s.is_some()),+].iter().any(|p| *p) {
                    Some(($($s,)+))
                } else {
                    self.done = true;
                    None
                }
            }
        }
    };
}

stream_zip_family!(EquiZipStream2, ZipShortestStream2, ZipLongestStream2, A => a, B => b);
stream_zip_family!(EquiZipStream3, ZipShortestStream3, ZipLongestStream3, A => a, B => b, C => c);
stream_zip_family!(EquiZipStream4, ZipShortestStream4, ZipLongestStream4, A => a, B => b, C => c, D => d);
