//! Purpose: Fixed-arity folds that consume an asynchronous stream.
//! Exports: `fold1`..`fold16`.
//! Role: Free async functions; the stream is consumed by value and dropped at return.
//! Invariants: Same count verdicts as the sync folds; surplus detected at element N+1.

use tokio_stream::{Stream, StreamExt};

use crate::core::error::Error;
use crate::core::fold::{arg_ty, to_array, too_long, too_short};

async fn collect_exact<S: Stream + Unpin>(
    mut source: S,
    arity: usize,
) -> Result<Vec<S::Item>, Error> {
    let (lower, _) = source.size_hint();
    let mut items = Vec::with_capacity(lower.min(arity));
    while let Some(item) = source.next().await {
        if items.len() == arity {
            return Err(too_long(arity));
        }
        items.push(item);
    }
    if items.len() < arity {
        return Err(too_short(arity, items.len()));
    }
    Ok(items)
}

macro_rules! stream_folds {
    ($($name:ident, $n:literal, ($($arg:ident),+));+ $(;)?) => {
        $(
            pub async fn $name<S, R, F>(source: S, folder: F) -> Result<R, Error>
            where
                S: Stream + Unpin,
                F: FnOnce($(arg_ty!($arg, S::Item)),+) -> R,
            {
                let items = collect_exact(source, $n).await?;
                let [$($arg),+] = to_array::<_, $n>(items)?;
                Ok(folder($($arg),+))
            }
        )+
    };
}

stream_folds! {
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
