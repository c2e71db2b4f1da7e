//! Purpose: Fixed-arity fold support: counted materialization and shared error shapes.
//! Exports: `collect_exact`, `to_array`, and the `seq_folds`/`arg_ty` macros used by `SeqExt`.
//! Invariants: Surplus is detected at element N+1 without draining the source.
//! Invariants: Size hints size the buffer; the element count alone decides the verdict.

use crate::core::error::{Error, ErrorKind};

pub(crate) fn too_long(arity: usize) -> Error {
    Error::new(ErrorKind::TooLong)
        .with_message("sequence holds more elements than the fold consumes")
        .with_expected(arity)
        .with_actual(arity + 1)
}

pub(crate) fn too_short(arity: usize, actual: usize) -> Error {
    Error::new(ErrorKind::TooShort)
        .with_message("sequence ended before the fold arity was reached")
        .with_expected(arity)
        .with_actual(actual)
}

pub(crate) fn collect_exact<I: Iterator>(mut source: I, arity: usize) -> Result<Vec<I::Item>, Error> {
    let (lower, _) = source.size_hint();
    let mut items = Vec::with_capacity(lower.min(arity));
    while let Some(item) = source.next() {
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

pub(crate) fn to_array<T, const N: usize>(items: Vec<T>) -> Result<[T; N], Error> {
    <[T; N]>::try_from(items)
        .map_err(|_| Error::new(ErrorKind::Internal).with_message("exact collect drifted from the fold arity"))
}

// Expands to the item type for each folder argument position.
macro_rules! arg_ty {
    ($arg:ident, $item:ty) => {
        $item
    };
}
pub(crate) use arg_ty;

// Generates the fixed-arity fold methods on `SeqExt`. Each consumes the
// source, requires exactly N elements, and hands all of them to the folder.
macro_rules! seq_folds {
    ($($name:ident, $n:literal, ($($arg:ident),+));+ $(;)?) => {
        $(
            fn $name<R, F>(self, folder: F) -> Result<R, Error>
            where
                Self: Sized,
                F: FnOnce($(crate::core::fold::arg_ty!($arg, Self::Item)),+) -> R,
            {
                let items = crate::core::fold::collect_exact(self, $n)?;
                let [$($arg),+] = crate::core::fold::to_array::<_, $n>(items)?;
                Ok(folder($($arg),+))
            }
        )+
    };
}
pub(crate) use seq_folds;

#[cfg(test)]
mod tests {
    use super::{collect_exact, to_array};
    use crate::core::error::ErrorKind;
    use crate::core::seq::SeqExt;

    #[test]
    fn collect_exact_accepts_exact_counts() {
        let items = collect_exact([1, 2, 3].into_iter(), 3).expect("exact");
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn collect_exact_rejects_short_sources() {
        let err = collect_exact([1, 2].into_iter(), 3).expect_err("short");
        assert_eq!(err.kind(), ErrorKind::TooShort);
        assert_eq!(err.expected(), Some(3));
        assert_eq!(err.actual(), Some(2));
    }

    #[test]
    fn collect_exact_stops_at_the_first_surplus_element() {
        let mut pulled = 0usize;
        let source = (0..100).inspect(|_| pulled += 1);
        let err = collect_exact(source, 3).expect_err("surplus");
        assert_eq!(err.kind(), ErrorKind::TooLong);
        assert_eq!(err.actual(), Some(4));
        assert_eq!(pulled, 4);
    }

    #[test]
    fn to_array_matches_collected_length() {
        let arr: [u8; 2] = to_array(vec![7, 9]).expect("array");
        assert_eq!(arr, [7, 9]);
        assert!(to_array::<u8, 3>(vec![7, 9]).is_err());
    }

    #[test]
    fn fold1_hands_over_the_single_element() {
        let out = std::iter::once(41).fold1(|v| v + 1).expect("fold");
        assert_eq!(out, 42);
    }

    #[test]
    fn fold3_applies_the_folder_to_all_elements() {
        let out = [1, 2, 3].into_iter().fold3(|a, b, c| a * 100 + b * 10 + c);
        assert_eq!(out.expect("fold"), 123);
    }

    #[test]
    fn fold16_consumes_the_full_window() {
        let out = (1..=16).fold16(|a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p| {
            a + b + c + d + e + f + g + h + i + j + k + l + m + n + o + p
        });
        assert_eq!(out.expect("fold"), (1..=16).sum::<i32>());
    }

    #[test]
    fn fold_arity_mismatches_carry_counts() {
        let short = [1, 2].into_iter().fold4(|a, b, c, d| a + b + c + d);
        let err = short.expect_err("short");
        assert_eq!(err.kind(), ErrorKind::TooShort);
        assert_eq!((err.expected(), err.actual()), (Some(4), Some(2)));

        let long = [1, 2, 3].into_iter().fold2(|a, b| a + b);
        let err = long.expect_err("long");
        assert_eq!(err.kind(), ErrorKind::TooLong);
        assert_eq!((err.expected(), err.actual()), (Some(2), Some(3)));
    }
}
