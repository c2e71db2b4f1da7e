// Async operator behavior, including lockstep pairing with late-arriving items.

use std::time::Duration;

use tokio_stream::wrappers::ReceiverStream;

use lockstep::api::{ErrorKind, SeqStreamExt};
use lockstep::stream::fold as stream_fold;

#[tokio::test]
async fn equi_zip4_pairs_across_all_streams() {
    let mut zipped = tokio_stream::iter([1, 2]).equi_zip4(
        tokio_stream::iter([3, 4]),
        tokio_stream::iter([5, 6]),
        tokio_stream::iter([7, 8]),
    );
    assert_eq!(
        zipped.next_tuple().await.expect("row").expect("ok"),
        (1, 3, 5, 7)
    );
    assert_eq!(
        zipped.next_tuple().await.expect("row").expect("ok"),
        (2, 4, 6, 8)
    );
    assert!(zipped.next_tuple().await.is_none());
}

#[tokio::test]
async fn equi_zip_waits_for_late_arrivals() {
    let (sender, receiver) = tokio::sync::mpsc::channel(1);
    tokio::spawn(async move {
        for value in [10u32, 20, 30] {
            tokio::time::sleep(Duration::from_millis(2)).await;
            if sender.send(value).await.is_err() {
                return;
            }
        }
    });

    let mut zipped = ReceiverStream::new(receiver).equi_zip(tokio_stream::iter([1u32, 2, 3]));
    assert_eq!(zipped.next_tuple().await.expect("pair").expect("ok"), (10, 1));
    assert_eq!(zipped.next_tuple().await.expect("pair").expect("ok"), (20, 2));
    assert_eq!(zipped.next_tuple().await.expect("pair").expect("ok"), (30, 3));
    assert!(zipped.next_tuple().await.is_none());
}

#[tokio::test]
async fn sources_are_released_at_the_terminal_transition() {
    let (sender, receiver) = tokio::sync::mpsc::channel(1);
    let mut zipped = tokio_stream::iter([1u32]).zip_shortest(ReceiverStream::new(receiver));

    sender.send(5u32).await.expect("receiver alive");
    assert_eq!(zipped.next_tuple().await, Some((1, 5)));
    // The first source is exhausted, so the zip finishes without polling the channel again.
    assert!(zipped.next_tuple().await.is_none());

    // The receiver half was dropped when the zip finished, so sends now fail.
    assert!(sender.send(6u32).await.is_err());
}

#[tokio::test]
async fn zip_shortest3_stops_at_the_shortest_stream() {
    let mut zipped = tokio_stream::iter(0..10).zip_shortest3(
        tokio_stream::iter(10..20),
        tokio_stream::iter([42]),
    );
    assert_eq!(zipped.next_tuple().await, Some((0, 10, 42)));
    assert!(zipped.next_tuple().await.is_none());
}

#[tokio::test]
async fn batch_then_fold_composes() {
    let mut batches = tokio_stream::iter(1u64..=8).batch(4);
    let mut folded = Vec::new();
    while let Some(bucket) = batches.next_batch().await {
        let sum = stream_fold::fold4(tokio_stream::iter(bucket), |a, b, c, d| a + b + c + d)
            .await
            .expect("full buckets");
        folded.push(sum);
    }
    assert_eq!(folded, vec![10, 26]);
}

#[tokio::test]
async fn group_adjacent_streams_runs_in_order() {
    let mut groups =
        tokio_stream::iter(["a", "a", "b", "b", "b", "a"]).group_adjacent(|s| s.len());
    // All keys are equal here, so the whole stream is one run.
    assert_eq!(
        groups.next_group().await,
        Some((1, vec!["a", "a", "b", "b", "b", "a"]))
    );
    assert!(groups.next_group().await.is_none());

    let mut groups = tokio_stream::iter([1, 1, 2]).group_adjacent(|v| *v);
    assert_eq!(groups.next_group().await, Some((1, vec![1, 1])));
    assert_eq!(groups.next_group().await, Some((2, vec![2])));
    assert!(groups.next_group().await.is_none());
}

#[tokio::test]
async fn stream_fold_arity_mismatch_names_counts() {
    let err = stream_fold::fold3(tokio_stream::iter([1, 2]), |a, b, c| a + b + c)
        .await
        .expect_err("short stream");
    assert_eq!(err.kind(), ErrorKind::TooShort);
    assert_eq!((err.expected(), err.actual()), (Some(3), Some(2)));
}
