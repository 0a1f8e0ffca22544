//! Integration tests for the async combinators on a tokio runtime.

use outcome::{failure, success, Outcome};
use std::time::Duration;
use tokio::time::Instant;

use crate::common::{init_tracing, lookup_account, parse_username};

#[tokio::test(start_paused = true)]
async fn test_select_async_resolves_after_callback() {
    let start = Instant::now();
    let result = success(5)
        .select_async(|value| async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            success(value * 2)
        })
        .await;

    assert!(start.elapsed() >= Duration::from_millis(100));
    assert_eq!(result, success(10));
}

#[tokio::test(start_paused = true)]
async fn test_validated_lookup_pipeline() {
    init_tracing();
    let result = parse_username(" bob ")
        .select_async(|name| lookup_account(name, Duration::from_millis(30)))
        .await
        .map(|id| format!("account #{id}"));

    assert_eq!(result, success("account #2".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_invalid_input_skips_lookup() {
    init_tracing();
    let start = Instant::now();
    let result = parse_username("")
        .select_async(|name| lookup_account(name, Duration::from_secs(5)))
        .await;

    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(result.errors_or_empty().as_slice(), ["username must not be empty"]);
}

#[tokio::test(start_paused = true)]
async fn test_lookup_failure_recovered_with_fallback() {
    let result = parse_username("carol")
        .select_async(|name| lookup_account(name, Duration::from_millis(10)))
        .await
        .select_or_else_async(
            |id| async move { success(id) },
            |errors| async move {
                assert_eq!(errors.as_slice(), ["no account for carol"]);
                lookup_account("alice".to_string(), Duration::from_millis(10)).await
            },
        )
        .await;

    assert_eq!(result, success(1));
}

#[tokio::test]
async fn test_fold_async_reports_either_branch() {
    let describe = |result: Outcome<u64>| async move {
        result
            .fold_async(
                |id| async move { format!("found {id}") },
                |errors| async move { format!("failed: {errors}") },
            )
            .await
    };

    assert_eq!(describe(success(7)).await, "found 7");
    assert_eq!(describe(failure(["gone", "really gone"])).await, "failed: gone; really gone");
}

#[tokio::test]
async fn test_inspect_async_borrows_outcome() {
    let result = lookup_account("alice".to_string(), Duration::ZERO).await;
    let mut seen = None;
    result
        .inspect_async(
            |id| {
                seen = Some(*id);
                async {}
            },
            |_| async {},
        )
        .await;

    assert_eq!(seen, Some(1));
    assert!(result.is_success());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_outcomes_cross_task_boundaries() {
    let shared = success(vec![1, 2, 3]);
    let handle = tokio::spawn(async move {
        shared
            .select_async(|values| async move { success(values.iter().sum::<i32>()) })
            .await
    });

    assert_eq!(handle.await.unwrap(), success(6));
}
