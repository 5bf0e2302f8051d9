use crate::{AuthFailure, with_timeout};

use std::time::Duration;

use googletest::prelude::*;

#[tokio::test(start_paused = true)]
async fn given_fast_future_when_raced_then_result_passes_through() {
    let result = with_timeout("login", Duration::from_secs(10), async { Ok(7) }).await;

    assert_eq!(result.unwrap(), 7);
}

#[tokio::test(start_paused = true)]
async fn given_inner_failure_when_raced_then_failure_passes_through() {
    let result: Result<(), AuthFailure> = with_timeout("login", Duration::from_secs(10), async {
        Err(AuthFailure::invalid_credentials())
    })
    .await;

    assert!(matches!(result, Err(AuthFailure::InvalidCredentials { .. })));
}

#[tokio::test(start_paused = true)]
async fn given_slow_future_when_raced_then_timed_out_with_operation_and_limit() {
    // Given
    let slow = async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(())
    };

    // When
    let result = with_timeout("signup", Duration::from_secs(12), slow).await;

    // Then
    let Err(AuthFailure::TimedOut { operation, after, .. }) = result else {
        panic!("expected timeout, got {result:?}");
    };
    assert_that!(operation, eq("signup"));
    assert_that!(after, eq(Duration::from_secs(12)));
}
