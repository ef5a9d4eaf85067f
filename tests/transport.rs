mod common;

use common::MockHttp;
use quaver_api::models::users::User;
use quaver_api::{Context, Error};
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn not_found_carries_service_message() {
    let http = MockHttp::new(404, r#"{"error":"User not found"}"#);
    let err = http
        .client()
        .users()
        .get_by_id(&Context::background(), 999_999)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(&err, Error::NotFound(message) if message == "User not found"));
    assert_eq!(err.to_string(), "quaver: User not found");
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn not_found_with_malformed_body_is_a_decode_error() {
    let http = MockHttp::new(404, "<html>nope</html>");
    let err = http
        .client()
        .maps()
        .get_by_id(&Context::background(), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn unexpected_status_skips_the_body() {
    let http = MockHttp::new(500, "");
    let err = http
        .client()
        .server_stats()
        .get(&Context::background())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnexpectedStatus(StatusCode::INTERNAL_SERVER_ERROR)));
    assert_eq!(err.to_string(), "unexpected status code: 500");
    assert_eq!(http.body_reads(), 0);
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let http = MockHttp::new(200, "{\"user\": ");
    let err = http
        .client()
        .users()
        .get_by_name(&Context::background(), "Swan")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn missing_envelope_field_decodes_to_default() {
    let http = MockHttp::json(json!({"something_else": true}));
    let client = http.client();
    let ctx = Context::background();

    let user = client.users().get_by_id(&ctx, 1).await.unwrap();
    assert_eq!(user, User::default());
    let ranked = client.mapsets().list_ranked(&ctx).await.unwrap();
    assert!(ranked.is_empty());
    let contains = client.playlists().contains_map(&ctx, 1, 2).await.unwrap();
    assert!(!contains);
}

#[tokio::test]
async fn requests_carry_the_user_agent() {
    let http = MockHttp::json(json!({}));
    http.client()
        .server_stats()
        .get(&Context::background())
        .await
        .unwrap();
    assert_eq!(http.user_agents(), vec!["quaver-tests".to_owned()]);
    assert_eq!(http.last_url(), "https://quaver.test/v2/server/stats");
}

#[tokio::test]
async fn cancelled_context_fails_without_waiting() {
    let http = MockHttp::json(json!({}));
    let (ctx, cancel) = Context::background().with_cancel();
    cancel.cancel();

    let err = http.client().server_stats().get(&ctx).await.unwrap_err();
    assert!(matches!(err, Error::Cancelled));
    assert!(err.is_cancelled());
}

#[tokio::test(start_paused = true)]
async fn cancel_during_request() {
    let http = MockHttp::slow(Duration::from_secs(60));
    let (ctx, cancel) = Context::background().with_cancel();
    let client = http.client();

    let call = tokio::spawn(async move { client.server_stats().get(&ctx).await });
    tokio::time::sleep(Duration::from_secs(1)).await;
    cancel.cancel();

    let err = call.await.unwrap().unwrap_err();
    assert!(matches!(err, Error::Cancelled));
    assert_eq!(http.body_reads(), 0);
}

#[tokio::test(start_paused = true)]
async fn deadline_during_request() {
    let http = MockHttp::slow(Duration::from_secs(60));
    let ctx = Context::background().with_timeout(Duration::from_secs(5));

    let err = http.client().server_stats().get(&ctx).await.unwrap_err();
    assert!(matches!(err, Error::DeadlineExceeded));
    assert_eq!(err.to_string(), "context deadline exceeded");
}
