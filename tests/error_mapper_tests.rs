use reqwest::StatusCode;
use tweetrelay::api::error_mapper::{map_remote_status, map_twitter_error};
use tweetrelay::core::models::ErrorResponse;
use tweetrelay::errors::TwitterError;

fn remote(code: u16) -> TwitterError {
    TwitterError::Remote {
        status: StatusCode::from_u16(code).unwrap(),
        detail: "detail from twitter".to_string(),
    }
}

#[test]
fn test_fixed_status_table() {
    let cases = [
        (400, "Bad request: Invalid parameters"),
        (401, "Unauthorized: Check your API keys and tokens"),
        (403, "Forbidden: You may not have permission to perform this action"),
        (404, "Not found: Tweet not found"),
        (429, "Rate limit exceeded: Try again later"),
        (500, "Twitter internal server error: Try again later"),
    ];

    for (code, message) in cases {
        assert_eq!(
            map_twitter_error(&remote(code)),
            ErrorResponse::new(code, message),
            "status {code}"
        );
    }
}

#[test]
fn test_unmapped_status_passes_through() {
    let envelope = map_twitter_error(&remote(418));
    assert_eq!(envelope.status_code, 418);
    assert_eq!(envelope.message, "Unexpected error: 418 I'm a teapot");

    let envelope = map_remote_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(envelope.status_code, 503);
    assert_eq!(envelope.message, "Unexpected error: 503 Service Unavailable");
}

#[test]
fn test_nonstandard_status_has_no_placeholder_text() {
    let envelope = map_twitter_error(&remote(420));
    assert_eq!(envelope.status_code, 420);
    assert_eq!(envelope.message, "Unexpected error: 420 Enhance Your Calm");

    let envelope = map_twitter_error(&remote(499));
    assert_eq!(envelope.status_code, 499);
    assert_eq!(envelope.message, "Unexpected error: 499");
    assert!(!envelope.message.contains("unknown"));
}

#[test]
fn test_transport_failure_is_500_with_cause() {
    let envelope = map_twitter_error(&TwitterError::Transport(
        "error sending request: connection refused".to_string(),
    ));

    assert_eq!(envelope.status_code, 500);
    assert_eq!(
        envelope.message,
        "Error: error sending request: connection refused"
    );
}

#[test]
fn test_decode_failure_is_500() {
    let envelope = map_twitter_error(&TwitterError::Decode("expected value".to_string()));
    assert_eq!(envelope.status_code, 500);
    assert!(envelope.message.starts_with("Error: "));
}

#[test]
fn test_not_found_maps_to_no_tweets() {
    assert_eq!(
        map_twitter_error(&TwitterError::NotFound),
        ErrorResponse::new(404, "No tweets to delete")
    );
}

#[test]
fn test_envelope_serializes_with_snake_case_keys() {
    let json = serde_json::to_value(ErrorResponse::new(429, "Rate limit exceeded: Try again later"))
        .unwrap();
    assert_eq!(
        json,
        serde_json::json!({"status_code": 429, "message": "Rate limit exceeded: Try again later"})
    );
}
