use std::error::Error;
use tweetrelay::errors::TwitterError;

#[test]
fn test_twitter_error_implements_error_trait() {
    // Verify TwitterError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = TwitterError::Transport("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_twitter_error_display() {
    let error = TwitterError::Transport("connection refused".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: connection refused"
    );

    let error = TwitterError::Config("TWITTER_CONSUMER_KEY: environment variable not found".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid configuration: TWITTER_CONSUMER_KEY: environment variable not found"
    );

    let error = TwitterError::Remote {
        status: reqwest::StatusCode::TOO_MANY_REQUESTS,
        detail: "Rate limit exceeded".to_string(),
    };
    assert_eq!(
        format!("{error}"),
        "Twitter API returned 429 Too Many Requests: Rate limit exceeded"
    );

    assert_eq!(format!("{}", TwitterError::NotFound), "No tweets found");
}

#[test]
fn test_remote_status_only_for_remote_errors() {
    let remote = TwitterError::Remote {
        status: reqwest::StatusCode::FORBIDDEN,
        detail: String::new(),
    };
    assert_eq!(remote.remote_status(), Some(reqwest::StatusCode::FORBIDDEN));
    assert_eq!(TwitterError::NotFound.remote_status(), None);
    assert_eq!(
        TwitterError::Decode("bad".to_string()).remote_status(),
        None
    );
}

#[test]
fn test_twitter_error_from_conversions() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: TwitterError = json_err.into();

    match err {
        TwitterError::Decode(msg) => assert!(msg.contains("EOF")),
        _ => panic!("Unexpected error type"),
    }

    // reqwest::Error cannot be built directly; this only checks the
    // conversion exists.
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> TwitterError {
        TwitterError::from(err)
    }
}
