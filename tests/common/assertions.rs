//! Custom assertion helpers
//!
//! Provides assertions for the responses the pages produce, with more
//! descriptive failure messages than a bare `assert_eq!`.

use axum::http::StatusCode;
use axum_test::TestResponse;

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert a `303 See Other` to `location`
pub fn assert_redirect(response: &TestResponse, location: &str) {
    assert_eq!(
        response.status_code(),
        StatusCode::SEE_OTHER,
        "expected a redirect to {}, got body: {}",
        location,
        response.text()
    );
    assert_eq!(response.header("location"), location);
}

/// Assert a re-rendered page with `status` whose body contains `message`
pub fn assert_page_error(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status_code(), status, "body: {}", response.text());
    let body = response.text();
    assert!(
        body.contains(message),
        "expected page to contain {:?}, got: {}",
        message,
        body
    );
}
