//! Canned backend replies on an `httpmock` server.

use httpmock::prelude::*;
use httpmock::{Mock, MockServer};
use serde_json::Value;

/// Answer every POST to `path` with `status` and a JSON `reply`.
pub fn reply_json<'a>(server: &'a MockServer, path: &str, status: u16, reply: Value) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST).path(path);
        then.status(status)
            .header("content-type", "application/json")
            .json_body(reply);
    })
}

/// Answer a POST to `path` only when its JSON body equals `expected`.
pub fn expect_json<'a>(
    server: &'a MockServer,
    path: &str,
    expected: Value,
    status: u16,
    reply: Value,
) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path(path)
            .header("content-type", "application/json")
            .json_body(expected);
        then.status(status)
            .header("content-type", "application/json")
            .json_body(reply);
    })
}

/// Answer every POST to `path` with `status` and a raw text body.
pub fn reply_text<'a>(server: &'a MockServer, path: &str, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST).path(path);
        then.status(status).body(body);
    })
}

/// Catch-all for asserting that nothing was sent to `path`.
pub fn watch<'a>(server: &'a MockServer, path: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.path(path);
        then.status(200);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn watch_starts_without_hits() {
        let server = MockServer::start();
        let mock = watch(&server, "/check-code");
        mock.assert_hits(0);
        let _ = reply_json(&server, "/git/pull", 200, json!({"message": "ok"}));
    }
}
