//! Browser `fetch` transport.

use async_trait::async_trait;
use codedesk_client::{HttpReply, Transport, TransportError};
use gloo_net::http::Request;
use serde_json::Value;
use url::Url;

/// Posts JSON through `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn post_json(&self, url: &Url, body: &Value) -> Result<HttpReply, TransportError> {
        let response = Request::post(url.as_str())
            .json(body)
            .map_err(|err| TransportError::new(err.to_string()))?
            .send()
            .await
            .map_err(|err| TransportError::new(err.to_string()))?;
        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|err| TransportError::new(err.to_string()))?;
        Ok(HttpReply { status, body })
    }
}
