use std::time::Duration;

use reqwest::{Client, header::CONTENT_TYPE};

use crate::{Error, Message, Result};

/// Long-lived HTTP client issuing one PUT per message.
///
/// Built once per block; the underlying connection pool is reused across
/// calls. Connecting is bounded by the dial timeout, so an unreachable
/// endpoint fails instead of hanging the block.
#[derive(Debug, Clone)]
pub(crate) struct PutClient {
    client: Client,
}

impl PutClient {
    pub fn new(dial_timeout: Duration) -> Result<Self> {
        // Requests go straight to the target; proxy env vars are not consulted.
        let client = Client::builder()
            .connect_timeout(dial_timeout)
            .no_proxy()
            .build()
            .map_err(Error::ClientBuild)?;
        Ok(Self { client })
    }

    /// PUT the JSON encoding of `message` to `url` and return the response body
    /// decoded with [`decode_body`].
    ///
    /// Any response counts, whatever its status. Each failing step maps to
    /// its own error variant; nothing is retried.
    pub async fn put(&self, url: &str, content_type: &str, message: &Message) -> Result<String> {
        let body = serde_json::to_vec(message)?;

        let request = self
            .client
            .put(url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .build()
            .map_err(Error::RequestConstruction)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(Error::Transport)?;

        // Consumes the response; the connection goes back to the pool or is
        // closed whether or not the read succeeds.
        let body = response.bytes().await.map_err(Error::ResponseRead)?;
        Ok(decode_body(&body))
    }
}

/// Body bytes as text. Invalid UTF-8 sequences become U+FFFD; the
/// `Content-Type` charset is not consulted.
pub(crate) fn decode_body(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}
