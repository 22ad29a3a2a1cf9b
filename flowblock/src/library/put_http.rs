use serde::{Deserialize, Serialize};
use serde_json::json;

use super::put_client::PutClient;
use crate::{Block, Config, Context, Error, Message, Result};

/// Rule of a [`PutHttp`] block.
///
/// Both fields are required strings. Empty strings are accepted as-is;
/// other fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutHttpRule {
    #[serde(rename = "Url")]
    pub url: String,
    #[serde(rename = "ContentType")]
    pub content_type: String,
}

impl Default for PutHttpRule {
    fn default() -> Self {
        Self {
            url: String::new(),
            content_type: "application/json".into(),
        }
    }
}

impl PutHttpRule {
    /// Parse a rule payload, rejecting it when either field is missing or not a string.
    pub fn parse(rule: Message) -> Result<Self> {
        serde_json::from_value(rule).map_err(Error::configuration)
    }

    pub fn to_message(&self) -> Message {
        json!({
            "Url": self.url,
            "ContentType": self.content_type,
        })
    }
}

/// PUTs every inbound message as JSON to a URL.
///
/// For each message that gets any HTTP response, emits
/// `{"Response": <body text>}` downstream. The body is read as UTF-8 and
/// invalid sequences are replaced with U+FFFD, since a JSON string cannot
/// carry raw bytes. Until a rule arrives the URL is empty and every message
/// fails with [`Error::RequestConstruction`].
#[derive(Debug)]
pub struct PutHttp {
    rule: PutHttpRule,
    client: PutClient,
}

impl PutHttp {
    pub const KIND: &'static str = "PutHttp";
    pub const DESCRIPTION: &'static str = "PUTs inbound messages as HTTP requests to a URL.";

    /// Create the block and its HTTP client, bounded by `config.dial_timeout`.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            rule: PutHttpRule::default(),
            client: PutClient::new(config.dial_timeout)?,
        })
    }

    pub fn rule(&self) -> &PutHttpRule {
        &self.rule
    }
}

impl Block for PutHttp {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    async fn handle_message(&mut self, message: Message, ctx: &Context) -> Result<()> {
        let PutHttpRule { url, content_type } = &self.rule;
        tracing::trace!(block = %ctx.meta(), %url, "PUT");
        let body = self.client.put(url, content_type, &message).await?;
        ctx.emit(json!({ "Response": body }));
        Ok(())
    }

    fn handle_rule(&mut self, rule: Message) -> Result<()> {
        let rule = PutHttpRule::parse(rule)?;
        tracing::debug!(url = %rule.url, content_type = %rule.content_type, "rule applied");
        self.rule = rule;
        Ok(())
    }

    fn query_rule(&self) -> Message {
        self.rule.to_message()
    }
}
