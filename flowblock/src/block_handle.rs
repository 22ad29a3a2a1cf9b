use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};
use tokio_util::sync::CancellationToken;

use crate::{Error, ErrorReport, Message, Result};

/// The graph-side view of a block's routes.
///
/// Returned by [`Routes::new`](crate::Routes::new). Handles are cheap to
/// clone; every clone talks to the same block. Dropping all of them
/// detaches the block, which then stops as if it had been told to quit.
///
/// # Example
///
/// ```ignore
/// let mut out = handle.subscribe();
/// handle.update_rule(json!({"Url": url, "ContentType": "text/plain"})).await?;
/// handle.send(json!({"a": 1})).await?;
/// let response = out.recv().await?;
/// ```
#[derive(Debug, Clone)]
pub struct BlockHandle {
    inbound: mpsc::Sender<Message>,
    rule: mpsc::Sender<Message>,
    query: mpsc::Sender<oneshot::Sender<Message>>,
    outbound: broadcast::Sender<Message>,
    errors: broadcast::Sender<Arc<ErrorReport>>,
    quit: CancellationToken,
}

impl BlockHandle {
    pub(crate) fn new(
        inbound: mpsc::Sender<Message>,
        rule: mpsc::Sender<Message>,
        query: mpsc::Sender<oneshot::Sender<Message>>,
        outbound: broadcast::Sender<Message>,
        errors: broadcast::Sender<Arc<ErrorReport>>,
        quit: CancellationToken,
    ) -> Self {
        Self {
            inbound,
            rule,
            query,
            outbound,
            errors,
            quit,
        }
    }

    /// Deliver a message on the inbound data route.
    /// This awaits route capacity rather than dropping the message.
    pub async fn send(&self, message: Message) -> Result<()> {
        self.inbound.send(message).await?;
        Ok(())
    }

    /// Deliver a rule update. Malformed rules are rejected by the block and
    /// show up on [`errors`](Self::errors); the previous rule stays in force.
    pub async fn update_rule(&self, rule: Message) -> Result<()> {
        self.rule.send(rule).await?;
        Ok(())
    }

    /// Ask the block for its current rule and wait for the reply.
    pub async fn query(&self) -> Result<Message> {
        let (tx, rx) = oneshot::channel();
        self.query.send(tx).await?;
        rx.await.map_err(|_| Error::QueryDropped)
    }

    /// Subscribe to messages the block emits from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Message> {
        self.outbound.subscribe()
    }

    /// Subscribe to error reports the block publishes from now on.
    pub fn errors(&self) -> broadcast::Receiver<Arc<ErrorReport>> {
        self.errors.subscribe()
    }

    /// Signal the block to stop after its current event.
    #[inline]
    pub fn quit(&self) {
        self.quit.cancel();
    }

    /// Whether the block has released its routes.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.inbound.is_closed()
    }
}
