use std::sync::Arc;

use tokio::sync::broadcast::Sender;

use crate::{BlockMeta, Error, ErrorReport, Label, Message};

/// Runtime-provided context for a block to talk to the graph.
///
/// Use it to:
/// - `emit(message)`: broadcast a derived message to every downstream subscriber
/// - `report(error)`: surface a non-fatal fault on the error route
/// - `meta()`: retrieve the block's identity for logging
#[derive(Clone)]
pub struct Context {
    pub(crate) meta: Arc<BlockMeta>,
    pub(crate) outbound: Sender<Message>,
    pub(crate) errors: Sender<Arc<ErrorReport>>,
}

impl Context {
    pub fn new(
        meta: Arc<BlockMeta>,
        outbound: Sender<Message>,
        errors: Sender<Arc<ErrorReport>>,
    ) -> Self {
        Self {
            meta,
            outbound,
            errors,
        }
    }

    /// Broadcast a message downstream and return how many subscribers got it.
    ///
    /// A block with no subscribers still runs; the message is dropped.
    pub fn emit(&self, message: Message) -> usize {
        match self.outbound.send(message) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::trace!(block = %self.meta, "no subscribers, message dropped");
                0
            }
        }
    }

    /// Log the error and publish it on the error route.
    pub fn report(&self, error: Error) {
        tracing::error!(
            block = %self.meta,
            error = %error,
            kind = %error.label(),
            "block error"
        );
        let _ = self
            .errors
            .send(Arc::new(ErrorReport::new(&self.meta, error)));
    }

    /// The block's identity as bound at setup.
    #[inline]
    pub fn meta(&self) -> &BlockMeta {
        &self.meta
    }
}
