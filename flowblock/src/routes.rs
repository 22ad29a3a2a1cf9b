use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};
use tokio_util::sync::CancellationToken;

use crate::{BlockHandle, Config, ErrorReport, Message};

/// The block-side endpoints of every route, handed to
/// [`BlockRunner::setup`](crate::BlockRunner::setup).
///
/// Ownership moves into the block; the endpoints are released when its
/// event loop returns.
#[derive(Debug)]
pub struct Routes {
    pub(crate) inbound: mpsc::Receiver<Message>,
    pub(crate) rule: mpsc::Receiver<Message>,
    pub(crate) query: mpsc::Receiver<oneshot::Sender<Message>>,
    pub(crate) outbound: broadcast::Sender<Message>,
    pub(crate) errors: broadcast::Sender<Arc<ErrorReport>>,
    pub(crate) quit: CancellationToken,
}

impl Routes {
    /// Create a fresh set of routes and the graph-side handle wired to them.
    ///
    /// Capacities of zero are raised to one.
    pub fn new(config: &Config) -> (Routes, BlockHandle) {
        let channel_size = config.channel_size.max(1);
        let (in_tx, in_rx) = mpsc::channel(channel_size);
        let (rule_tx, rule_rx) = mpsc::channel(channel_size);
        let (query_tx, query_rx) = mpsc::channel(channel_size);
        let (out_tx, _) = broadcast::channel(config.broadcast_capacity.max(1));
        let (err_tx, _) = broadcast::channel(config.error_capacity.max(1));
        let quit = CancellationToken::new();

        let handle = BlockHandle::new(
            in_tx,
            rule_tx,
            query_tx,
            out_tx.clone(),
            err_tx.clone(),
            quit.clone(),
        );
        let routes = Routes {
            inbound: in_rx,
            rule: rule_rx,
            query: query_rx,
            outbound: out_tx,
            errors: err_tx,
            quit,
        };
        (routes, handle)
    }
}
