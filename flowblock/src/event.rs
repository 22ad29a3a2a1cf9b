use tokio::sync::oneshot;

use crate::{Label, Message};

/// One unit of work taken from a block's routes.
///
/// The event loop waits on every route at once and turns whichever is ready
/// into a `BlockEvent`. When several routes are ready together the pick is
/// random, so no ordering holds across variants. Within one route events
/// arrive in FIFO order.
#[derive(Debug, Label)]
pub enum BlockEvent {
    /// A message from the inbound data route.
    Message(Message),
    /// A rule update from the inbound rule route.
    Rule(Message),
    /// A query for the current rule; the reply goes to the enclosed sender.
    Query(oneshot::Sender<Message>),
    /// Quit signal, or the graph detached the block.
    Quit,
}
