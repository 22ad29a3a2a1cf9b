use core::marker::Send;
use std::future::Future;

use crate::{Context, Message, Result};

/// Core trait implemented by every block.
///
/// A block owns its rule and whatever long-lived resources it needs. The
/// runtime drives it from a single task through [`BlockRunner`](crate::BlockRunner),
/// calling exactly one handler at a time, so plain `&mut self` access is
/// all the synchronization a block needs.
///
/// Errors returned by [`handle_message`](Block::handle_message) and
/// [`handle_rule`](Block::handle_rule) are reported on the error route and the
/// event is abandoned. They never stop the block; only quit does.
///
/// Ergonomics:
/// - `handle_message` returns a future, but you can implement it as an
///   `async fn` with a simple `Result<()>` return.
/// - No `#[async_trait]` is required.
pub trait Block: Send + 'static {
    /// Block type name, exposed to the graph for discovery.
    fn kind(&self) -> &'static str;

    /// One-line summary of what the block does.
    fn description(&self) -> &'static str;

    /// Handle one message from the inbound data route.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// async fn handle_message(&mut self, message: Message, ctx: &Context) -> Result<()>;
    /// ```
    ///
    /// Use [`Context::emit`] to send derived messages downstream. Emit only
    /// once the message has been fully processed; on error, emit nothing.
    fn handle_message(
        &mut self,
        message: Message,
        ctx: &Context,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Validate and apply a rule update.
    ///
    /// Must leave the current rule untouched when returning an error.
    fn handle_rule(&mut self, rule: Message) -> Result<()>;

    /// Snapshot of the rule currently in force.
    fn query_rule(&self) -> Message;
}
