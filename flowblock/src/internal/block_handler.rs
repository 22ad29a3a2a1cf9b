use std::{ops::ControlFlow, sync::Arc};

use tokio::select;

use crate::{Block, BlockEvent, BlockMeta, Context, Label, Routes};

/// Single-task event loop of one block.
///
/// Waits on all routes at once, takes exactly one ready event per iteration
/// and runs it to completion before looking at the routes again. A message
/// handler that awaits the network therefore holds back rules, queries and
/// quit until it finishes.
pub(crate) struct BlockHandler<B: Block> {
    pub(crate) block: B,
    pub(crate) routes: Routes,
    pub(crate) ctx: Context,
}

impl<B: Block> BlockHandler<B> {
    pub fn new(block: B, meta: Arc<BlockMeta>, routes: Routes) -> Self {
        let ctx = Context::new(meta, routes.outbound.clone(), routes.errors.clone());
        Self { block, routes, ctx }
    }

    /// Run until quit, then release the routes and hand the block back.
    pub async fn run(mut self) -> B {
        tracing::debug!(block = %self.ctx.meta, "block started");
        loop {
            let event = self.next_event().await;
            tracing::trace!(block = %self.ctx.meta, event = %event.label(), "dispatching");
            if self.dispatch(event).await.is_break() {
                break;
            }
        }
        tracing::debug!(block = %self.ctx.meta, "block stopped");
        let BlockHandler { block, routes, .. } = self;
        drop(routes);
        block
    }

    /// Wait for any route to become ready.
    ///
    /// `select!` polls branches in random order, so simultaneous readiness
    /// has no defined winner. A closed inbound route means the graph dropped
    /// every handle, which counts as quit.
    async fn next_event(&mut self) -> BlockEvent {
        let routes = &mut self.routes;
        select! {
            _ = routes.quit.cancelled() => BlockEvent::Quit,
            rule = routes.rule.recv() => rule.map_or(BlockEvent::Quit, BlockEvent::Rule),
            message = routes.inbound.recv() => message.map_or(BlockEvent::Quit, BlockEvent::Message),
            reply = routes.query.recv() => reply.map_or(BlockEvent::Quit, BlockEvent::Query),
        }
    }

    pub(crate) async fn dispatch(&mut self, event: BlockEvent) -> ControlFlow<()> {
        match event {
            BlockEvent::Rule(rule) => {
                if let Err(e) = self.block.handle_rule(rule) {
                    self.ctx.report(e);
                }
            }
            BlockEvent::Quit => return ControlFlow::Break(()),
            BlockEvent::Message(message) => {
                if let Err(e) = self.block.handle_message(message, &self.ctx).await {
                    self.ctx.report(e);
                }
            }
            BlockEvent::Query(reply) => {
                if reply.send(self.block.query_rule()).is_err() {
                    tracing::trace!(block = %self.ctx.meta, "query requester went away");
                }
            }
        }
        ControlFlow::Continue(())
    }
}
