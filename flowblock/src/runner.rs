use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{Block, BlockMeta, Error, Result, Routes, internal::BlockHandler};

/// Owns one block between creation and termination.
///
/// - `new(block)` wraps a block produced by some factory.
/// - `setup(routes)` binds identity metadata and the routes; allowed once.
/// - `run()` drives the event loop until quit and returns the block.
/// - `spawn()` does the same on a Tokio task.
///
/// See also: [`Block`], [`Routes`].
pub struct BlockRunner<B: Block> {
    block: B,
    meta: Option<Arc<BlockMeta>>,
    routes: Option<Routes>,
}

impl<B: Block> BlockRunner<B> {
    pub fn new(block: B) -> Self {
        Self {
            block,
            meta: None,
            routes: None,
        }
    }

    /// Bind the block's identity and take ownership of its routes.
    ///
    /// Returns [`Error::AlreadySetUp`] on a second call; the routes passed
    /// in that call are dropped.
    pub fn setup(&mut self, routes: Routes) -> Result<()> {
        if self.meta.is_some() {
            return Err(Error::AlreadySetUp);
        }
        let meta = BlockMeta::new(self.block.kind(), self.block.description());
        tracing::debug!(block = %meta, description = meta.description(), "block set up");
        self.meta = Some(Arc::new(meta));
        self.routes = Some(routes);
        Ok(())
    }

    /// Identity metadata, available once set up.
    pub fn meta(&self) -> Option<&BlockMeta> {
        self.meta.as_deref()
    }

    pub fn block(&self) -> &B {
        &self.block
    }

    /// Run the event loop until quit. Blocks (asynchronously) until then.
    ///
    /// Faults while handling events are reported, not returned; the only
    /// error here is [`Error::NotSetUp`].
    pub async fn run(self) -> Result<B> {
        let (Some(meta), Some(routes)) = (self.meta, self.routes) else {
            return Err(Error::NotSetUp);
        };
        Ok(BlockHandler::new(self.block, meta, routes).run().await)
    }

    /// Run the event loop on a new Tokio task.
    pub fn spawn(self) -> JoinHandle<Result<B>> {
        tokio::spawn(self.run())
    }
}
