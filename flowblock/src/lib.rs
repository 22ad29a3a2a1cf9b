//! Flowblock - single-threaded dataflow blocks for Tokio
//!
//! A block is one processing unit inside a larger dataflow graph. It consumes
//! messages, holds a runtime-mutable rule, and broadcasts derived messages
//! downstream. Each block runs in a single task and processes exactly one
//! event at a time, so its state needs no locking.
//!
//! Wiring a block:
//!
//! ```rust,no_run
//! use flowblock::{BlockRunner, Config, Routes, library::PutHttp};
//! use serde_json::json;
//!
//! # async fn demo() -> flowblock::Result<()> {
//! let config = Config::default();
//! let (routes, handle) = Routes::new(&config);
//!
//! let mut runner = BlockRunner::new(PutHttp::new(&config)?);
//! runner.setup(routes)?;
//! let task = runner.spawn();
//!
//! handle
//!     .update_rule(json!({"Url": "http://localhost:8080/x", "ContentType": "application/json"}))
//!     .await?;
//! handle.send(json!({"a": 1})).await?;
//!
//! handle.quit();
//! task.await??;
//! # Ok(())
//! # }
//! ```
//!
//! See `examples/put_http.rs`.

extern crate self as flowblock;

mod block;
mod block_handle;
mod config;
mod context;
mod error;
mod event;
mod label;
mod meta;
mod report;
mod routes;
mod runner;

mod internal;

pub mod library;

pub use block::Block;
pub use block_handle::BlockHandle;
pub use config::Config;
pub use context::Context;
pub use error::Error;
pub use event::BlockEvent;
pub use label::Label;
pub use meta::BlockMeta;
pub use report::ErrorReport;
pub use routes::Routes;
pub use runner::BlockRunner;

pub use flowblock_macros::Label;

pub type Result<T = ()> = std::result::Result<T, Error>;
pub type BlockId = u128;

/// Opaque structured value flowing between blocks.
///
/// Its canonical wire encoding is JSON.
pub type Message = serde_json::Value;
