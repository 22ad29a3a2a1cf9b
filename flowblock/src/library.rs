//! Concrete blocks.
//!
//! - [`PutHttp`]: PUTs each inbound message to a configurable URL and emits
//!   the response body.

mod put_client;
mod put_http;

pub use put_http::{PutHttp, PutHttpRule};
