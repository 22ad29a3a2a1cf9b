//! Runs a PutHttp block against a URL given on the command line.
//!
//! ```text
//! cargo run --example put_http -- http://127.0.0.1:8080/items
//! ```

use flowblock::{BlockRunner, Config, Routes, library::PutHttp};
use serde_json::json;

#[tokio::main]
async fn main() -> flowblock::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:8080/items".into());

    let config = Config::default();
    let (routes, handle) = Routes::new(&config);
    let mut runner = BlockRunner::new(PutHttp::new(&config)?);
    runner.setup(routes)?;
    let task = runner.spawn();

    let mut out = handle.subscribe();
    let mut errors = handle.errors();

    handle
        .update_rule(json!({"Url": url, "ContentType": "application/json"}))
        .await?;
    println!("rule: {}", handle.query().await?);

    for i in 0..3 {
        handle.send(json!({"item": i})).await?;
        tokio::select! {
            Ok(response) = out.recv() => println!("response: {response}"),
            Ok(report) = errors.recv() => println!("error: {report}"),
            else => break,
        }
    }

    handle.quit();
    task.await??;
    Ok(())
}
