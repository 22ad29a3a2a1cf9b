//! Shared helpers: a stub HTTP endpoint and polling utilities.
#![allow(dead_code)]

use std::{
    io::{BufRead, BufReader, Read, Write},
    net::{Shutdown, SocketAddr, TcpListener},
    thread,
    time::Duration,
};

use flowblock::{BlockHandle, BlockRunner, Config, Message, Routes, library::PutHttp};
use tiny_http::{Response, Server};
use tokio::{
    sync::{broadcast, mpsc},
    task::JoinHandle,
    time::{Instant, sleep, timeout},
};

pub const WAIT: Duration = Duration::from_secs(2);

/// What the stub endpoint saw for one request.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// HTTP server on an ephemeral port answering every request with a fixed body.
pub struct StubEndpoint {
    addr: SocketAddr,
    requests: mpsc::UnboundedReceiver<Recorded>,
}

impl StubEndpoint {
    pub fn start(reply: &str) -> Self {
        Self::start_with_delay(reply, Duration::ZERO)
    }

    /// Like `start`, but holds each response back for `delay` after recording the request.
    pub fn start_with_delay(reply: &str, delay: Duration) -> Self {
        Self::serve(reply.as_bytes().to_vec(), delay)
    }

    /// Answer every request with raw bytes, which need not be valid UTF-8.
    pub fn start_with_bytes(reply: &[u8]) -> Self {
        Self::serve(reply.to_vec(), Duration::ZERO)
    }

    fn serve(reply: Vec<u8>, delay: Duration) -> Self {
        let server = Server::http("127.0.0.1:0").expect("Failed to start stub endpoint");
        let addr = server
            .server_addr()
            .to_ip()
            .expect("Stub endpoint is not on an IP socket");
        let (tx, rx) = mpsc::unbounded_channel();

        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let content_type = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Content-Type"))
                    .map(|h| h.value.as_str().to_string());
                let _ = tx.send(Recorded {
                    method: request.method().to_string(),
                    path: request.url().to_string(),
                    content_type,
                    body,
                });
                thread::sleep(delay);
                let _ = request.respond(Response::from_data(reply.clone()));
            }
        });

        Self { addr, requests: rx }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn next_request(&mut self) -> Recorded {
        timeout(WAIT, self.requests.recv())
            .await
            .expect("No request reached the stub endpoint in time")
            .expect("Stub endpoint stopped")
    }

    pub fn try_next_request(&mut self) -> Option<Recorded> {
        self.requests.try_recv().ok()
    }
}

/// Raw TCP endpoint that reads each request, promises a 100-byte body,
/// sends only `partial` and closes the connection.
pub struct TruncatingEndpoint {
    addr: SocketAddr,
}

impl TruncatingEndpoint {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind truncating endpoint");
        let addr = listener.local_addr().expect("Truncating endpoint has no address");

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let Ok(read_half) = stream.try_clone() else { continue };
                let mut reader = BufReader::new(read_half);

                let mut content_length = 0usize;
                let mut line = String::new();
                while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
                    if line == "\r\n" {
                        break;
                    }
                    if let Some((name, value)) = line.split_once(':') {
                        if name.eq_ignore_ascii_case("content-length") {
                            content_length = value.trim().parse().unwrap_or(0);
                        }
                    }
                    line.clear();
                }
                let mut body = vec![0; content_length];
                let _ = reader.read_exact(&mut body);

                let _ = stream
                    .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\npartial");
                let _ = stream.flush();
                let _ = stream.shutdown(Shutdown::Both);
            }
        });

        Self { addr }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Wire and spawn a `PutHttp` block.
pub fn spawn_put_http(config: &Config) -> (BlockHandle, JoinHandle<flowblock::Result<PutHttp>>) {
    init_tracing();
    let (routes, handle) = Routes::new(config);
    let mut runner = BlockRunner::new(PutHttp::new(config).expect("Failed to build PutHttp"));
    runner.setup(routes).expect("Fresh runner must accept routes");
    (handle, runner.spawn())
}

/// Poll the query route until the block reports `expected`.
///
/// Rules and queries travel on different routes, so a query sent right after
/// a rule may still see the old one.
pub async fn wait_for_rule(handle: &BlockHandle, expected: &Message) {
    let start = Instant::now();
    loop {
        let current = handle.query().await.expect("Block stopped answering queries");
        if &current == expected {
            return;
        }
        assert!(
            start.elapsed() < WAIT,
            "Rule never took effect: got {current}, expected {expected}"
        );
        sleep(Duration::from_millis(5)).await;
    }
}

pub async fn recv<T: Clone>(rx: &mut broadcast::Receiver<T>) -> T {
    timeout(WAIT, rx.recv())
        .await
        .expect("Nothing received in time")
        .expect("Route closed")
}
