use std::time::Duration;

/// Runtime configuration for a block's routes and its HTTP client.
///
/// Use the builder methods to customize, or [`Default`] for sensible defaults.
///
/// # Examples
///
/// ```rust
/// use flowblock::Config;
/// use std::time::Duration;
///
/// let config = Config::default()
///     .with_channel_size(256)
///     .with_dial_timeout(Duration::from_millis(500));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Capacity of each inbound route (data, rule, query).
    /// Zero is treated as one.
    /// Default: 128
    pub channel_size: usize,

    /// Capacity of the outbound broadcast route. Subscribers lagging further
    /// behind than this lose the oldest messages. Zero is treated as one.
    /// Default: 128
    pub broadcast_capacity: usize,

    /// Capacity of the error route. Zero is treated as one.
    /// Default: 64
    pub error_capacity: usize,

    /// Upper bound on establishing a connection to the target endpoint.
    /// Default: 2 s
    pub dial_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            channel_size: 128,
            broadcast_capacity: 128,
            error_capacity: 64,
            dial_timeout: Duration::from_secs(2),
        }
    }
}

impl Config {
    /// Set the capacity of the inbound routes.
    ///
    /// When a route is full, [`BlockHandle`](crate::BlockHandle) senders wait.
    pub fn with_channel_size(mut self, size: usize) -> Self {
        self.channel_size = size;
        self
    }

    pub fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = capacity;
        self
    }

    pub fn with_error_capacity(mut self, capacity: usize) -> Self {
        self.error_capacity = capacity;
        self
    }

    /// Set the connect timeout used by HTTP blocks.
    ///
    /// Only connection establishment is bounded; a connected request may
    /// still take as long as the server needs to answer.
    pub fn with_dial_timeout(mut self, timeout: Duration) -> Self {
        self.dial_timeout = timeout;
        self
    }
}
