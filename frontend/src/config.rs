/// Client-side configuration. All values are compile-time constants: the
/// backend is reached through relative URLs so the dev proxy (Trunk) and the
/// production reverse proxy both front it without rebuild.
pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Relative URLs work for both development (Trunk proxy) and
        // production (nginx proxy).
        "".to_string()
    }

    /// WebSocket endpoint, derived from the page's own origin so the same
    /// proxy fronts it.
    pub fn ws_url() -> String {
        let location = web_sys::window()
            .map(|w| w.location())
            .and_then(|loc| {
                let protocol = loc.protocol().ok()?;
                let host = loc.host().ok()?;
                Some((protocol, host))
            });

        match location {
            Some((protocol, host)) => {
                let scheme = if protocol == "https:" { "wss" } else { "ws" };
                format!("{}://{}/ws", scheme, host)
            }
            None => "ws://localhost/ws".to_string(),
        }
    }
}

/// Abort guard for the dashboard's aggregate fetch.
pub const AGGREGATE_FETCH_TIMEOUT_MS: u32 = 10_000;

/// Debounce window for socket-triggered refetches.
pub const REFETCH_DEBOUNCE_MS: u32 = 300;

/// Socket reconnection policy: bounded attempts, fixed spacing.
pub const RECONNECT_MAX_ATTEMPTS: u32 = 5;
pub const RECONNECT_DELAY_MS: u32 = 2_000;
