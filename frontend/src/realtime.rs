use gloo_timers::callback::Timeout;
use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, ErrorEvent, MessageEvent, WebSocket};
use yew::Callback;

use crate::config::{Config, RECONNECT_DELAY_MS, RECONNECT_MAX_ATTEMPTS, REFETCH_DEBOUNCE_MS};

/// Connection state surfaced as a header badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Disconnected,
    Offline,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Connecting",
            ConnectionStatus::Connected => "Live",
            ConnectionStatus::Disconnected => "Reconnecting",
            ConnectionStatus::Offline => "Offline",
        }
    }

    pub fn badge_classes(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "bg-yellow-100 text-yellow-800",
            ConnectionStatus::Connected => "bg-green-100 text-green-800",
            ConnectionStatus::Disconnected => "bg-yellow-100 text-yellow-800",
            ConnectionStatus::Offline => "bg-gray-200 text-gray-600",
        }
    }
}

/// Update event names the backend broadcasts. Payloads are never trusted as
/// data; any of these is purely a "refetch now" signal.
pub fn is_refetch_event(name: &str) -> bool {
    matches!(
        name,
        "leaderboardUpdated" | "scoreUpdated" | "tournamentUpdated" | "update"
    )
}

/// Messages arrive either as `{"event":"...", ...}` envelopes or as bare
/// event-name strings. Anything else is ignored.
pub fn parse_event_name(raw: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) {
        if let Some(event) = value.get("event").and_then(|e| e.as_str()) {
            return Some(event.to_string());
        }
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Room-join payload for the current tournament.
pub fn join_message(tournament_id: &str) -> String {
    serde_json::json!({
        "event": "joinTournament",
        "tournamentId": tournament_id,
    })
    .to_string()
}

/// Bounded reconnection bookkeeping: a fixed number of attempts with fixed
/// spacing, reset on every successful open.
#[derive(Debug)]
pub struct ReconnectPolicy {
    attempts: u32,
    max_attempts: u32,
    delay_ms: u32,
}

impl ReconnectPolicy {
    pub fn new(max_attempts: u32, delay_ms: u32) -> Self {
        Self {
            attempts: 0,
            max_attempts,
            delay_ms,
        }
    }

    /// Returns the delay before the next attempt, or `None` once exhausted.
    pub fn next_attempt(&mut self) -> Option<u32> {
        if self.attempts >= self.max_attempts {
            return None;
        }
        self.attempts += 1;
        Some(self.delay_ms)
    }

    pub fn reset(&mut self) {
        self.attempts = 0;
    }
}

/// Cancellable-timer debounce. Re-arming cancels the pending timer, so a
/// burst of socket events collapses into one refetch.
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let pending = self.pending.clone();
        let timeout = Timeout::new(self.delay_ms, move || {
            pending.borrow_mut().take();
            f();
        });
        // Dropping the previous Timeout cancels it.
        *self.pending.borrow_mut() = Some(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

struct Inner {
    socket: RefCell<Option<WebSocket>>,
    /// Current tournament room. Reconnects read this cell, so a re-join
    /// always targets the latest id, never a stale one.
    room: RefCell<String>,
    policy: RefCell<ReconnectPolicy>,
    debouncer: Debouncer,
    on_refetch: Callback<()>,
    on_status: Callback<ConnectionStatus>,
    shutdown: Cell<bool>,
}

/// Thin real-time client: joins a tournament room and turns update events
/// into debounced refetch signals. It never carries payload data the UI
/// trusts directly.
#[derive(Clone)]
pub struct RealtimeClient {
    inner: Rc<Inner>,
}

impl RealtimeClient {
    pub fn connect(
        tournament_id: &str,
        on_refetch: Callback<()>,
        on_status: Callback<ConnectionStatus>,
    ) -> Self {
        let client = Self {
            inner: Rc::new(Inner {
                socket: RefCell::new(None),
                room: RefCell::new(tournament_id.to_string()),
                policy: RefCell::new(ReconnectPolicy::new(
                    RECONNECT_MAX_ATTEMPTS,
                    RECONNECT_DELAY_MS,
                )),
                debouncer: Debouncer::new(REFETCH_DEBOUNCE_MS),
                on_refetch,
                on_status,
                shutdown: Cell::new(false),
            }),
        };
        Self::open(client.inner.clone());
        client
    }

    /// Switches the joined room. Takes effect immediately when connected and
    /// on every later reconnect.
    pub fn set_room(&self, tournament_id: &str) {
        *self.inner.room.borrow_mut() = tournament_id.to_string();
        if let Some(ws) = self.inner.socket.borrow().as_ref() {
            if ws.ready_state() == WebSocket::OPEN {
                let _ = ws.send_with_str(&join_message(tournament_id));
            }
        }
    }

    /// Stops reconnection and closes the socket. Call on component teardown.
    pub fn shutdown(&self) {
        self.inner.shutdown.set(true);
        self.inner.debouncer.cancel();
        if let Some(ws) = self.inner.socket.borrow_mut().take() {
            let _ = ws.close();
        }
    }

    fn open(inner: Rc<Inner>) {
        if inner.shutdown.get() {
            return;
        }
        inner.on_status.emit(ConnectionStatus::Connecting);

        let ws = match WebSocket::new(&Config::ws_url()) {
            Ok(ws) => ws,
            Err(_) => {
                warn!("Failed to open realtime socket");
                Self::schedule_reconnect(inner);
                return;
            }
        };

        let onopen = {
            let inner = inner.clone();
            let ws = ws.clone();
            Closure::wrap(Box::new(move |_: web_sys::Event| {
                inner.policy.borrow_mut().reset();
                inner.on_status.emit(ConnectionStatus::Connected);
                let room = inner.room.borrow().clone();
                debug!("Realtime socket open, joining room {}", room);
                let _ = ws.send_with_str(&join_message(&room));
            }) as Box<dyn FnMut(_)>)
        };
        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        onopen.forget();

        let onmessage = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move |e: MessageEvent| {
                if let Ok(text) = e.data().dyn_into::<js_sys::JsString>() {
                    let text: String = text.into();
                    if let Some(event) = parse_event_name(&text) {
                        if is_refetch_event(&event) {
                            debug!("Refetch signal: {}", event);
                            let on_refetch = inner.on_refetch.clone();
                            inner.debouncer.schedule(move || on_refetch.emit(()));
                        }
                    }
                }
            }) as Box<dyn FnMut(_)>)
        };
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        onmessage.forget();

        let onerror = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move |_: ErrorEvent| {
                warn!("Realtime socket error");
                inner.on_status.emit(ConnectionStatus::Disconnected);
            }) as Box<dyn FnMut(_)>)
        };
        ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        let onclose = {
            let inner = inner.clone();
            Closure::wrap(Box::new(move |_: CloseEvent| {
                if !inner.shutdown.get() {
                    Self::schedule_reconnect(inner.clone());
                }
            }) as Box<dyn FnMut(_)>)
        };
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
        onclose.forget();

        *inner.socket.borrow_mut() = Some(ws);
    }

    fn schedule_reconnect(inner: Rc<Inner>) {
        let delay = inner.policy.borrow_mut().next_attempt();
        match delay {
            Some(delay_ms) => {
                inner.on_status.emit(ConnectionStatus::Disconnected);
                let inner = inner.clone();
                Timeout::new(delay_ms, move || Self::open(inner)).forget();
            }
            None => {
                // Attempts exhausted: stale data stays visible, badge goes
                // Offline.
                warn!("Realtime reconnection attempts exhausted");
                inner.on_status.emit(ConnectionStatus::Offline);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refetch_event_names() {
        assert!(is_refetch_event("leaderboardUpdated"));
        assert!(is_refetch_event("scoreUpdated"));
        assert!(is_refetch_event("tournamentUpdated"));
        assert!(is_refetch_event("update"));
        assert!(!is_refetch_event("chatMessage"));
    }

    #[test]
    fn test_parse_event_name_from_envelope() {
        let raw = r#"{"event":"scoreUpdated","tournamentId":"t1"}"#;
        assert_eq!(parse_event_name(raw).as_deref(), Some("scoreUpdated"));
    }

    #[test]
    fn test_parse_event_name_from_bare_string() {
        assert_eq!(parse_event_name("update").as_deref(), Some("update"));
        assert_eq!(parse_event_name("   "), None);
    }

    #[test]
    fn test_join_message_shape() {
        let msg = join_message("t-42");
        let value: serde_json::Value = serde_json::from_str(&msg).unwrap();
        assert_eq!(value["event"], "joinTournament");
        assert_eq!(value["tournamentId"], "t-42");
    }

    #[test]
    fn test_rejoin_uses_current_room_not_stale() {
        // The open handler reads the room cell at reconnect time, so a room
        // switched while offline is the one re-joined.
        let room = RefCell::new("old-tournament".to_string());
        *room.borrow_mut() = "new-tournament".to_string();
        let msg = join_message(&room.borrow());
        assert!(msg.contains("new-tournament"));
        assert!(!msg.contains("old-tournament"));
    }

    #[test]
    fn test_reconnect_policy_is_bounded() {
        let mut policy = ReconnectPolicy::new(3, 2_000);
        assert_eq!(policy.next_attempt(), Some(2_000));
        assert_eq!(policy.next_attempt(), Some(2_000));
        assert_eq!(policy.next_attempt(), Some(2_000));
        assert_eq!(policy.next_attempt(), None);
        assert_eq!(policy.next_attempt(), None);
    }

    #[test]
    fn test_reconnect_policy_resets_on_open() {
        let mut policy = ReconnectPolicy::new(2, 500);
        policy.next_attempt();
        policy.next_attempt();
        assert_eq!(policy.next_attempt(), None);
        policy.reset();
        assert_eq!(policy.next_attempt(), Some(500));
    }
}
