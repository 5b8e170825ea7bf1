//! Broadcast event channel.
//!
//! Failure routing and service notifications go through an explicit
//! publish/subscribe channel owned by the application shell, not ambient
//! global dispatch. The channel carries [`CoreEvent`] values; the pipeline
//! broadcasts `NeedLogin`/`HttpError` when a request fails in callback mode
//! with no per-call callback registered.

use crate::http::HttpResponse;
use tokio::sync::broadcast;

/// Events broadcast on the application-wide channel.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreEvent {
    /// The backend demanded authentication. Carries the failing envelope.
    NeedLogin(HttpResponse),
    /// Any other non-success envelope.
    HttpError(HttpResponse),

    AddSuccess { id: u64 },
    UpdateSuccess,
    DeleteSuccess,
    DeleteFail { message: String },
    DisableSuccess,
    EnableSuccess,
    EnableFail { message: String },
}

/// Thin wrapper over a `tokio::sync::broadcast` channel.
///
/// Cloning shares the underlying channel. Emitting with no listeners is
/// not an error; the pipeline checks [`has_listeners`](Self::has_listeners)
/// before choosing the broadcast path.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<CoreEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CoreEvent> {
        self.tx.subscribe()
    }

    pub fn emit(&self, event: CoreEvent) {
        let _ = self.tx.send(event);
    }

    pub fn has_listeners(&self) -> bool {
        self.tx.receiver_count() > 0
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
