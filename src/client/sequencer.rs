// file: src/client/sequencer.rs
// description: monotonic request tokens for dropping stale search responses

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Hands out increasing tokens; only the newest token's response is accepted.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
    delivered: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestToken {
        RequestToken(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued.load(Ordering::SeqCst)
    }

    /// Returns true at most once per token, and only for the newest one.
    pub fn accept(&self, token: RequestToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.delivered.fetch_max(token.0, Ordering::SeqCst) < token.0
    }
}
