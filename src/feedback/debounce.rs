use crate::foundation::core::Timestamp;

/// Default minimum time a guidance message stays on screen.
pub const DEFAULT_DWELL_MS: u64 = 1000;

/// Outcome of offering a candidate message to the debouncer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FeedbackUpdate {
    /// The candidate is now displayed.
    Shown(String),
    /// The candidate was dropped; the previous message stays.
    Suppressed,
}

impl FeedbackUpdate {
    /// Displayed text if the candidate was accepted.
    pub fn shown(&self) -> Option<&str> {
        match self {
            Self::Shown(msg) => Some(msg),
            Self::Suppressed => None,
        }
    }
}

/// Session-scoped debounce state for the guidance text.
///
/// An accepted message locks the display for the dwell time. Unforced candidates arriving
/// while locked are discarded; forced candidates always win and restart the lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackState {
    dwell_ms: u64,
    displayed: Option<String>,
    lock_expiry: Option<Timestamp>,
}

impl Default for FeedbackState {
    fn default() -> Self {
        Self::new(DEFAULT_DWELL_MS)
    }
}

impl FeedbackState {
    /// Fresh, unlocked state with the given dwell time.
    pub fn new(dwell_ms: u64) -> Self {
        Self {
            dwell_ms,
            displayed: None,
            lock_expiry: None,
        }
    }

    /// Dwell time in milliseconds.
    pub fn dwell_ms(&self) -> u64 {
        self.dwell_ms
    }

    /// Currently displayed message.
    pub fn displayed(&self) -> Option<&str> {
        self.displayed.as_deref()
    }

    /// When the current lock ends, if a message has been shown.
    pub fn lock_expiry(&self) -> Option<Timestamp> {
        self.lock_expiry
    }

    /// Whether an unforced candidate at `now` would be discarded.
    pub fn is_locked(&self, now: Timestamp) -> bool {
        self.lock_expiry.is_some_and(|expiry| now < expiry)
    }

    /// Offer a candidate message at `now`.
    pub fn offer(
        &mut self,
        message: impl Into<String>,
        force: bool,
        now: Timestamp,
    ) -> FeedbackUpdate {
        if !force && self.is_locked(now) {
            return FeedbackUpdate::Suppressed;
        }

        let message = message.into();
        tracing::trace!(%message, force, now = now.as_millis(), "guidance shown");
        self.displayed = Some(message.clone());
        self.lock_expiry = Some(now.add_millis(self.dwell_ms));
        FeedbackUpdate::Shown(message)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feedback/debounce.rs"]
mod tests;
