//! Debounced scroll saving.
//!
//! Timestamps are plain milliseconds supplied by the caller, so the same
//! logic runs off `Instant` natively and `performance.now()` in the browser.

pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

#[derive(Debug, Clone)]
pub struct ScrollDebouncer {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl Default for ScrollDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl ScrollDebouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Cancels any pending save and schedules a new one.
    pub fn schedule(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// True once per burst, when the quiet period has elapsed.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Milliseconds until the pending save fires
    pub fn remaining(&self, now_ms: u64) -> Option<u64> {
        self.deadline.map(|d| d.saturating_sub(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_coalesces_into_one_save() {
        let mut debounce = ScrollDebouncer::new(200);
        debounce.schedule(0);
        debounce.schedule(150);
        debounce.schedule(300);
        assert!(!debounce.fire_if_due(450));
        assert_eq!(debounce.remaining(450), Some(50));
        assert!(debounce.fire_if_due(500));
        assert!(!debounce.fire_if_due(900));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn cancel_drops_pending_save() {
        let mut debounce = ScrollDebouncer::default();
        debounce.schedule(10);
        debounce.cancel();
        assert!(!debounce.fire_if_due(10_000));
    }
}
