use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use tracing::debug;

use super::types::{SlotSnapshot, SlotState};

/// Latest-wins holder for one operation's result.
///
/// Every request takes a token from [`ResultSlot::issue`]; a completion is
/// applied only while its token is still the newest one issued.
pub struct ResultSlot {
    name: &'static str,
    inner: Mutex<SlotSnapshot>,
}

impl ResultSlot {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Mutex::new(SlotSnapshot {
                state: SlotState::Idle,
                token: 0,
                updated_at: None,
            }),
        }
    }

    pub fn issue(&self) -> u64 {
        let mut slot = self.lock();
        slot.token += 1;
        slot.state = SlotState::InFlight;
        slot.updated_at = Some(Utc::now());
        slot.token
    }

    pub fn complete(&self, token: u64, state: SlotState) -> bool {
        let mut slot = self.lock();
        if token != slot.token {
            debug!(slot = self.name, token, latest = slot.token, "discarding stale result");
            return false;
        }
        slot.state = state;
        slot.updated_at = Some(Utc::now());
        true
    }

    pub fn snapshot(&self) -> SlotSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, SlotSnapshot> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let slot = ResultSlot::new("ideas");
        let snap = slot.snapshot();
        assert_eq!(snap.state, SlotState::Idle);
        assert_eq!(snap.token, 0);
        assert!(snap.items().is_empty());
    }

    #[test]
    fn issue_marks_in_flight() {
        let slot = ResultSlot::new("ideas");
        let token = slot.issue();
        assert_eq!(token, 1);
        assert_eq!(slot.snapshot().state, SlotState::InFlight);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let slot = ResultSlot::new("ideas");
        let first = slot.issue();
        let second = slot.issue();

        assert!(slot.complete(second, SlotState::Succeeded(vec!["new".to_string()])));
        assert!(!slot.complete(first, SlotState::Succeeded(vec!["old".to_string()])));

        let snap = slot.snapshot();
        assert_eq!(snap.token, second);
        assert_eq!(snap.items(), vec!["new"]);
    }

    #[test]
    fn failure_renders_placeholder_item() {
        let slot = ResultSlot::new("solution");
        let token = slot.issue();
        slot.complete(token, SlotState::Failed("oops".to_string()));
        assert_eq!(slot.snapshot().items(), vec!["oops"]);
    }

    #[test]
    fn snapshot_serializes_with_state_tag() {
        let slot = ResultSlot::new("ideas");
        let token = slot.issue();
        slot.complete(token, SlotState::Succeeded(vec!["a".to_string()]));
        let value = serde_json::to_value(slot.snapshot()).unwrap();
        assert_eq!(value["state"], "succeeded");
        assert_eq!(value["result"], serde_json::json!(["a"]));
        assert_eq!(value["token"], 1);
    }
}
