//! Two-press confirmation for destructive actions.
//!
//! The first press on a key arms it; a second press on the same key within
//! [`CONFIRM_WINDOW`] confirms. Each arming gets a ticket, and the timer that
//! disarms it only does so if that ticket is still the current one, so a
//! stale timer from an earlier press never cancels a fresh arming.

use std::time::Duration;

use dioxus::prelude::*;

/// How long an armed action waits for its second press.
pub const CONFIRM_WINDOW: Duration = Duration::from_secs(3);

/// Outcome of a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    /// First press; pass the ticket to [`ConfirmArm::expire`] when the window closes.
    Armed(u64),
    Confirmed,
}

/// Which key, if any, is waiting for its confirming press.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmArm<K> {
    armed: Option<(K, u64)>,
    next_ticket: u64,
}

impl<K> Default for ConfirmArm<K> {
    fn default() -> Self {
        Self {
            armed: None,
            next_ticket: 0,
        }
    }
}

impl<K: PartialEq> ConfirmArm<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: K) -> Press {
        if matches!(&self.armed, Some((armed, _)) if *armed == key) {
            self.armed = None;
            return Press::Confirmed;
        }
        self.next_ticket += 1;
        self.armed = Some((key, self.next_ticket));
        Press::Armed(self.next_ticket)
    }

    /// Disarm if `ticket` is still the live arming.
    pub fn expire(&mut self, ticket: u64) {
        if matches!(&self.armed, Some((_, live)) if *live == ticket) {
            self.armed = None;
        }
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    pub fn is_armed(&self, key: &K) -> bool {
        matches!(&self.armed, Some((armed, _)) if armed == key)
    }
}

/// Press `key` on a signal-held [`ConfirmArm`].
///
/// Returns `true` when this press confirms. When it only arms, a timer is
/// spawned that disarms after [`CONFIRM_WINDOW`] unless something else
/// happened in between.
pub fn press_to_confirm<K: PartialEq + 'static>(mut arm: Signal<ConfirmArm<K>>, key: K) -> bool {
    match arm.with_mut(|a| a.press(key)) {
        Press::Confirmed => true,
        Press::Armed(ticket) => {
            spawn(async move {
                sleep(CONFIRM_WINDOW).await;
                arm.with_mut(|a| a.expire(ticket));
            });
            false
        }
    }
}

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
