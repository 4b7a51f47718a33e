//! One shared signal service for every view on the page.
//!
//! Views subscribe once on mount and unsubscribe on unmount; the frame
//! callback dispatches the latest signals to all of them, so the page owns a
//! single pair of window listeners regardless of how many sections animate.

use glam::Vec2;
use smallvec::SmallVec;

use crate::sampler::RawSignals;
use crate::signals::{ScrollState, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u32);

/// Latest known values, handed to each subscriber once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameSignals {
    pub scroll: ScrollState,
    pub viewport: Viewport,
    /// Client coordinates of the last pointer move, if any has happened.
    pub pointer_client: Option<Vec2>,
    /// Which inputs changed in this frame.
    pub scroll_changed: bool,
    pub pointer_changed: bool,
}

impl FrameSignals {
    /// Fold a coalesced batch into the running state.
    pub fn absorb(&mut self, batch: &RawSignals) {
        self.scroll_changed = false;
        self.pointer_changed = false;
        if let Some(raw) = batch.scroll {
            self.viewport = raw.viewport;
            self.scroll = ScrollState::sample(raw.offset, &raw.viewport);
            self.scroll_changed = true;
        }
        if let Some(p) = batch.pointer {
            self.pointer_client = Some(p);
            self.pointer_changed = true;
        }
    }
}

pub type Subscriber = Box<dyn FnMut(&FrameSignals)>;

#[derive(Default)]
pub struct SignalHub {
    subscribers: SmallVec<[(SubscriberId, Subscriber); 8]>,
    next_id: u32,
    latest: FrameSignals,
}

impl SignalHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, subscriber));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        before != self.subscribers.len()
    }

    /// Seed the running state without notifying anyone (initial layout).
    pub fn prime(&mut self, signals: FrameSignals) {
        self.latest = signals;
    }

    /// Absorb a frame batch and notify every subscriber once.
    pub fn dispatch(&mut self, batch: &RawSignals) {
        self.latest.absorb(batch);
        let snapshot = self.latest;
        for (_, sub) in self.subscribers.iter_mut() {
            sub(&snapshot);
        }
    }

    /// Notify subscribers with the current state, e.g. right after mount.
    pub fn replay(&mut self) {
        let snapshot = self.latest;
        for (_, sub) in self.subscribers.iter_mut() {
            sub(&snapshot);
        }
    }

    #[inline]
    pub fn latest(&self) -> &FrameSignals {
        &self.latest
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn clear(&mut self) {
        self.subscribers.clear();
    }
}
