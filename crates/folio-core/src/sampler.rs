//! Frame-coalescing sampler for scroll and pointer input.
//!
//! Raw events are recorded immediately; derived work runs once per frame
//! with the newest sample. At most one frame request is in flight at any
//! time, and after [`FrameSampler::unmount`] nothing is recorded or
//! delivered.

use glam::Vec2;

use crate::signals::Viewport;

/// Opaque id of a requested frame, as handed out by the platform.
pub type FrameHandle = i32;

/// Source of frame callbacks. The browser implementation wraps
/// `requestAnimationFrame`; tests use a recording fake.
pub trait FrameScheduler {
    /// Ask for one callback before the next paint. `None` means the
    /// platform refused and no callback will arrive.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A raw scroll sample, before any derivation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawScroll {
    pub offset: f64,
    pub viewport: Viewport,
}

/// What a frame delivers: the newest value of each signal that changed
/// since the previous frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawSignals {
    pub scroll: Option<RawScroll>,
    pub pointer: Option<Vec2>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SamplerStats {
    pub events: u64,
    pub frames: u64,
    pub coalesced: u64,
}

pub struct FrameSampler<S: FrameScheduler> {
    scheduler: S,
    pending: RawSignals,
    in_flight: Option<FrameHandle>,
    mounted: bool,
    stats: SamplerStats,
}

impl<S: FrameScheduler> FrameSampler<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: RawSignals::default(),
            in_flight: None,
            mounted: true,
            stats: SamplerStats::default(),
        }
    }

    pub fn record_scroll(&mut self, offset: f64, viewport: Viewport) {
        if !self.mounted {
            return;
        }
        self.pending.scroll = Some(RawScroll { offset, viewport });
        self.after_record();
    }

    pub fn record_pointer(&mut self, client: Vec2) {
        if !self.mounted {
            return;
        }
        self.pending.pointer = Some(client);
        self.after_record();
    }

    fn after_record(&mut self) {
        self.stats.events += 1;
        if self.in_flight.is_some() {
            self.stats.coalesced += 1;
            return;
        }
        self.in_flight = self.scheduler.request_frame();
        if self.in_flight.is_none() {
            log::warn!("[signals] frame request refused; sample held until next event");
        }
    }

    /// Frame callback body. Returns the coalesced batch, or `None` when
    /// there is nothing to deliver (or the sampler is unmounted).
    pub fn on_frame(&mut self) -> Option<RawSignals> {
        self.in_flight = None;
        if !self.mounted {
            return None;
        }
        let batch = std::mem::take(&mut self.pending);
        if batch.scroll.is_none() && batch.pointer.is_none() {
            return None;
        }
        self.stats.frames += 1;
        Some(batch)
    }

    /// Cancel the in-flight frame and stop accepting input. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.pending = RawSignals::default();
        self.mounted = false;
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    pub fn frame_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    #[inline]
    pub fn stats(&self) -> SamplerStats {
        self.stats
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
