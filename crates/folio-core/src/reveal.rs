//! One-shot viewport-entry reveal.
//!
//! Every tracked element starts `Pending` and moves to `Revealed` the first
//! time enough of it is visible. `Revealed` is terminal: later visibility
//! changes are ignored and the caller is told to stop observing.

use fnv::FnvHashMap;

const RATIO_EPSILON: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Pending,
    Revealed,
}

/// One visibility report, as delivered by an intersection observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEntry {
    pub id: RevealId,
    pub is_intersecting: bool,
    pub visible_ratio: f64,
    /// Largest ratio the target can ever show: `root height / target
    /// height`, capped at 1.
    pub reachable_ratio: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Transitioned just now; apply the visible style and unobserve.
    Revealed,
    /// Still pending; keep observing.
    StillPending,
    /// Already revealed or never registered; nothing to do.
    Ignored,
}

#[derive(Debug)]
pub struct RevealTracker {
    threshold: f64,
    phases: FnvHashMap<RevealId, RevealPhase>,
    next_id: u32,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            phases: FnvHashMap::default(),
            next_id: 0,
        }
    }

    pub fn register(&mut self) -> RevealId {
        let id = RevealId(self.next_id);
        self.next_id += 1;
        self.phases.insert(id, RevealPhase::Pending);
        id
    }

    /// Feed one visibility report through the state machine.
    ///
    /// Browsers round the reported ratio, so an entry within
    /// `RATIO_EPSILON` of the threshold counts as having crossed it. A
    /// target too tall to ever reach the threshold reveals as soon as it
    /// intersects.
    pub fn observe(&mut self, entry: &VisibilityEntry) -> RevealOutcome {
        match self.phases.get(&entry.id) {
            Some(RevealPhase::Pending) => {}
            _ => return RevealOutcome::Ignored,
        }
        let required = if entry.reachable_ratio + RATIO_EPSILON < self.threshold {
            0.0
        } else {
            self.threshold
        };
        let visible =
            entry.is_intersecting && entry.visible_ratio + RATIO_EPSILON >= required;
        if visible {
            self.phases.insert(entry.id, RevealPhase::Revealed);
            RevealOutcome::Revealed
        } else {
            RevealOutcome::StillPending
        }
    }

    /// Force a reveal. Returns `true` only on the pending→revealed edge.
    pub fn reveal(&mut self, id: RevealId) -> bool {
        match self.phases.get_mut(&id) {
            Some(phase @ RevealPhase::Pending) => {
                *phase = RevealPhase::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn phase(&self, id: RevealId) -> Option<RevealPhase> {
        self.phases.get(&id).copied()
    }

    pub fn pending(&self) -> Vec<RevealId> {
        let mut ids: Vec<RevealId> = self
            .phases
            .iter()
            .filter(|(_, p)| **p == RevealPhase::Pending)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    pub fn revealed_count(&self) -> usize {
        self.phases
            .values()
            .filter(|p| **p == RevealPhase::Revealed)
            .count()
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Forget every target and hand back the ones still pending so the
    /// caller can stop observing them.
    pub fn teardown(&mut self) -> Vec<RevealId> {
        let pending = self.pending();
        self.phases.clear();
        pending
    }
}
