//! Continuous input signals: scroll position and pointer position.
//!
//! These types avoid any platform API. The web frontend fills them from
//! `window.scrollY`, `innerHeight` and `getBoundingClientRect()`; tests fill
//! them by hand.

use glam::Vec2;

/// Client-space bounding box, as returned by `getBoundingClientRect()`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.width * 0.5) as f32,
            (self.top + self.height * 0.5) as f32,
        )
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Viewport and document extents sampled alongside the scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub document_height: f64,
}

impl Viewport {
    #[inline]
    pub fn scrollable_height(&self) -> f64 {
        self.document_height - self.height
    }
}

/// `offset / scrollable_height`, clamped to [0, 1].
///
/// A scrollable height of zero or less yields 0, as does any NaN input.
#[inline]
pub fn scroll_progress(offset: f64, scrollable_height: f64) -> f64 {
    if !(scrollable_height > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    clamp_unit(offset / scrollable_height)
}

/// Clamp into [0, 1], mapping NaN to 0.
#[inline]
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub progress: f64,
}

impl ScrollState {
    /// Page-level progress: how far through the scrollable document we are.
    pub fn sample(offset: f64, viewport: &Viewport) -> Self {
        Self {
            offset,
            progress: scroll_progress(offset, viewport.scrollable_height()),
        }
    }

    /// Progress measured in viewport heights, saturating after one screen.
    /// The hero uses this so its effects finish as it leaves the screen.
    pub fn viewport_progress(offset: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            progress: scroll_progress(offset, viewport_height),
        }
    }
}

/// Progress of a section travelling through the viewport: 0 when its top
/// meets the viewport bottom, 1 when its bottom meets the viewport top.
pub fn section_progress(section: &Rect, viewport_height: f64) -> f64 {
    let travel = viewport_height + section.height;
    if !(travel > 0.0) {
        return 0.0;
    }
    clamp_unit((viewport_height - section.top) / travel)
}

/// Pointer position relative to a container centre, normalised by the
/// container size so each axis lies in [-0.5, 0.5].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub normalized_x: f32,
    pub normalized_y: f32,
}

impl PointerState {
    pub const CENTER: PointerState = PointerState {
        normalized_x: 0.0,
        normalized_y: 0.0,
    };

    /// Returns `None` when the container is missing or has no area, so the
    /// caller keeps its previous state.
    pub fn from_client(client: Vec2, container: Option<&Rect>) -> Option<Self> {
        let rect = container?;
        if rect.is_degenerate() || !client.is_finite() {
            return None;
        }
        let x = (client.x as f64 - rect.left - rect.width * 0.5) / rect.width;
        let y = (client.y as f64 - rect.top - rect.height * 0.5) / rect.height;
        Some(Self::clamped(x as f32, y as f32))
    }

    /// Build from raw normalised values, clamping overshoot.
    pub fn clamped(x: f32, y: f32) -> Self {
        Self {
            normalized_x: clamp_half(x),
            normalized_y: clamp_half(y),
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.normalized_x, self.normalized_y)
    }
}

#[inline]
fn clamp_half(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-0.5, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_guards_zero_height() {
        assert_eq!(scroll_progress(500.0, 0.0), 0.0);
        assert_eq!(scroll_progress(500.0, -10.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 100.0), 0.0);
        assert_eq!(scroll_progress(500.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-20.0, 1000.0), 0.0);
    }

    #[test]
    fn short_page_has_no_progress() {
        let vp = Viewport {
            width: 800.0,
            height: 1000.0,
            document_height: 1000.0,
        };
        assert_eq!(ScrollState::sample(0.0, &vp).progress, 0.0);
        assert_eq!(ScrollState::sample(250.0, &vp).progress, 0.0);
    }

    #[test]
    fn pointer_at_center_is_zero() {
        let rect = Rect::new(100.0, 50.0, 400.0, 200.0);
        let p = PointerState::from_client(rect.center(), Some(&rect)).unwrap();
        assert_eq!(p, PointerState::CENTER);
    }

    #[test]
    fn pointer_outside_container_is_clamped() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let p = PointerState::from_client(Vec2::new(400.0, -300.0), Some(&rect)).unwrap();
        assert_eq!(p.normalized_x, 0.5);
        assert_eq!(p.normalized_y, -0.5);
    }

    #[test]
    fn pointer_without_container_is_noop() {
        assert!(PointerState::from_client(Vec2::new(1.0, 1.0), None).is_none());
        let empty = Rect::new(0.0, 0.0, 0.0, 100.0);
        assert!(PointerState::from_client(Vec2::new(1.0, 1.0), Some(&empty)).is_none());
    }

    #[test]
    fn section_progress_spans_entry_to_exit() {
        let vh = 800.0;
        let entering = Rect::new(0.0, 800.0, 100.0, 400.0);
        let leaving = Rect::new(0.0, -400.0, 100.0, 400.0);
        let halfway = Rect::new(0.0, 200.0, 100.0, 400.0);
        assert_eq!(section_progress(&entering, vh), 0.0);
        assert_eq!(section_progress(&leaving, vh), 1.0);
        assert_eq!(section_progress(&halfway, vh), 0.5);
        assert_eq!(section_progress(&Rect::default(), 0.0), 0.0);
    }
}
