//! Pure mappings from signals to visual parameters.
//!
//! Nothing here holds state: identical inputs give bit-identical outputs,
//! which keeps the per-frame styles free of jitter and lets views cache by
//! input with [`Memo`].

use glam::Vec3;

use crate::config::{GradientConfig, ParallaxConfig, StageConfig};
use crate::signals::{clamp_unit, PointerState};

/// Pointer-driven layer transform. Translation in px, rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxTransform {
    pub translate: Vec3,
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub perspective: Option<f32>,
}

impl ParallaxTransform {
    /// True when the layer does not move in the plane of the screen.
    pub fn is_planar_identity(&self) -> bool {
        self.translate.x == 0.0
            && self.translate.y == 0.0
            && self.rotate_x == 0.0
            && self.rotate_y == 0.0
    }

    pub fn to_css(&self) -> String {
        let mut css = String::with_capacity(128);
        if let Some(p) = self.perspective {
            css.push_str(&format!("perspective({}px) ", p));
        }
        css.push_str(&format!(
            "translateX({}px) translateY({}px) translateZ({}px)",
            self.translate.x, self.translate.y, self.translate.z
        ));
        if self.rotate_x != 0.0 || self.rotate_y != 0.0 {
            css.push_str(&format!(
                " rotateX({}deg) rotateY({}deg)",
                self.rotate_x, self.rotate_y
            ));
        }
        css
    }
}

/// `translate = pointer * depth * K`, optional tilt scaled the same way.
/// The Z push depends on depth only, so a centred pointer keeps layers
/// flat on screen while their stacking order is preserved.
pub fn parallax_transform(
    pointer: PointerState,
    depth: f32,
    cfg: &ParallaxConfig,
) -> ParallaxTransform {
    let depth = if depth.is_finite() { depth } else { 0.0 };
    let p = PointerState::clamped(pointer.normalized_x, pointer.normalized_y);
    ParallaxTransform {
        translate: Vec3::new(
            p.normalized_x * depth * cfg.k_x,
            p.normalized_y * depth * cfg.k_y,
            depth * cfg.k_z,
        ),
        rotate_x: p.normalized_y * depth * cfg.tilt_k,
        rotate_y: p.normalized_x * depth * cfg.tilt_k,
        perspective: cfg.perspective,
    }
}

/// The hero container's 3D pose: pushed back, tilted and shrunk as the page
/// scrolls, tilted slightly towards the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StageTransform {
    pub perspective: f32,
    pub translate_z: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub scale: f32,
    pub border_radius: f32,
    pub shadow_offset: f32,
    pub shadow_blur: f32,
}

impl StageTransform {
    pub fn transform_css(&self) -> String {
        format!(
            "perspective({}px) translateZ({}px) rotateX({}deg) rotateY({}deg) scale({})",
            self.perspective, self.translate_z, self.rotate_x, self.rotate_y, self.scale
        )
    }

    pub fn shadow_css(&self) -> String {
        format!(
            "0 {}px {}px rgba(0,0,0,0.3)",
            self.shadow_offset, self.shadow_blur
        )
    }
}

pub fn stage_transform(progress: f64, pointer: PointerState, cfg: &StageConfig) -> StageTransform {
    let p = clamp_unit(progress) as f32;
    let ptr = PointerState::clamped(pointer.normalized_x, pointer.normalized_y);
    StageTransform {
        perspective: cfg.perspective,
        translate_z: -p * cfg.push_back,
        rotate_x: p * cfg.scroll_tilt + ptr.normalized_y * cfg.pointer_tilt,
        rotate_y: ptr.normalized_x * cfg.pointer_tilt,
        scale: 1.0 - p * cfg.shrink,
        border_radius: p * cfg.radius,
        shadow_offset: p * cfg.shadow_offset,
        shadow_blur: p * cfg.shadow_blur,
    }
}

/// Per-channel gradient strengths for scroll-linked background layers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GradientParams {
    pub opacity: f32,
    pub glow: f32,
    pub tint: f32,
}

impl GradientParams {
    /// Colour stops for a three-stop overlay, alpha per stop.
    pub fn color_stops(&self) -> [f32; 3] {
        [self.opacity, self.glow, self.tint]
    }
}

/// Each channel is `min(cap, progress * rate)`; the caps are independent.
pub fn scroll_gradient(progress: f64, cfg: &GradientConfig) -> GradientParams {
    let p = clamp_unit(progress) as f32;
    GradientParams {
        opacity: channel(p, cfg.opacity_rate, cfg.opacity_cap),
        glow: channel(p, cfg.glow_rate, cfg.glow_cap),
        tint: channel(p, cfg.tint_rate, cfg.tint_cap),
    }
}

#[inline]
fn channel(p: f32, rate: f32, cap: f32) -> f32 {
    (p * rate).clamp(0.0, cap)
}

/// Keep the first `floor((1 - progress) * len)` characters of `text`.
///
/// Length is counted in chars so the cut never splits a code point.
pub fn truncate_by_progress(text: &str, progress: f64) -> &str {
    let p = clamp_unit(progress);
    let len = text.chars().count();
    let keep = ((1.0 - p) * len as f64).floor().max(0.0) as usize;
    if keep >= len {
        return text;
    }
    match text.char_indices().nth(keep) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Headline text that shortens with progress, reporting only the frames
/// where the visible prefix actually changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Dissolve {
    full: String,
    shown: usize,
}

impl Dissolve {
    pub fn new(full: String) -> Self {
        let shown = full.chars().count();
        Self { full, shown }
    }

    pub fn full(&self) -> &str {
        &self.full
    }

    /// The new visible prefix, or `None` when it matches the last one.
    pub fn advance(&mut self, progress: f64) -> Option<&str> {
        let visible = truncate_by_progress(&self.full, progress);
        let count = visible.chars().count();
        if count == self.shown {
            return None;
        }
        self.shown = count;
        Some(visible)
    }
}

/// Single-slot cache keyed by the last input.
#[derive(Clone, Debug, Default)]
pub struct Memo<I, O> {
    last: Option<(I, O)>,
}

impl<I: PartialEq, O> Memo<I, O> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Returns `(output, changed)`. `compute` runs only when the input
    /// differs from the previous call; otherwise the cached output is
    /// borrowed.
    pub fn get_or_compute(&mut self, input: I, compute: impl FnOnce(&I) -> O) -> (&O, bool) {
        let hit = matches!(&self.last, Some((prev, _)) if *prev == input);
        if hit {
            let (_, out) = self.last.as_ref().unwrap();
            (out, false)
        } else {
            let out = compute(&input);
            let (_, out) = self.last.insert((input, out));
            (&*out, true)
        }
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

impl<I: PartialEq> Memo<I, ()> {
    /// Record `input`; `true` when it differs from the previous one.
    pub fn changed(&mut self, input: I) -> bool {
        self.get_or_compute(input, |_| ()).1
    }
}
