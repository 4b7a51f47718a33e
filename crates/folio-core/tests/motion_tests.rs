// Host-side integration tests for scroll/pointer motion coordination.

use folio_core::*;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct FakeRaf {
    next: FrameHandle,
    requested: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
}

impl FrameScheduler for FakeRaf {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next += 1;
        self.requested.push(self.next);
        Some(self.next)
    }
    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}

fn viewport(doc: f64) -> Viewport {
    Viewport {
        width: 1280.0,
        height: 1000.0,
        document_height: doc,
    }
}

#[test]
fn progress_is_clamped_and_monotonic() {
    for &scrollable in &[1.0, 37.5, 1000.0, 12_345.0] {
        let mut prev = 0.0;
        for step in 0..=200 {
            let offset = step as f64 * scrollable / 100.0;
            let p = scroll_progress(offset, scrollable);
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= prev, "progress decreased at offset {offset}");
            let expected = (offset / scrollable).clamp(0.0, 1.0);
            assert_eq!(p, expected);
            prev = p;
        }
    }
}

#[test]
fn gradient_channels_are_clamped_and_monotonic() {
    let cfg = GradientConfig::default();
    let caps = [cfg.opacity_cap, cfg.glow_cap, cfg.tint_cap];
    let mut prev = [0.0_f32; 3];
    let mut saturated_at: [Option<f64>; 3] = [None; 3];
    for step in 0..=1200 {
        let p = -0.1 + step as f64 * 0.001;
        let g = scroll_gradient(p, &cfg).color_stops();
        for ch in 0..3 {
            assert!(g[ch] >= prev[ch], "channel {ch} decreased at p={p}");
            assert!((0.0..=caps[ch]).contains(&g[ch]), "channel {ch} out of range at p={p}");
            if g[ch] == caps[ch] && saturated_at[ch].is_none() {
                saturated_at[ch] = Some(p);
            }
        }
        prev = g;
    }
    let expected = [
        cfg.opacity_cap / cfg.opacity_rate,
        cfg.glow_cap / cfg.glow_rate,
        cfg.tint_cap / cfg.tint_rate,
    ];
    for ch in 0..3 {
        let at = saturated_at[ch].expect("channel saturates");
        assert!(
            (at - expected[ch] as f64).abs() < 0.002,
            "channel {ch} saturated at {at}, expected {}",
            expected[ch]
        );
    }
    // glow saturates later than opacity and tint
    assert!(saturated_at[1] > saturated_at[0]);
    assert!(saturated_at[1] > saturated_at[2]);

    let lower_caps = GradientConfig {
        opacity_cap: 0.6,
        glow_cap: 0.4,
        tint_cap: 0.2,
        ..cfg
    };
    assert_ne!(scroll_gradient(1.0, &cfg), scroll_gradient(1.0, &lower_caps));
    assert_eq!(scroll_gradient(0.1, &cfg), scroll_gradient(0.1, &lower_caps));
}

#[test]
fn zero_scrollable_height_never_produces_nan() {
    for offset in [0.0, 1.0, 500.0, 1e9] {
        let p = scroll_progress(offset, 0.0);
        assert_eq!(p, 0.0);
        assert!(!p.is_nan());
    }
}

#[test]
fn parallax_is_referentially_transparent() {
    let cfg = ParallaxConfig::section();
    let pointer = PointerState::clamped(0.31, -0.17);
    let a = parallax_transform(pointer, 0.6, &cfg);
    let b = parallax_transform(pointer, 0.6, &cfg);
    assert_eq!(a.translate.x.to_bits(), b.translate.x.to_bits());
    assert_eq!(a.translate.y.to_bits(), b.translate.y.to_bits());
    assert_eq!(a.translate.z.to_bits(), b.translate.z.to_bits());
    assert_eq!(a.rotate_x.to_bits(), b.rotate_x.to_bits());
    assert_eq!(a.rotate_y.to_bits(), b.rotate_y.to_bits());
    assert_eq!(a.to_css(), b.to_css());
}

#[test]
fn parallax_is_bounded_by_depth_and_k() {
    let cfg = ParallaxConfig::hero();
    for depth in [0.2_f32, 0.5, 0.8] {
        for (x, y) in [(-0.5, -0.5), (0.5, 0.5), (0.5, -0.5), (0.1, 0.4)] {
            let t = parallax_transform(PointerState::clamped(x, y), depth, &cfg);
            assert!(t.translate.x.abs() <= 0.5 * depth * cfg.k_x);
            assert!(t.translate.y.abs() <= 0.5 * depth * cfg.k_y);
        }
    }
}

#[test]
fn truncation_is_non_increasing_and_idempotent() {
    let text = "Building beautiful, functional, and scalable web applications with modern technologies.";
    let mut prev = text.len();
    for step in 0..=100 {
        let p = step as f64 / 100.0;
        let out = truncate_by_progress(text, p);
        assert!(text.starts_with(out));
        assert!(out.len() <= prev);
        assert_eq!(out, truncate_by_progress(text, p));
        prev = out.len();
    }
    assert_eq!(truncate_by_progress(text, 0.0), text);
    assert_eq!(truncate_by_progress(text, 1.0), "");
}

#[test]
fn reveal_never_flickers_back() {
    let mut tracker = RevealTracker::new(REVEAL_THRESHOLD);
    let ids: Vec<RevealId> = (0..4).map(|_| tracker.register()).collect();
    let visibility = [0.0, 0.2, 0.0, 1.0, 0.05, 0.0, 0.5];
    for ratio in visibility {
        for id in &ids {
            tracker.observe(&VisibilityEntry {
                id: *id,
                is_intersecting: ratio > 0.0,
                visible_ratio: ratio,
                reachable_ratio: 1.0,
            });
        }
        if ratio >= 0.2 {
            for id in &ids {
                assert_eq!(tracker.phase(*id), Some(RevealPhase::Revealed));
            }
        }
    }
    assert_eq!(tracker.revealed_count(), 4);
    assert!(tracker.pending().is_empty());
}

#[test]
fn pointer_events_in_one_frame_update_once_with_last_coordinates() {
    let mut sampler = FrameSampler::new(FakeRaf::default());
    let mut hub = SignalHub::new();
    let updates = Rc::new(RefCell::new(Vec::new()));
    let container = Rect::new(0.0, 0.0, 200.0, 100.0);
    {
        let updates = updates.clone();
        hub.subscribe(Box::new(move |s: &FrameSignals| {
            if let Some(client) = s.pointer_client {
                if let Some(p) = PointerState::from_client(client, Some(&container)) {
                    updates.borrow_mut().push(p);
                }
            }
        }));
    }

    for i in 0..25 {
        sampler.record_pointer(Vec2::new(i as f32 * 4.0, 75.0));
    }
    assert_eq!(sampler.scheduler().requested.len(), 1);

    if let Some(batch) = sampler.on_frame() {
        hub.dispatch(&batch);
    }
    let updates = updates.borrow();
    assert_eq!(updates.len(), 1);
    // last event: x = 96 -> (96 - 100) / 200, y = 75 -> (75 - 50) / 100
    assert_eq!(updates[0], PointerState::clamped(-0.02, 0.25));
}

#[test]
fn no_updates_after_unmount() {
    let mut sampler = FrameSampler::new(FakeRaf::default());
    let mut hub = SignalHub::new();
    let hits = Rc::new(RefCell::new(0));
    let h = hits.clone();
    let id = hub.subscribe(Box::new(move |_: &FrameSignals| *h.borrow_mut() += 1));

    sampler.record_scroll(100.0, viewport(3000.0));
    sampler.unmount();
    hub.unsubscribe(id);
    assert_eq!(sampler.scheduler().cancelled, vec![1]);

    // A frame that was already queued by the platform still fires once.
    assert!(sampler.on_frame().is_none());
    sampler.record_scroll(200.0, viewport(3000.0));
    sampler.record_pointer(Vec2::new(1.0, 1.0));
    assert!(sampler.on_frame().is_none());
    assert_eq!(*hits.borrow(), 0);
}

#[test]
fn hero_scenario_half_scrolled() {
    // 2000px document, 1000px viewport: 1000px scrollable.
    let mut sampler = FrameSampler::new(FakeRaf::default());
    let mut hub = SignalHub::new();
    sampler.record_scroll(500.0, viewport(2000.0));
    let batch = sampler.on_frame().expect("frame batch");
    hub.dispatch(&batch);

    let progress = hub.latest().scroll.progress;
    assert_eq!(progress, 0.5);
    // floor(0.5 * 20) = 10 characters survive.
    assert_eq!(truncate_by_progress("Full Stack Developer", progress), "Full Stack");
    assert_eq!(truncate_by_progress("John Doe", progress), "John");
}

#[test]
fn short_page_scenario_has_zero_progress() {
    let mut sampler = FrameSampler::new(FakeRaf::default());
    let mut hub = SignalHub::new();
    sampler.record_scroll(0.0, viewport(1000.0));
    hub.dispatch(&sampler.on_frame().expect("frame batch"));
    assert_eq!(hub.latest().scroll.progress, 0.0);
    assert_eq!(
        truncate_by_progress("Full Stack Developer", hub.latest().scroll.progress),
        "Full Stack Developer"
    );
}

#[test]
fn pointer_at_container_center_gives_identity_for_any_depth() {
    let container = Rect::new(120.0, 80.0, 1280.0, 720.0);
    let pointer = PointerState::from_client(container.center(), Some(&container)).unwrap();
    assert_eq!(pointer.normalized_x, 0.0);
    assert_eq!(pointer.normalized_y, 0.0);
    for depth in [0.0, 0.2, 0.3, 0.4, 0.5, 0.6, 0.8, 10.0] {
        for cfg in [ParallaxConfig::hero(), ParallaxConfig::section()] {
            assert!(parallax_transform(pointer, depth, &cfg).is_planar_identity());
        }
    }
    let stage = stage_transform(0.0, pointer, &StageConfig::default());
    assert_eq!(stage.rotate_x, 0.0);
    assert_eq!(stage.rotate_y, 0.0);
}
