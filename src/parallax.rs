use crate::constants::*;
use crate::dom;
use folio_core::{
    parallax_transform, scroll_gradient, section_progress, stage_transform, Dissolve, FrameSignals,
    GradientConfig, GradientParams, Memo, MotionConfig, ParallaxConfig, PointerState, ScrollState,
    StageConfig,
};
use web_sys as web;

struct Layer {
    el: web::Element,
    depth: f32,
}

/// A `[data-parallax-section]` container and its `[data-parallax-depth]`
/// children. Layers move with the pointer relative to the container centre.
pub struct ParallaxSection {
    container: web::Element,
    layers: Vec<Layer>,
    cfg: ParallaxConfig,
    pointer: PointerState,
    memo: Memo<PointerState, Vec<String>>,
}

impl ParallaxSection {
    pub fn new(container: web::Element, cfg: ParallaxConfig) -> Self {
        let layers = dom::query_all_in(&container, PARALLAX_DEPTH_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let raw = el.get_attribute(PARALLAX_DEPTH_ATTR)?;
                match raw.trim().parse::<f32>() {
                    Ok(depth) if depth.is_finite() => Some(Layer { el, depth }),
                    _ => {
                        log::warn!("[parallax] ignoring depth {:?}", raw);
                        None
                    }
                }
            })
            .collect();
        Self {
            container,
            layers,
            cfg,
            pointer: PointerState::CENTER,
            memo: Memo::new(),
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Re-derive the pointer relative to this container. Keeps the previous
    /// value when there is no pointer yet or the container is detached.
    fn sample_pointer(&mut self, s: &FrameSignals) {
        let Some(client) = s.pointer_client else {
            return;
        };
        let rect = dom::connected_rect(&self.container);
        if let Some(p) = PointerState::from_client(client, rect.as_ref()) {
            self.pointer = p;
        }
    }

    pub fn update(&mut self, s: &FrameSignals) {
        if !(s.pointer_changed || s.scroll_changed) {
            return;
        }
        self.sample_pointer(s);
        let layers = &self.layers;
        let cfg = &self.cfg;
        let (css, changed) = self.memo.get_or_compute(self.pointer, |p| {
            layers
                .iter()
                .map(|l| parallax_transform(*p, l.depth, cfg).to_css())
                .collect()
        });
        if changed {
            for (layer, t) in self.layers.iter().zip(css.iter()) {
                dom::set_style(&layer.el, "transform", t);
            }
        }
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }
}

struct DissolveText {
    node: web::Node,
    text: Dissolve,
}

/// First non-blank text child of `el`. Only that node is rewritten, so
/// sibling markup such as an underline span survives.
fn leading_text(el: &web::Element) -> Option<web::Node> {
    let children = el.child_nodes();
    (0..children.length())
        .filter_map(|i| children.get(i))
        .find(|n| {
            n.node_type() == web::Node::TEXT_NODE
                && n.node_value().is_some_and(|v| !v.trim().is_empty())
        })
}

/// The hero: a tilting 3D stage, pointer parallax inside it and headline
/// text that dissolves over the first screen of scrolling.
pub struct HeroView {
    stage: web::Element,
    stage_cfg: StageConfig,
    stage_memo: Memo<(f64, PointerState), ()>,
    parallax: ParallaxSection,
    texts: Vec<DissolveText>,
}

impl HeroView {
    pub fn new(container: web::Element, cfg: &MotionConfig) -> Self {
        let texts = dom::query_all_in(&container, DISSOLVE_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let Some(node) = leading_text(&el) else {
                    log::warn!("[hero] dissolve target without text");
                    return None;
                };
                let text = Dissolve::new(node.node_value().unwrap_or_default());
                Some(DissolveText { node, text })
            })
            .collect::<Vec<_>>();
        let hero_cfg = section_config(&container, cfg.parallax);
        let parallax = ParallaxSection::new(container.clone(), hero_cfg);
        log::info!(
            "[hero] layers={} dissolving texts={}",
            parallax.layer_count(),
            texts.len()
        );
        Self {
            stage: container,
            stage_cfg: cfg.stage,
            stage_memo: Memo::new(),
            parallax,
            texts,
        }
    }

    pub fn update(&mut self, s: &FrameSignals) {
        self.parallax.update(s);
        let scroll = ScrollState::viewport_progress(s.scroll.offset, s.viewport.height);
        let pointer = self.parallax.pointer();

        if self.stage_memo.changed((scroll.progress, pointer)) {
            let t = stage_transform(scroll.progress, pointer, &self.stage_cfg);
            dom::set_style(&self.stage, "transform", &t.transform_css());
            dom::set_style(&self.stage, "border-radius", &format!("{}px", t.border_radius));
            dom::set_style(&self.stage, "box-shadow", &t.shadow_css());
        }

        for text in &mut self.texts {
            if let Some(visible) = text.text.advance(scroll.progress) {
                text.node.set_node_value(Some(visible));
            }
        }
    }
}

/// `[data-scroll-gradient]` overlays, saturating channel by channel as their
/// section travels through the viewport.
pub struct GradientLayer {
    el: web::Element,
    section: web::Element,
    cfg: GradientConfig,
    memo: Memo<GradientParams, ()>,
}

impl GradientLayer {
    pub fn new(el: web::Element, cfg: GradientConfig) -> Self {
        let section = el
            .closest("section")
            .ok()
            .flatten()
            .unwrap_or_else(|| el.clone());
        Self {
            el,
            section,
            cfg,
            memo: Memo::new(),
        }
    }

    pub fn update(&mut self, s: &FrameSignals) {
        if !s.scroll_changed {
            return;
        }
        let Some(rect) = dom::connected_rect(&self.section) else {
            return;
        };
        let g = scroll_gradient(section_progress(&rect, s.viewport.height), &self.cfg);
        if self.memo.changed(g) {
            dom::set_style(&self.el, GRADIENT_OPACITY_VAR, &g.opacity.to_string());
            dom::set_style(&self.el, GRADIENT_GLOW_VAR, &g.glow.to_string());
            dom::set_style(&self.el, GRADIENT_TINT_VAR, &g.tint.to_string());
            dom::set_style(&self.el, "opacity", &g.opacity.to_string());
        }
    }
}

/// Section-level `data-parallax-k` / `data-parallax-tilt` on top of `base`.
pub fn section_config(el: &web::Element, base: ParallaxConfig) -> ParallaxConfig {
    let mut cfg = MotionConfig {
        parallax: base,
        ..MotionConfig::default()
    };
    for key in ["parallax-k", "parallax-tilt"] {
        if let Some(v) = dom::data_attr(el, key) {
            if let Err(e) = cfg.apply_override(key, &v) {
                log::warn!("[config] section override rejected: {}", e);
            }
        }
    }
    cfg.parallax
}

pub enum MotionView {
    Hero(HeroView),
    Section(ParallaxSection),
    Gradient(GradientLayer),
}

impl MotionView {
    pub fn update(&mut self, s: &FrameSignals) {
        match self {
            MotionView::Hero(v) => v.update(s),
            MotionView::Section(v) => v.update(s),
            MotionView::Gradient(v) => v.update(s),
        }
    }
}

/// Discover every animated region on the page.
pub fn discover(document: &web::Document, cfg: &MotionConfig) -> Vec<MotionView> {
    let mut views = Vec::new();
    for el in dom::query_all(document, PARALLAX_SECTION_SELECTOR) {
        let profile = el.get_attribute(PARALLAX_SECTION_ATTR).unwrap_or_default();
        if profile == HERO_PROFILE {
            views.push(MotionView::Hero(HeroView::new(el, cfg)));
        } else {
            let section_cfg = section_config(&el, cfg.section_parallax);
            views.push(MotionView::Section(ParallaxSection::new(el, section_cfg)));
        }
    }
    for el in dom::query_all(document, SCROLL_GRADIENT_SELECTOR) {
        views.push(MotionView::Gradient(GradientLayer::new(el, cfg.gradient)));
    }
    log::info!("[parallax] {} animated regions", views.len());
    views
}
