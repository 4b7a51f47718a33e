//! Navigation bar state derived from the scroll offset.

use crate::config::NavConfig;

/// Document-space extent of one `section[id]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[inline]
pub fn is_scrolled(offset: f64, cfg: &NavConfig) -> bool {
    offset > cfg.scrolled_after
}

#[inline]
pub fn scroll_top_visible(offset: f64, cfg: &NavConfig) -> bool {
    offset > cfg.scroll_top_after
}

/// The section whose (lead-adjusted) span contains `offset`. Later sections
/// win when spans overlap. `None` means no section matched and the caller
/// should keep whatever was active before.
pub fn active_section<'a>(
    offset: f64,
    sections: &'a [SectionBounds],
    cfg: &NavConfig,
) -> Option<&'a str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.top - cfg.section_lead;
            offset > top && offset <= top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

/// Highlight state for the nav links, keeping the last match when the
/// offset falls between sections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub active: Option<String>,
    pub show_scroll_top: bool,
}

impl NavState {
    /// Returns `true` when anything visible changed.
    pub fn update(&mut self, offset: f64, sections: &[SectionBounds], cfg: &NavConfig) -> bool {
        let before = self.clone();
        self.scrolled = is_scrolled(offset, cfg);
        self.show_scroll_top = scroll_top_visible(offset, cfg);
        if let Some(id) = active_section(offset, sections, cfg) {
            if self.active.as_deref() != Some(id) {
                self.active = Some(id.to_string());
            }
        }
        *self != before
    }

    /// `href="#about"` is active when the active section is `about`.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (self.active.as_deref(), href.strip_prefix('#')) {
            (Some(active), Some(target)) => active == target,
            _ => false,
        }
    }
}

/// Mobile menu open/closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Following a link always closes the menu.
    pub fn link_followed(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds {
                id: "about".into(),
                top: 1000.0,
                height: 800.0,
            },
            SectionBounds {
                id: "skills".into(),
                top: 1800.0,
                height: 600.0,
            },
        ]
    }

    #[test]
    fn thresholds_are_strict() {
        let cfg = NavConfig::default();
        assert!(!is_scrolled(20.0, &cfg));
        assert!(is_scrolled(20.5, &cfg));
        assert!(!scroll_top_visible(300.0, &cfg));
        assert!(scroll_top_visible(301.0, &cfg));
    }

    #[test]
    fn sections_activate_early() {
        let cfg = NavConfig::default();
        let s = sections();
        assert_eq!(active_section(900.0, &s, &cfg), None);
        assert_eq!(active_section(901.0, &s, &cfg), Some("about"));
        assert_eq!(active_section(1700.0, &s, &cfg), Some("about"));
        assert_eq!(active_section(1701.0, &s, &cfg), Some("skills"));
    }

    #[test]
    fn active_link_is_sticky_between_sections() {
        let cfg = NavConfig::default();
        let s = sections();
        let mut nav = NavState::default();
        assert!(nav.update(1200.0, &s, &cfg));
        assert!(nav.is_link_active("#about"));
        assert!(!nav.update(1201.0, &s, &cfg));
        nav.update(50_000.0, &s, &cfg);
        assert!(nav.is_link_active("#about"));
        assert!(!nav.is_link_active("about"));
    }

    #[test]
    fn menu_closes_on_link() {
        let mut m = MenuState::default();
        assert!(m.toggle());
        m.link_followed();
        assert!(!m.open);
    }
}
