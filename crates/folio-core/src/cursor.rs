//! Custom cursor: follows the pointer, inverts against the background and
//! grows over interactive elements.

use glam::Vec2;

use crate::constants::CURSOR_BRIGHTNESS_SPLIT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorColor {
    Black,
    White,
}

impl CursorColor {
    pub fn css(&self) -> &'static str {
        match self {
            CursorColor::Black => "#000000",
            CursorColor::White => "#ffffff",
        }
    }

    /// Soft glow: the colour at 25% alpha.
    pub fn glow_css(&self) -> String {
        format!("0 0 10px {}40", self.css())
    }
}

/// First three integers of a CSS colour such as `rgb(12, 34, 56)` or
/// `rgba(0, 0, 0, 0)`.
pub fn parse_rgb(css: &str) -> Option<[u8; 3]> {
    let mut out = [0u8; 3];
    let mut found = 0;
    for part in css
        .split(|c: char| !c.is_ascii_digit())
        .filter(|p| !p.is_empty())
    {
        if found == 3 {
            break;
        }
        out[found] = part.parse::<u32>().ok()?.min(255) as u8;
        found += 1;
    }
    (found == 3).then_some(out)
}

/// Perceived brightness, 0..=255.
#[inline]
pub fn brightness(rgb: [u8; 3]) -> f32 {
    (rgb[0] as f32 * 299.0 + rgb[1] as f32 * 587.0 + rgb[2] as f32 * 114.0) / 1000.0
}

pub fn cursor_color(background_css: &str) -> Option<CursorColor> {
    let rgb = parse_rgb(background_css)?;
    Some(if brightness(rgb) > CURSOR_BRIGHTNESS_SPLIT {
        CursorColor::Black
    } else {
        CursorColor::White
    })
}

#[inline]
pub fn is_interactive(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_lowercase().as_str(),
        "button" | "a" | "input" | "textarea" | "select"
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorState {
    pub position: Vec2,
    pub color: CursorColor,
    pub hovering: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            color: CursorColor::White,
            hovering: false,
        }
    }
}

impl CursorState {
    /// Update from a pointer sample and what lies under it. An unparseable
    /// background keeps the previous colour.
    pub fn update(&mut self, position: Vec2, under: Option<(&str, &str)>) {
        self.position = position;
        if let Some((tag, background)) = under {
            self.hovering = is_interactive(tag);
            if let Some(c) = cursor_color(background) {
                self.color = c;
            }
        }
    }

    /// Diameter in px.
    pub fn size(&self) -> f32 {
        if self.hovering {
            32.0
        } else {
            20.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        assert_eq!(parse_rgb("rgb(12, 34, 56)"), Some([12, 34, 56]));
        assert_eq!(parse_rgb("rgba(255, 255, 255, 0.5)"), Some([255, 255, 255]));
        assert_eq!(parse_rgb("transparent"), None);
        assert_eq!(parse_rgb("rgb(1, 2)"), None);
    }

    #[test]
    fn bright_backgrounds_get_dark_cursor() {
        assert_eq!(cursor_color("rgb(249, 250, 251)"), Some(CursorColor::Black));
        assert_eq!(cursor_color("rgb(0, 0, 0)"), Some(CursorColor::White));
        assert_eq!(cursor_color("rgb(128, 128, 128)"), Some(CursorColor::White));
    }

    #[test]
    fn hover_and_colour_update() {
        let mut c = CursorState::default();
        c.update(Vec2::new(5.0, 6.0), Some(("A", "rgb(255, 255, 255)")));
        assert!(c.hovering);
        assert_eq!(c.color, CursorColor::Black);
        assert_eq!(c.size(), 32.0);
        c.update(Vec2::new(7.0, 8.0), Some(("DIV", "none")));
        assert!(!c.hovering);
        assert_eq!(c.color, CursorColor::Black);
        c.update(Vec2::new(9.0, 9.0), None);
        assert_eq!(c.position, Vec2::new(9.0, 9.0));
    }
}
