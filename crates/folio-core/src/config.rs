//! Motion configuration.
//!
//! Every multiplier the views use lives here so that the section profiles
//! differ only by data, never by code. Defaults come from `constants.rs`;
//! the web frontend layers `data-*` overrides on top through
//! [`MotionConfig::apply_override`].

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`{key}` is not a number: {value:?}")]
    NotANumber { key: String, value: String },
    #[error("`{key}` must be finite, got {value}")]
    NotFinite { key: String, value: f64 },
    #[error("`{key}` must not be negative, got {value}")]
    Negative { key: String, value: f64 },
    #[error("`{key}` must lie in [0, 1], got {value}")]
    OutOfUnitRange { key: String, value: f64 },
    #[error("`{key}` must be a CSS length list like \"0px\" or \"-100px 0px\", got {value:?}")]
    BadMargin { key: String, value: String },
    #[error("unknown configuration key `{0}`")]
    UnknownKey(String),
}

/// Pointer parallax multipliers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub k_x: f32,
    pub k_y: f32,
    pub k_z: f32,
    /// Degrees of rotation per unit depth; 0 disables tilt.
    pub tilt_k: f32,
    /// Perspective prefix in px; `None` leaves perspective to the parent.
    pub perspective: Option<f32>,
}

impl ParallaxConfig {
    pub fn hero() -> Self {
        Self {
            k_x: PARALLAX_K,
            k_y: PARALLAX_K,
            k_z: PARALLAX_DEPTH_PUSH,
            tilt_k: 0.0,
            perspective: None,
        }
    }

    pub fn section() -> Self {
        Self {
            k_x: SECTION_PARALLAX_K,
            k_y: SECTION_PARALLAX_K,
            k_z: SECTION_PARALLAX_K,
            tilt_k: SECTION_TILT_DEG,
            perspective: Some(SECTION_PERSPECTIVE_PX),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("parallax.k_x", self.k_x as f64)?;
        finite("parallax.k_y", self.k_y as f64)?;
        finite("parallax.k_z", self.k_z as f64)?;
        finite("parallax.tilt_k", self.tilt_k as f64)?;
        if let Some(p) = self.perspective {
            non_negative("parallax.perspective", p as f64)?;
        }
        Ok(())
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self::hero()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageConfig {
    pub perspective: f32,
    pub push_back: f32,
    pub scroll_tilt: f32,
    pub pointer_tilt: f32,
    pub shrink: f32,
    pub radius: f32,
    pub shadow_offset: f32,
    pub shadow_blur: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            perspective: STAGE_PERSPECTIVE_PX,
            push_back: STAGE_PUSH_BACK_PX,
            scroll_tilt: STAGE_SCROLL_TILT_DEG,
            pointer_tilt: STAGE_POINTER_TILT_DEG,
            shrink: STAGE_SHRINK,
            radius: STAGE_RADIUS_PX,
            shadow_offset: STAGE_SHADOW_OFFSET_PX,
            shadow_blur: STAGE_SHADOW_BLUR_PX,
        }
    }
}

/// Rate and cap per gradient channel. The caps differ on purpose so that
/// layers saturate one after another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientConfig {
    pub opacity_rate: f32,
    pub opacity_cap: f32,
    pub glow_rate: f32,
    pub glow_cap: f32,
    pub tint_rate: f32,
    pub tint_cap: f32,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            opacity_rate: GRADIENT_OPACITY_RATE,
            opacity_cap: GRADIENT_OPACITY_CAP,
            glow_rate: GRADIENT_GLOW_RATE,
            glow_cap: GRADIENT_GLOW_CAP,
            tint_rate: GRADIENT_TINT_RATE,
            tint_cap: GRADIENT_TINT_CAP,
        }
    }
}

impl GradientConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("gradient.opacity_rate", self.opacity_rate as f64)?;
        non_negative("gradient.glow_rate", self.glow_rate as f64)?;
        non_negative("gradient.tint_rate", self.tint_rate as f64)?;
        unit("gradient.opacity_cap", self.opacity_cap as f64)?;
        unit("gradient.glow_cap", self.glow_cap as f64)?;
        unit("gradient.tint_cap", self.tint_cap as f64)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavConfig {
    pub scrolled_after: f64,
    pub section_lead: f64,
    pub scroll_top_after: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_after: NAV_SCROLLED_AFTER_PX,
            section_lead: NAV_SECTION_LEAD_PX,
            scroll_top_after: SCROLL_TOP_AFTER_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactConfig {
    pub submit_delay_ms: i32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: CONTACT_SUBMIT_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub parallax: ParallaxConfig,
    pub section_parallax: ParallaxConfig,
    pub stage: StageConfig,
    pub gradient: GradientConfig,
    pub reveal: RevealConfig,
    pub nav: NavConfig,
    pub contact: ContactConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            parallax: ParallaxConfig::hero(),
            section_parallax: ParallaxConfig::section(),
            stage: StageConfig::default(),
            gradient: GradientConfig::default(),
            reveal: RevealConfig::default(),
            nav: NavConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl MotionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parallax.validate()?;
        self.section_parallax.validate()?;
        self.gradient.validate()?;
        unit("reveal.threshold", self.reveal.threshold)?;
        parse_margin("reveal.margin", &self.reveal.root_margin)?;
        non_negative("nav.scroll_top_after", self.nav.scroll_top_after)?;
        Ok(())
    }

    /// Apply one `data-*` style override. On error the config is untouched.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut next = self.clone();
        match key {
            "parallax-k" => {
                let k = number(key, value)? as f32;
                next.parallax.k_x = k;
                next.parallax.k_y = k;
                next.parallax.k_z = k;
            }
            "parallax-tilt" => next.parallax.tilt_k = number(key, value)? as f32,
            "section-parallax-k" => {
                let k = number(key, value)? as f32;
                next.section_parallax.k_x = k;
                next.section_parallax.k_y = k;
                next.section_parallax.k_z = k;
            }
            "section-parallax-tilt" => next.section_parallax.tilt_k = number(key, value)? as f32,
            "reveal-threshold" => next.reveal.threshold = number(key, value)?,
            "reveal-margin" => next.reveal.root_margin = parse_margin(key, value)?,
            "scroll-top-after" => next.nav.scroll_top_after = number(key, value)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// Keys recognised by [`MotionConfig::apply_override`], as found in
/// `data-*` attribute names.
pub const OVERRIDE_KEYS: &[&str] = &[
    "parallax-k",
    "parallax-tilt",
    "section-parallax-k",
    "section-parallax-tilt",
    "reveal-threshold",
    "reveal-margin",
    "scroll-top-after",
];

fn number(key: &str, value: &str) -> Result<f64, ConfigError> {
    let v: f64 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotANumber {
            key: key.to_string(),
            value: value.to_string(),
        })?;
    finite(key, v)?;
    Ok(v)
}

fn finite(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite {
            key: key.to_string(),
            value,
        })
    }
}

fn non_negative(key: &str, value: f64) -> Result<(), ConfigError> {
    finite(key, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative {
            key: key.to_string(),
            value,
        });
    }
    Ok(())
}

fn unit(key: &str, value: f64) -> Result<(), ConfigError> {
    finite(key, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::OutOfUnitRange {
            key: key.to_string(),
            value,
        });
    }
    Ok(())
}

// IntersectionObserver accepts one to four px/% lengths.
fn parse_margin(key: &str, value: &str) -> Result<String, ConfigError> {
    let bad = || ConfigError::BadMargin {
        key: key.to_string(),
        value: value.to_string(),
    };
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.is_empty() || parts.len() > 4 {
        return Err(bad());
    }
    for p in &parts {
        let num = p
            .strip_suffix("px")
            .or_else(|| p.strip_suffix('%'))
            .ok_or_else(bad)?;
        let n: f64 = num.parse().map_err(|_| bad())?;
        if !n.is_finite() {
            return Err(bad());
        }
    }
    Ok(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(MotionConfig::new().validate().is_ok());
        assert_eq!(MotionConfig::new().section_parallax, ParallaxConfig::section());
        assert_eq!(MotionConfig::new().parallax, ParallaxConfig::hero());
    }

    #[test]
    fn override_updates_both_axes() {
        let mut cfg = MotionConfig::new();
        cfg.apply_override("parallax-k", " 42 ").unwrap();
        assert_eq!(cfg.parallax.k_x, 42.0);
        assert_eq!(cfg.parallax.k_y, 42.0);
        assert_eq!(cfg.parallax.k_z, 42.0);
    }

    #[test]
    fn section_override_keeps_one_k_for_every_axis() {
        let mut cfg = MotionConfig::new();
        cfg.apply_override("section-parallax-k", "12").unwrap();
        let p = cfg.section_parallax;
        assert_eq!((p.k_x, p.k_y, p.k_z), (12.0, 12.0, 12.0));
        assert_eq!(p.tilt_k, SECTION_TILT_DEG);
        assert_eq!(cfg.parallax, ParallaxConfig::hero());
    }

    #[test]
    fn rejected_override_leaves_config_untouched() {
        let mut cfg = MotionConfig::new();
        let before = cfg.clone();
        assert!(matches!(
            cfg.apply_override("reveal-threshold", "1.5"),
            Err(ConfigError::OutOfUnitRange { .. })
        ));
        assert!(matches!(
            cfg.apply_override("parallax-k", "fast"),
            Err(ConfigError::NotANumber { .. })
        ));
        assert!(matches!(
            cfg.apply_override("scroll-top-after", "-1"),
            Err(ConfigError::Negative { .. })
        ));
        assert!(matches!(
            cfg.apply_override("parallax-k", "inf"),
            Err(ConfigError::NotFinite { .. })
        ));
        assert!(matches!(
            cfg.apply_override("wobble", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert_eq!(cfg, before);
    }

    #[test]
    fn margin_is_normalised() {
        let mut cfg = MotionConfig::new();
        cfg.apply_override("reveal-margin", "-100px   0px").unwrap();
        assert_eq!(cfg.reveal.root_margin, "-100px 0px");
        assert!(cfg.apply_override("reveal-margin", "100em").is_err());
        assert!(cfg.apply_override("reveal-margin", "").is_err());
    }
}
