// Shared motion tuning constants used by the web frontend and the host tests.

// Parallax (pointer driven). Hero profile is the canonical default.
pub const PARALLAX_K: f32 = 50.0; // px of travel per unit depth at the container edge
pub const PARALLAX_DEPTH_PUSH: f32 = 50.0; // translateZ px per unit depth
pub const SECTION_PARALLAX_K: f32 = 30.0; // softer travel used by content sections
pub const SECTION_TILT_DEG: f32 = 5.0; // rotateX/rotateY degrees per unit depth
pub const SECTION_PERSPECTIVE_PX: f32 = 2000.0;

// Hero stage (scroll + pointer driven container)
pub const STAGE_PERSPECTIVE_PX: f32 = 2000.0;
pub const STAGE_PUSH_BACK_PX: f32 = 1000.0; // translateZ at full progress (applied negative)
pub const STAGE_SCROLL_TILT_DEG: f32 = 20.0; // rotateX contributed by scroll progress
pub const STAGE_POINTER_TILT_DEG: f32 = 5.0; // rotateX/rotateY contributed by the pointer
pub const STAGE_SHRINK: f32 = 0.3; // scale = 1 - progress * STAGE_SHRINK
pub const STAGE_RADIUS_PX: f32 = 100.0;
pub const STAGE_SHADOW_OFFSET_PX: f32 = 50.0;
pub const STAGE_SHADOW_BLUR_PX: f32 = 100.0;

// Scroll gradient channels. Each channel saturates at its own cap.
pub const GRADIENT_OPACITY_RATE: f32 = 2.0;
pub const GRADIENT_OPACITY_CAP: f32 = 1.0;
pub const GRADIENT_GLOW_RATE: f32 = 1.5;
pub const GRADIENT_GLOW_CAP: f32 = 0.8;
pub const GRADIENT_TINT_RATE: f32 = 1.0;
pub const GRADIENT_TINT_CAP: f32 = 0.5;

// Reveal
pub const REVEAL_THRESHOLD: f64 = 0.1; // visible fraction that triggers a reveal
pub const REVEAL_ROOT_MARGIN: &str = "0px";

// Navigation
pub const NAV_SCROLLED_AFTER_PX: f64 = 20.0;
pub const NAV_SECTION_LEAD_PX: f64 = 100.0; // sections activate this far before their top
pub const SCROLL_TOP_AFTER_PX: f64 = 300.0;

// Cursor
pub const CURSOR_BRIGHTNESS_SPLIT: f32 = 128.0;

// Contact form: simulated submission, never a network call
pub const CONTACT_SUBMIT_DELAY_MS: i32 = 1500;
