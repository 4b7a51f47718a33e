// DOM contract between the page markup and the frontend.
// Ids carry no '#', classes carry no '.', attributes are full names.

// Parallax sections: the value is the profile ("hero" or anything else).
pub const PARALLAX_SECTION_ATTR: &str = "data-parallax-section";
pub const PARALLAX_SECTION_SELECTOR: &str = "[data-parallax-section]";
pub const HERO_PROFILE: &str = "hero";
pub const PARALLAX_DEPTH_ATTR: &str = "data-parallax-depth";
pub const PARALLAX_DEPTH_SELECTOR: &str = "[data-parallax-depth]";

// Hero text that dissolves as the page scrolls. Only the element's first
// non-blank text node is shortened; child elements are left alone.
pub const DISSOLVE_SELECTOR: &str = "[data-dissolve]";

// Scroll-linked gradient layers, driven by their section's progress
pub const SCROLL_GRADIENT_SELECTOR: &str = "[data-scroll-gradient]";
pub const GRADIENT_OPACITY_VAR: &str = "--scroll-opacity";
pub const GRADIENT_GLOW_VAR: &str = "--scroll-glow";
pub const GRADIENT_TINT_VAR: &str = "--scroll-tint";

// One-shot reveal
pub const REVEAL_SELECTOR: &str = ".animate-slide-up";
pub const REVEAL_HIDDEN_CLASS: &str = "opacity-0";
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

// Navigation
pub const NAVBAR_ID: &str = "navbar";
pub const NAV_LINK_SELECTOR: &str = "[data-nav-link]";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_SCROLLED_CLASS: &str = "nav-scrolled";
pub const NAV_ACTIVE_CLASS: &str = "nav-active";
pub const SCROLL_TOP_ID: &str = "scroll-to-top";
pub const SCROLL_TOP_VISIBLE_CLASS: &str = "visible";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MENU_OPEN_CLASS: &str = "open";
pub const MOBILE_LINK_SELECTOR: &str = "#mobile-menu a";

// Custom cursor
pub const CURSOR_ID: &str = "custom-cursor";
pub const CURSOR_DOT_ID: &str = "custom-cursor-dot";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_SUBMIT_LABEL: &str = "Send Message";
pub const CONTACT_SENDING_LABEL: &str = "Sending...";

// Configuration overrides are read from `data-*` attributes on <body>
pub const CONFIG_ATTR_PREFIX: &str = "data-";
