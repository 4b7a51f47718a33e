// Host-side tests for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn attribute_selectors_match_their_attributes() {
    assert_eq!(PARALLAX_SECTION_SELECTOR, format!("[{}]", PARALLAX_SECTION_ATTR));
    assert_eq!(PARALLAX_DEPTH_SELECTOR, format!("[{}]", PARALLAX_DEPTH_ATTR));
    for attr in [PARALLAX_SECTION_ATTR, PARALLAX_DEPTH_ATTR, REVEAL_ID_ATTR] {
        assert!(attr.starts_with(CONFIG_ATTR_PREFIX), "{attr}");
    }
}

#[test]
fn ids_and_classes_are_bare_names() {
    let ids = [
        NAVBAR_ID,
        SCROLL_TOP_ID,
        MENU_TOGGLE_ID,
        MOBILE_MENU_ID,
        CURSOR_ID,
        CURSOR_DOT_ID,
        CONTACT_FORM_ID,
        CONTACT_SUBMIT_ID,
    ];
    let classes = [
        REVEAL_HIDDEN_CLASS,
        NAV_SCROLLED_CLASS,
        NAV_ACTIVE_CLASS,
        SCROLL_TOP_VISIBLE_CLASS,
        MENU_OPEN_CLASS,
    ];
    for name in ids.iter().chain(classes.iter()) {
        assert!(!name.is_empty());
        assert!(!name.starts_with('#') && !name.starts_with('.'), "{name}");
        assert!(!name.contains(char::is_whitespace), "{name}");
    }
    let mut unique = ids.to_vec();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn mobile_links_live_inside_mobile_menu() {
    assert!(MOBILE_LINK_SELECTOR.starts_with(&format!("#{}", MOBILE_MENU_ID)));
    assert_eq!(REVEAL_SELECTOR.strip_prefix('.'), Some("animate-slide-up"));
}

#[test]
fn gradient_vars_are_custom_properties() {
    for var in [GRADIENT_OPACITY_VAR, GRADIENT_GLOW_VAR, GRADIENT_TINT_VAR] {
        assert!(var.starts_with("--"), "{var}");
    }
}
