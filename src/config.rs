use crate::constants::CONFIG_ATTR_PREFIX;
use folio_core::{MotionConfig, OVERRIDE_KEYS};
use web_sys as web;

/// Defaults plus any `data-*` overrides present on `<body>`. A rejected
/// value is logged and the default kept.
pub fn load(document: &web::Document) -> MotionConfig {
    let mut cfg = MotionConfig::new();
    let Some(body) = document.body() else {
        return cfg;
    };
    for key in OVERRIDE_KEYS {
        let Some(value) = body.get_attribute(&format!("{}{}", CONFIG_ATTR_PREFIX, key)) else {
            continue;
        };
        match cfg.apply_override(key, &value) {
            Ok(()) => log::info!("[config] {}={}", key, value),
            Err(e) => log::warn!("[config] ignoring override: {}", e),
        }
    }
    cfg
}
