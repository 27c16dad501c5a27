use log::LevelFilter;
use wasm_bindgen::prelude::*;

pub const DEFAULT_TITLE: &str = "Sea Explorer Tablet";
pub const FALLBACK_RESOURCE: &str = "sea-tablet";

#[wasm_bindgen]
extern "C" {
    /// Injected by the game host into every embedded page.
    #[wasm_bindgen(catch, js_name = GetParentResourceName)]
    fn parent_resource_name() -> Result<String, JsValue>;
}

/// Runtime settings, resolved once at startup and shared through context.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelConfig {
    /// Host resource that owns the action endpoints.
    pub resource_name: String,
    pub default_title: String,
    pub toast_lifetime_ms: i32,
    pub level_pop_ms: i32,
    pub log_level: LevelFilter,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            resource_name: FALLBACK_RESOURCE.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            toast_lifetime_ms: 3200,
            level_pop_ms: 700,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

impl PanelConfig {
    pub fn from_host() -> Self {
        let mut config = Self::default();
        match parent_resource_name() {
            Ok(name) if !name.is_empty() => config.resource_name = name,
            Ok(_) | Err(_) => {
                log::warn!(
                    "GetParentResourceName unavailable, posting to '{}'",
                    config.resource_name
                );
            }
        }
        config
    }
}
