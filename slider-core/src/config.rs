use log::LevelFilter;
use serde::Deserialize;

/// Tunables of the slider. The host page can override any field through
/// `window.__SLIDER_CONFIG`; missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Length of the slide transition (ms). Inputs are dropped meanwhile.
    pub transition_ms: u32,
    /// Minimum horizontal travel of a touch swipe (CSS px).
    pub swipe_threshold_px: f64,
    pub container_selector: String,
    pub section_selector: String,
    pub nav_link_selector: String,
    /// Extra buttons that jump to a section by `data-section` index.
    pub jump_selector: String,
    pub active_class: String,
    pub menu_toggle_selector: String,
    pub menu_selector: String,
    pub menu_open_class: String,
    pub log_level: LevelFilter,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        NavigatorConfig {
            transition_ms: 800,
            swipe_threshold_px: 50.0,
            container_selector: "#horizontal-container".to_string(),
            section_selector: ".section-slide".to_string(),
            nav_link_selector: ".nav-link".to_string(),
            jump_selector: ".hero-buttons [data-section]".to_string(),
            active_class: "active".to_string(),
            menu_toggle_selector: "#hamburger".to_string(),
            menu_selector: "#nav-menu".to_string(),
            menu_open_class: "active".to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl NavigatorConfig {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
