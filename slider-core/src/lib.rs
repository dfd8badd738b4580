//! Platform-independent core of the horizontal section slider.
//!
//! Everything here is plain Rust so it can be tested on the host; the wasm
//! crate only supplies a [`NavigatorSurface`] backed by the real DOM.

pub mod config;
pub mod input;
pub mod link;
pub mod navigator;
pub mod section;

pub use config::NavigatorConfig;
pub use input::{Intent, NavInput};
pub use link::{LinkTarget, fragment_id};
pub use navigator::{Motion, NavigatorState, NavigatorSurface, Phase, SectionNavigator};
pub use section::{Section, SectionCatalog};

/// CSS transform that puts the section at `index` in view.
/// Every section is one viewport wide.
pub fn slide_transform(index: usize) -> String {
    if index == 0 {
        return "translateX(0vw)".to_string();
    }
    format!("translateX(-{}vw)", index * 100)
}
