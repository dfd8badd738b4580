use std::cell::RefCell;
use std::rc::Rc;

use log::LevelFilter;
use wasm_bindgen::prelude::*;

use slider_core::{NavigatorConfig, SectionNavigator};

mod dom;
mod error;
mod events;
mod menu;
mod state;
mod utils;

use crate::dom::DomSurface;
use crate::error::MountError;
use crate::state::{STATE, State};

/// Find the slider's elements and build the navigator, placed on the section
/// named by the current fragment.
fn mount(config: NavigatorConfig) -> Result<Rc<RefCell<State>>, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let (surface, catalog) = DomSurface::mount(&window, &document, &config)?;
    let fragment = window.location().hash().ok();
    let nav = SectionNavigator::new(catalog, surface, &config, fragment.as_deref());
    log::info!(
        "slider: {} sections, starting at `{}`",
        nav.catalog().len(),
        nav.current_section().id
    );
    Ok(Rc::new(RefCell::new(State {
        window,
        document,
        config,
        nav,
    })))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let config = web_sys::window().map(|w| utils::read_config(&w));
    let level = match &config {
        Some(Ok(c)) => c.log_level,
        _ => LevelFilter::Info,
    };
    utils::init_logging(level);
    let config = match config {
        Some(Ok(c)) => c,
        Some(Err(e)) => {
            log::warn!("slider: ignoring __SLIDER_CONFIG: {e}");
            NavigatorConfig::default()
        }
        None => NavigatorConfig::default(),
    };

    // A page without the slider markup keeps its static layout.
    let state = match mount(config) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("slider: not started: {e}");
            return Ok(());
        }
    };
    STATE.with(|st| st.replace(Some(state.clone())));

    // Half-wired listeners are left in place; the page must still load.
    if let Err(e) = events::attach_navigation(state.clone()) {
        log::error!("slider: wiring navigation failed: {e:?}");
        return Ok(());
    }
    if let Err(e) = menu::attach_menu(state) {
        log::error!("slider: wiring mobile menu failed: {e:?}");
    }
    Ok(())
}
