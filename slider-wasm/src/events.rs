use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, KeyboardEvent, MouseEvent, TouchEvent, WheelEvent};

use slider_core::{LinkTarget, NavInput};

use crate::state::State;
use crate::utils::query_all;

/// Run one input through the adapter layer. Returns whether it meant
/// anything to the slider, i.e. whether the browser default should be
/// suppressed. A dropped or no-op navigation still counts.
fn handle(state: &Rc<RefCell<State>>, input: NavInput<'_>) -> bool {
    let mut s = state.borrow_mut();
    let Some(intent) = input.intent(&s.config) else {
        return false;
    };
    s.nav.dispatch(intent);
    true
}

/// Keys typed into form fields belong to the field.
fn is_editable_target(e: &Event) -> bool {
    let Some(el) = e
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return false;
    };
    if el.is_content_editable() {
        return true;
    }
    matches!(
        el.tag_name().to_ascii_lowercase().as_str(),
        "input" | "textarea" | "select"
    )
}

/// Wire nav entries, jump buttons, keyboard, touch, wheel and hashchange.
pub fn attach_navigation(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let (window, document, container, jump_selector) = {
        let s = state.borrow();
        (
            s.window.clone(),
            s.document.clone(),
            s.nav.surface().container().clone(),
            s.config.jump_selector.clone(),
        )
    };

    // Nav entries that point at a slide, and jump buttons. Other links keep
    // their default behaviour.
    let mut targets: Vec<(web_sys::Element, LinkTarget)> = state
        .borrow()
        .nav
        .surface()
        .nav_links()
        .iter()
        .filter(|l| l.index.is_some())
        .map(|l| (l.element.clone(), l.target.clone()))
        .collect();
    match query_all(&document, &jump_selector) {
        Ok(buttons) => targets.extend(buttons.into_iter().filter_map(|el| {
            let target = LinkTarget::from_attributes(
                None,
                el.get_attribute("data-section").as_deref(),
                "",
            )?;
            Some((el, target))
        })),
        Err(e) => log::warn!("slider: jump buttons skipped: {e}"),
    }
    for (el, target) in targets {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            if handle(&st, NavInput::Link(&target)) {
                e.prevent_default();
            }
        }));
        el.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    // Keyboard
    {
        let st = state.clone();
        let keydown =
            Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |e: KeyboardEvent| {
                if e.alt_key() || e.ctrl_key() || e.meta_key() || is_editable_target(&e) {
                    return;
                }
                let key = e.key();
                if handle(&st, NavInput::Key(&key)) {
                    e.prevent_default();
                }
            }));
        window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
        keydown.forget();
    }

    // Touch swipe on the slide container
    {
        let start_x: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));
        let sx = start_x.clone();
        let touchstart =
            Closure::<dyn FnMut(TouchEvent)>::wrap(Box::new(move |e: TouchEvent| {
                sx.set(e.touches().get(0).map(|t| t.client_x() as f64));
            }));
        container
            .add_event_listener_with_callback("touchstart", touchstart.as_ref().unchecked_ref())?;
        touchstart.forget();

        let st = state.clone();
        let touchend = Closure::<dyn FnMut(TouchEvent)>::wrap(Box::new(move |e: TouchEvent| {
            let Some(start) = start_x.take() else {
                return;
            };
            if let Some(end) = e.changed_touches().get(0) {
                handle(
                    &st,
                    NavInput::Swipe {
                        start_x: start,
                        end_x: end.client_x() as f64,
                    },
                );
            }
        }));
        container
            .add_event_listener_with_callback("touchend", touchend.as_ref().unchecked_ref())?;
        touchend.forget();
    }

    // Horizontal wheel; needs a non-passive listener to cancel the scroll
    {
        let st = state.clone();
        let wheel = Closure::<dyn FnMut(WheelEvent)>::wrap(Box::new(move |e: WheelEvent| {
            let input = NavInput::Wheel {
                delta_x: e.delta_x(),
                delta_y: e.delta_y(),
            };
            if handle(&st, input) {
                e.prevent_default();
            }
        }));
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            wheel.as_ref().unchecked_ref(),
            &options,
        )?;
        wheel.forget();
    }

    // Back/forward and manual edits of the fragment
    {
        let st = state.clone();
        let win = window.clone();
        let hashchange = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let hash = win.location().hash().unwrap_or_default();
            let mut s = st.borrow_mut();
            if let Some(intent) = NavInput::Fragment(&hash).intent(&s.config) {
                s.nav.follow_fragment(intent);
            }
        }));
        window.add_event_listener_with_callback("hashchange", hashchange.as_ref().unchecked_ref())?;
        hashchange.forget();
    }

    Ok(())
}
