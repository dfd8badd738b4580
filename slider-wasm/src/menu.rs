use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, Node};

use crate::state::State;
use crate::utils::{query_one, set_class};

// Collapsible nav menu on narrow screens: the toggle button opens and closes
// it, following a nav entry or clicking anywhere else on the page closes it.
pub fn attach_menu(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let (document, toggle, menu, open_class, links) = {
        let s = state.borrow();
        let toggle = query_one(&s.document, &s.config.menu_toggle_selector);
        let menu = query_one(&s.document, &s.config.menu_selector);
        let (Some(toggle), Some(menu)) = (toggle, menu) else {
            log::debug!("slider: no mobile menu on this page");
            return Ok(());
        };
        let links: Vec<Element> = s
            .nav
            .surface()
            .nav_links()
            .iter()
            .map(|l| l.element.clone())
            .collect();
        (
            s.document.clone(),
            toggle,
            menu,
            s.config.menu_open_class.clone(),
            links,
        )
    };

    {
        let (t, m, class) = (toggle.clone(), menu.clone(), open_class.clone());
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let open = !m.class_list().contains(&class);
            set_class(&t, &class, open);
            set_class(&m, &class, open);
        }));
        toggle.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    for link in links {
        let (t, m, class) = (toggle.clone(), menu.clone(), open_class.clone());
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            set_class(&t, &class, false);
            set_class(&m, &class, false);
        }));
        link.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    // Outside clicks
    {
        let (t, m, class) = (toggle, menu, open_class);
        let onclick = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = target
                .as_ref()
                .is_some_and(|n| m.contains(Some(n)) || t.contains(Some(n)));
            if !inside {
                set_class(&t, &class, false);
                set_class(&m, &class, false);
            }
        }));
        document.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }
    Ok(())
}
