use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Window};

use slider_core::{NavigatorConfig, SectionNavigator};

use crate::dom::DomSurface;

/// Runtime state shared by the event closures and the settle timer.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub config: NavigatorConfig,
    pub nav: SectionNavigator<DomSurface>,
}

// Thread local storage for the single slider instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}
