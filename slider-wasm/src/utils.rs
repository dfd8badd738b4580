use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use slider_core::NavigatorConfig;

use crate::error::{ConfigError, MountError};

/// `log` backend writing to the browser console.
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("{}", record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Route `log` records to the console. Safe to call more than once.
pub fn init_logging(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Read overrides from `window.__SLIDER_CONFIG`, which the host page may set
/// to either a JSON string or a plain object.
pub fn read_config(window: &Window) -> Result<NavigatorConfig, ConfigError> {
    let raw = js_sys::Reflect::get(window, &JsValue::from_str("__SLIDER_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if raw.is_undefined() || raw.is_null() {
        return Ok(NavigatorConfig::default());
    }
    let text = match raw.as_string() {
        Some(s) => s,
        None => js_sys::JSON::stringify(&raw)
            .map(String::from)
            .map_err(|_| ConfigError::NotSerializable)?,
    };
    Ok(NavigatorConfig::from_json(&text)?)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, MountError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|_| MountError::Selector(selector.to_string()))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// First element matching `selector`; a bad selector counts as no match.
pub fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Add or remove a class, logging instead of failing.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let res = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = res {
        log::warn!("slider: class update failed: {e:?}");
    }
}
