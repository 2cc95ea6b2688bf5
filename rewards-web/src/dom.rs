use rewards_core::Slot;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Look up the element behind a markup slot.
#[must_use]
pub fn slot_element(document: &Document, slot: Slot) -> Option<Element> {
    document.get_element_by_id(slot.element_id())
}

/// Readable text for a value the browser threw, e.g. `TypeError: x is null`.
///
/// Plain strings pass through; other values are rendered as JSON when they can be.
#[must_use]
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        let name = String::from(err.name());
        let message = String::from(err.message());
        return if name.is_empty() {
            message
        } else {
            format!("{name}: {message}")
        };
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|json| json.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Write a rewards failure to the console, tagged so hosts can filter it.
pub fn report_to_console(message: &str) {
    web_sys::console::error_2(&JsValue::from_str("[rewards]"), &JsValue::from_str(message));
}
