//! WASM utilities for browser interop
//!
//! Listeners attached through a `Closure` must outlive the attachment.
//! `DocumentEventListener` owns its closure and removes the listener on
//! drop, so storing one in a `Signal<Option<_>>` and setting it to `None`
//! detaches it.

use wasm_bindgen_x::prelude::*;

/// A document event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys_x::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl DocumentEventListener {
    /// Attach `callback` to `event_name` on the document.
    pub fn new(
        document: web_sys_x::Document,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            document,
            event_name,
            callback,
        }
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Read the `key` property of a keyboard event passed as a raw JsValue
pub fn event_key(event: &wasm_bindgen_x::JsValue) -> Option<String> {
    js_sys_x::Reflect::get(event, &"key".into())
        .ok()
        .and_then(|key| key.as_string())
}
