use wasm_bindgen::JsValue;

use crate::constants::LOG_TARGET;
use crate::logic::Navigator;

/// Forwards click targets to a JavaScript route-change callback.
pub struct JsNavigator {
    callback: js_sys::Function,
}

impl JsNavigator {
    pub fn new(callback: js_sys::Function) -> Self {
        Self { callback }
    }
}

impl Navigator for JsNavigator {
    fn navigate(&mut self, target: &str) {
        if let Err(err) = self
            .callback
            .call1(&JsValue::NULL, &JsValue::from_str(target))
        {
            log::warn!(target: LOG_TARGET, "navigation callback failed for {}: {:?}", target, err);
        }
    }
}
