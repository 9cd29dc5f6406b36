//! WASM bindings for the figcode translators.
//!
//! The design-tool host is a JS plugin runtime; it hands one node at a time
//! across this boundary and splices the returned fragments into the emitted
//! source. Returns a JS object
//! `{ size, flow, boxShadow, elevation, shadowColor }` or throws on error.

use wasm_bindgen::prelude::*;

use figcode_codegen::{translate_node, Target};
use figcode_node::VisualNode;

/// Translate one node's visual properties into fragments for a target
/// framework (`"flutter"` or `"tailwind"`).
///
/// Throws a JS error for an unknown target, a node that does not match the
/// `VisualNode` shape, or a translation failure.
#[wasm_bindgen]
pub fn translate(node: JsValue, target: &str) -> Result<JsValue, JsError> {
    let target = match target {
        "flutter" => Target::Flutter,
        "tailwind" => Target::Tailwind,
        other => return Err(JsError::new(&format!("unknown target: {other}"))),
    };

    let node: VisualNode =
        serde_wasm_bindgen::from_value(node).map_err(|e| JsError::new(&e.to_string()))?;

    let fragments = translate_node(&node, target).map_err(|e| JsError::new(&e.to_string()))?;

    // Serialize to a plain JS object the plugin consumes directly
    let js_obj = js_sys::Object::new();
    let set = |key: &str, value: String| {
        js_sys::Reflect::set(&js_obj, &key.into(), &value.into())
            .map(|_| ())
            .map_err(|_| JsError::new(&format!("Failed to set {key} property")))
    };
    set("size", fragments.size)?;
    set("flow", fragments.flow)?;
    set("boxShadow", fragments.box_shadow)?;
    set("elevation", fragments.elevation)?;
    set("shadowColor", fragments.shadow_color)?;

    Ok(js_obj.into())
}

/// Get the engine version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
