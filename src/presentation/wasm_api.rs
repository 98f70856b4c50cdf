//! WASM bridge for embedders - minimal logic, straight to the
//! application layer.

use js_sys::Promise;
use leptos::SignalGetUntracked;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::global_state::theme_signal;
use crate::infrastructure::dom::DomDisplaySink;
use crate::infrastructure::rendering::ShareCardRenderer;

/// Compose the share card for the currently displayed values and resolve
/// with its PNG data URL. Safe to invoke repeatedly; each call uses a
/// private canvas.
#[wasm_bindgen(js_name = generateShareImage)]
pub fn generate_share_image() -> Promise {
    future_to_promise(async move {
        let sink = DomDisplaySink::new();
        let image = ShareCardRenderer::new()
            .generate(&sink, theme_signal().get_untracked())
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(JsValue::from_str(&image.data_url))
    })
}
