#![cfg(target_arch = "wasm32")]

use mahr_calculator_wasm::domain::display::{DisplaySink, DisplaySlot};
use mahr_calculator_wasm::domain::theme::Theme;
use mahr_calculator_wasm::infrastructure::dom::{DomDisplaySink, apply_theme};
use mahr_calculator_wasm::infrastructure::rendering::ShareCardRenderer;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn slots_map_to_their_page_ids() {
    assert_eq!(DisplaySlot::LoadingPrice.element_id(), "loading-price");
    assert_eq!(DisplaySlot::PriceDisplay.element_id(), "price-display");
    assert_eq!(DisplaySlot::MinMahrDisplay.element_id(), "min-mahr-display");
    assert_eq!(DisplaySlot::PerGramContainer.element_id(), "per-gram-container");
    assert_eq!(DisplaySlot::PerGramDisplay.element_id(), "per-gram-display");
    assert_eq!(DisplaySlot::LastUpdated.element_id(), "last-updated");
}

#[wasm_bindgen_test]
fn theme_class_follows_preference() {
    let root = web_sys::window().unwrap().document().unwrap().document_element().unwrap();

    apply_theme(Theme::Dark);
    assert!(root.class_list().contains("dark"));

    apply_theme(Theme::Light);
    assert!(!root.class_list().contains("dark"));
}

#[wasm_bindgen_test]
async fn share_card_is_deterministic_without_pattern() {
    // the bare test page has no slots and no pattern asset, so this
    // exercises the fallback-text, pattern-missing composition path
    let sink = DomDisplaySink::new();
    let renderer = ShareCardRenderer::new();

    let first = renderer.generate(&sink, Theme::Light).await.unwrap();
    let second = renderer.generate(&sink, Theme::Light).await.unwrap();

    assert!(first.data_url.starts_with("data:image/png"));
    assert_eq!(first.data_url, second.data_url);
}

#[wasm_bindgen_test]
fn writes_to_absent_slots_are_noops() {
    let sink = DomDisplaySink::new();
    // the bare test page carries none of the widget's slots
    assert!(!sink.has_slot(DisplaySlot::PerGramDisplay));
    sink.set_text(DisplaySlot::PerGramDisplay, "১০০");
    sink.show(DisplaySlot::PerGramContainer);
    assert!(sink.text_of(DisplaySlot::PerGramDisplay).is_none());
}
