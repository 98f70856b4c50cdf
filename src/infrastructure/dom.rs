//! Concrete DOM implementation of the display sink plus the few direct
//! document mutations (theme class, alert).

use crate::domain::display::{DisplaySink, DisplaySlot};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::theme::Theme;
use web_sys::Element;

/// Class used by the page's stylesheet to hide a region.
const HIDDEN_CLASS: &str = "hidden";

/// Sink writing through `document.getElementById`. Missing optional slots
/// are tolerated; every write to an absent slot is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomDisplaySink;

impl DomDisplaySink {
    pub fn new() -> Self {
        Self
    }

    fn element(&self, slot: DisplaySlot) -> Option<Element> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(slot.element_id()));

        if element.is_none() {
            get_logger().debug(
                LogComponent::Infrastructure("DomSink"),
                &format!("Display slot '{}' not present in page", slot.element_id()),
            );
        }

        element
    }
}

impl DisplaySink for DomDisplaySink {
    fn show(&self, slot: DisplaySlot) {
        if let Some(el) = self.element(slot) {
            let _ = el.class_list().remove_1(HIDDEN_CLASS);
        }
    }

    fn hide(&self, slot: DisplaySlot) {
        if let Some(el) = self.element(slot) {
            let _ = el.class_list().add_1(HIDDEN_CLASS);
        }
    }

    fn set_text(&self, slot: DisplaySlot, text: &str) {
        if let Some(el) = self.element(slot) {
            el.set_text_content(Some(text));
        }
    }

    fn set_html(&self, slot: DisplaySlot, html: &str) {
        if let Some(el) = self.element(slot) {
            el.set_inner_html(html);
        }
    }

    fn text_of(&self, slot: DisplaySlot) -> Option<String> {
        self.element(slot).and_then(|el| el.text_content())
    }

    fn has_slot(&self, slot: DisplaySlot) -> bool {
        self.element(slot).is_some()
    }
}

/// Apply the theme as the `dark` class on the document root; the page's
/// stylesheet keys every themed rule off that class.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
        let classes = root.class_list();
        let _ = if theme.is_dark() { classes.add_1("dark") } else { classes.remove_1("dark") };
    }
}

/// Blocking user-facing alert, used only on the clipboard failure path.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
