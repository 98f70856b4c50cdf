//! Narrow sink over the page's fixed display regions, so the calculator
//! core never touches a concrete rendering technology.

use strum::{AsRefStr, Display};

/// The named slots the widget writes into. `PerGramContainer` and
/// `PerGramDisplay` are optional in the page; writes to absent slots
/// degrade gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum DisplaySlot {
    #[strum(serialize = "loading-price")]
    LoadingPrice,
    #[strum(serialize = "price-display")]
    PriceDisplay,
    #[strum(serialize = "min-mahr-display")]
    MinMahrDisplay,
    #[strum(serialize = "per-gram-container")]
    PerGramContainer,
    #[strum(serialize = "per-gram-display")]
    PerGramDisplay,
    #[strum(serialize = "last-updated")]
    LastUpdated,
}

impl DisplaySlot {
    /// The id of the element backing this slot in the page.
    pub fn element_id(&self) -> &str {
        self.as_ref()
    }
}

/// Show/hide a region, set its content, read back what is currently
/// rendered. Implemented by the DOM in infrastructure and by a recording
/// fake in tests.
pub trait DisplaySink {
    fn show(&self, slot: DisplaySlot);
    fn hide(&self, slot: DisplaySlot);
    fn set_text(&self, slot: DisplaySlot, text: &str);
    fn set_html(&self, slot: DisplaySlot, html: &str);
    /// Text currently rendered into the slot, `None` when the slot is
    /// absent from the page.
    fn text_of(&self, slot: DisplaySlot) -> Option<String>;
    /// Whether the page actually carries this slot.
    fn has_slot(&self, slot: DisplaySlot) -> bool;
}
