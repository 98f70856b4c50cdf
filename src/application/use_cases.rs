use crate::domain::display::{DisplaySink, DisplaySlot};
use crate::domain::formatting::{format_bengali_int, format_taka};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::pricing::{DerivedValues, MahrCalculator, PriceRecord};
use crate::domain::share_card::{CardContent, FALLBACK_PER_GRAM_TEXT, FALLBACK_PRICE_TEXT};
use crate::time_utils::format_bengali_date;

/// Fixed text shown in the loading slot when the feed is unreachable.
pub const LOAD_ERROR_TEXT: &str = "Error Loading Data";

/// Static label written next to the feed date.
pub const LAST_UPDATED_LABEL: &str = "সর্বশেষ আপডেট:";

/// Writes one feed snapshot into the page's display slots. All numbers on
/// the board come from the same snapshot; on failure no numeric slot is
/// ever revealed.
pub struct PriceBoard<'a> {
    sink: &'a dyn DisplaySink,
    calculator: MahrCalculator,
}

impl<'a> PriceBoard<'a> {
    pub fn new(sink: &'a dyn DisplaySink) -> Self {
        Self { sink, calculator: MahrCalculator::new() }
    }

    /// Transition loading -> result and fill every slot the page carries.
    pub fn render(&self, record: &PriceRecord) -> DerivedValues {
        let values = self.calculator.compute(record);

        self.sink.hide(DisplaySlot::LoadingPrice);
        self.sink.show(DisplaySlot::PriceDisplay);
        self.sink.set_text(DisplaySlot::PriceDisplay, &format_taka(values.fatemi_mahr.value()));
        self.sink.set_text(DisplaySlot::MinMahrDisplay, &format_taka(values.min_mahr.value()));

        // Per-gram display is optional page furniture
        if self.sink.has_slot(DisplaySlot::PerGramContainer) && self.sink.has_slot(DisplaySlot::PerGramDisplay) {
            self.sink.show(DisplaySlot::PerGramContainer);
            self.sink.set_text(DisplaySlot::PerGramDisplay, &format_bengali_int(values.per_gram.value()));
        }

        let date = format_bengali_date(record.timestamp);
        self.sink.set_html(
            DisplaySlot::LastUpdated,
            &format!(r#"<i class="ph ph-clock"></i><span>{} {}</span>"#, LAST_UPDATED_LABEL, date),
        );

        get_logger().info(
            LogComponent::Application("PriceBoard"),
            &format!("💰 Rendered snapshot from t={} (per-gram {:.2})", record.timestamp, values.per_gram.value()),
        );

        values
    }

    /// Keep the loading region visible and swap its text for the fixed
    /// error message. Result slots stay hidden - never stale, never partial.
    pub fn render_error(&self, reason: &str) {
        self.sink.set_text(DisplaySlot::LoadingPrice, LOAD_ERROR_TEXT);

        get_logger().error(
            LogComponent::Application("PriceBoard"),
            &format!("❌ Price feed unavailable: {}", reason),
        );
    }
}

/// Collect the share card's content from what the page already shows.
/// Values are read back as rendered text, never recomputed from numbers.
pub fn read_card_content(sink: &dyn DisplaySink, now_secs: u64) -> CardContent {
    let fatemi_text = sink
        .text_of(DisplaySlot::PriceDisplay)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| FALLBACK_PRICE_TEXT.to_string());
    let per_gram_text = sink
        .text_of(DisplaySlot::PerGramDisplay)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| FALLBACK_PER_GRAM_TEXT.to_string());

    CardContent { fatemi_text, per_gram_text, date_text: format_bengali_date(now_secs) }
}
