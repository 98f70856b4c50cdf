//! Fixed layout of the shareable 600x600 card: geometry, theme palettes
//! and the text blocks with their coordinates. Pure data; the canvas
//! drawing lives in `infrastructure::rendering::share_image`.

use crate::domain::formatting::TAKA_SIGN_PREFIX;
use crate::domain::theme::Theme;

pub const CARD_SIZE: f64 = 600.0;
pub const CARD_PADDING: f64 = 50.0;
pub const CORNER_RADIUS: f64 = 40.0;
pub const PATTERN_TILE: f64 = 150.0;
pub const BORDER_WIDTH: f64 = 2.0;

/// Tiling vector asset, recolored before painting.
pub const PATTERN_ASSET_PATH: &str = "assets/bg-pattern.svg";

pub const CARD_TITLE: &str = "আজকের মহরে ফাতেমি";
pub const CARD_DESCRIPTION: &str = "৫০০ দিরহাম = ১,৫৩০.৯ গ্রাম রৌপ্য";
pub const PER_GRAM_LABEL: &str = "রুপা প্রতি গ্রাম";
pub const ATTRIBUTION: &str = "matrixrex.github.io/Mahar-Calculator";

/// Placeholders painted when the board has not rendered yet.
pub const FALLBACK_PRICE_TEXT: &str = "-- টাকা";
pub const FALLBACK_PER_GRAM_TEXT: &str = "--";

/// Alert shown when the clipboard write is rejected, pointing the user at
/// the download path instead.
pub const COPY_FAILURE_NOTICE: &str = "ছবি কপি করতে ব্যর্থ হয়েছে। অনুগ্রহ করে ডাউনলোড করুন।";

/// Flat color set for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPalette {
    pub background: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
    pub subtle: &'static str,
    pub pattern: &'static str,
    pub pattern_opacity: f64,
    pub border: &'static str,
    pub divider: &'static str,
    pub attribution: &'static str,
}

impl CardPalette {
    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            Self {
                background: "#121212",
                primary: "#FFFFFF",
                accent: "#D4AF37",
                subtle: "#9CA3AF",
                // white tile at lower opacity keeps dark cards readable
                pattern: "#FFFFFF",
                pattern_opacity: 0.02,
                border: "rgba(255,255,255,0.1)",
                divider: "rgba(255,255,255,0.15)",
                attribution: "rgba(212,175,55,0.7)",
            }
        } else {
            Self {
                background: "#F8F9FA",
                primary: "#0F5132",
                accent: "#D4AF37",
                subtle: "#6B7280",
                pattern: "#000000",
                pattern_opacity: 0.03,
                border: "rgba(15,81,50,0.1)",
                divider: "rgba(15,81,50,0.15)",
                attribution: "rgba(15,81,50,0.6)",
            }
        }
    }
}

/// One centered line of text at a fixed baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub font: &'static str,
    pub color: String,
    pub y: f64,
}

/// Horizontal rule between the mahr amount and the per-gram rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Divider {
    pub from_x: f64,
    pub to_x: f64,
    pub y: f64,
    pub color: String,
}

/// The already-rendered display text the card is composed from. Read back
/// from the page, never recomputed from raw numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub fatemi_text: String,
    pub per_gram_text: String,
    pub date_text: String,
}

/// The card's text, top to bottom: title, mahr amount, fixed description,
/// per-gram label and value, date, attribution.
pub fn text_blocks(content: &CardContent, palette: &CardPalette) -> Vec<TextBlock> {
    vec![
        TextBlock {
            text: CARD_TITLE.to_string(),
            font: "bold 36px 'Tiro Bangla', serif",
            color: palette.primary.to_string(),
            y: 100.0,
        },
        TextBlock {
            text: content.fatemi_text.clone(),
            font: "bold 64px 'Tiro Bangla', serif",
            color: palette.accent.to_string(),
            y: 220.0,
        },
        TextBlock {
            text: CARD_DESCRIPTION.to_string(),
            font: "22px 'Tiro Bangla', serif",
            color: palette.subtle.to_string(),
            y: 280.0,
        },
        TextBlock {
            text: PER_GRAM_LABEL.to_string(),
            font: "bold 28px 'Tiro Bangla', serif",
            color: palette.primary.to_string(),
            y: 390.0,
        },
        TextBlock {
            text: format!("{}{}", TAKA_SIGN_PREFIX, content.per_gram_text),
            font: "bold 48px 'Tiro Bangla', serif",
            color: palette.accent.to_string(),
            y: 450.0,
        },
        TextBlock {
            text: content.date_text.clone(),
            font: "20px 'Tiro Bangla', serif",
            color: palette.subtle.to_string(),
            y: 510.0,
        },
        TextBlock {
            text: ATTRIBUTION.to_string(),
            font: "18px sans-serif",
            color: palette.attribution.to_string(),
            y: 560.0,
        },
    ]
}

pub fn divider(palette: &CardPalette) -> Divider {
    Divider {
        from_x: CARD_PADDING + 50.0,
        to_x: CARD_SIZE - CARD_PADDING - 50.0,
        y: 330.0,
        color: palette.divider.to_string(),
    }
}

/// Download filename; the embedded date pins the card to its day.
pub fn share_filename(date_iso: &str) -> String {
    format!("mohor-fatemi-{}.png", date_iso)
}
