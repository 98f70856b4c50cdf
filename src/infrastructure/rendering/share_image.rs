//! Canvas 2D composition of the shareable card. Geometry, palette and
//! text come from `domain::share_card`; this module only drives the
//! drawing context and the serialization.

use crate::application::read_card_content;
use crate::domain::display::DisplaySink;
use crate::domain::errors::{AppError, ShareResult};
use crate::domain::logging::{LogComponent, get_logger, get_time_provider};
use crate::domain::share_card::{
    self, BORDER_WIDTH, CARD_SIZE, CardContent, CardPalette, CORNER_RADIUS, PATTERN_ASSET_PATH, PATTERN_TILE,
};
use crate::domain::theme::Theme;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, CanvasRenderingContext2d, Document, HtmlAnchorElement, HtmlCanvasElement, HtmlImageElement};

/// Outcome of the pattern-asset load. Both completion paths feed the same
/// downstream drawing step; `Unavailable` just skips the decoration.
pub enum PatternAsset {
    Available(HtmlImageElement),
    Unavailable,
}

/// A finished composition: binary payload for the clipboard plus the
/// embeddable data URL used by the download anchor.
pub struct ShareImage {
    pub blob: Blob,
    pub data_url: String,
}

pub struct ShareCardRenderer;

impl ShareCardRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Compose the card from the currently rendered display text. Every
    /// call draws onto its own private canvas, so overlapping invocations
    /// from repeated clicks cannot corrupt one another.
    pub async fn generate(&self, sink: &dyn DisplaySink, theme: Theme) -> ShareResult<ShareImage> {
        let now_secs = get_time_provider().current_timestamp() / 1000;
        let content = read_card_content(sink, now_secs);
        let palette = CardPalette::for_theme(theme);

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::Dom("document unavailable".to_string()))?;
        let (canvas, ctx) = new_square_canvas(&document, CARD_SIZE as u32)?;

        ctx.set_fill_style_str(palette.background);
        trace_rounded_rect(&ctx, 0.0, 0.0, CARD_SIZE, CARD_SIZE, CORNER_RADIUS);
        ctx.fill();

        match load_pattern(PATTERN_ASSET_PATH).await {
            PatternAsset::Available(img) => {
                if let Err(e) = self.paint_pattern(&document, &ctx, &img, &palette) {
                    get_logger().warn(
                        LogComponent::Infrastructure("ShareCard"),
                        &format!("Pattern skipped: {}", e),
                    );
                }
            }
            PatternAsset::Unavailable => get_logger().warn(
                LogComponent::Infrastructure("ShareCard"),
                "Pattern asset missing, composing card without it",
            ),
        }

        self.paint_frame_and_text(&ctx, &content, &palette)?;

        let data_url = canvas
            .to_data_url_with_type("image/png")
            .map_err(|_| AppError::Dom("canvas data URL failed".to_string()))?;
        let blob = canvas_to_blob(&canvas).await?;

        get_logger().info(
            LogComponent::Infrastructure("ShareCard"),
            &format!("🖼️ Share card composed ({} theme)", theme),
        );

        Ok(ShareImage { blob, data_url })
    }

    /// Recolor the tile on a scratch canvas (composite `source-in` swaps
    /// the opaque pixels for a flat theme color), then paint it repeated
    /// at low opacity, clipped to the rounded card.
    fn paint_pattern(
        &self,
        document: &Document,
        ctx: &CanvasRenderingContext2d,
        img: &HtmlImageElement,
        palette: &CardPalette,
    ) -> ShareResult<()> {
        let (tile, tile_ctx) = new_square_canvas(document, PATTERN_TILE as u32)?;
        tile_ctx
            .draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, PATTERN_TILE, PATTERN_TILE)
            .map_err(|_| AppError::AssetUnavailable("pattern tile draw failed".to_string()))?;
        tile_ctx
            .set_global_composite_operation("source-in")
            .map_err(|_| AppError::AssetUnavailable("composite unsupported".to_string()))?;
        tile_ctx.set_fill_style_str(palette.pattern);
        tile_ctx.fill_rect(0.0, 0.0, PATTERN_TILE, PATTERN_TILE);

        ctx.save();
        trace_rounded_rect(ctx, 0.0, 0.0, CARD_SIZE, CARD_SIZE, CORNER_RADIUS);
        ctx.clip();
        ctx.set_global_alpha(palette.pattern_opacity);
        if let Ok(Some(pattern)) = ctx.create_pattern_with_html_canvas_element(&tile, "repeat") {
            ctx.set_fill_style_canvas_pattern(&pattern);
            ctx.fill_rect(0.0, 0.0, CARD_SIZE, CARD_SIZE);
        }
        ctx.set_global_alpha(1.0);
        ctx.restore();

        Ok(())
    }

    fn paint_frame_and_text(
        &self,
        ctx: &CanvasRenderingContext2d,
        content: &CardContent,
        palette: &CardPalette,
    ) -> ShareResult<()> {
        ctx.set_stroke_style_str(palette.border);
        ctx.set_line_width(BORDER_WIDTH);
        trace_rounded_rect(ctx, 0.0, 0.0, CARD_SIZE, CARD_SIZE, CORNER_RADIUS);
        ctx.stroke();

        ctx.set_text_align("center");
        for block in share_card::text_blocks(content, palette) {
            ctx.set_fill_style_str(&block.color);
            ctx.set_font(block.font);
            ctx.fill_text(&block.text, CARD_SIZE / 2.0, block.y)
                .map_err(|_| AppError::Dom("card text draw failed".to_string()))?;
        }

        let divider = share_card::divider(palette);
        ctx.begin_path();
        ctx.set_stroke_style_str(&divider.color);
        ctx.set_line_width(1.0);
        ctx.move_to(divider.from_x, divider.y);
        ctx.line_to(divider.to_x, divider.y);
        ctx.stroke();

        Ok(())
    }
}

impl Default for ShareCardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Trigger a client-local save of the generated card.
pub fn download(image: &ShareImage, filename: &str) -> ShareResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Dom("document unavailable".to_string()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| AppError::Dom("anchor creation failed".to_string()))?
        .dyn_into()
        .map_err(|_| AppError::Dom("anchor cast failed".to_string()))?;

    anchor.set_download(filename);
    anchor.set_href(&image.data_url);
    anchor.click();

    Ok(())
}

/// Copy the card into the platform clipboard as an image payload.
pub async fn copy_to_clipboard(image: &ShareImage) -> ShareResult<()> {
    let clipboard = web_sys::window()
        .ok_or_else(|| AppError::Clipboard("window unavailable".to_string()))?
        .navigator()
        .clipboard();

    let entries = js_sys::Object::new();
    js_sys::Reflect::set(
        &entries,
        &JsValue::from_str("image/png"),
        &js_sys::Promise::resolve(&image.blob),
    )
    .map_err(|_| AppError::Clipboard("clipboard item assembly failed".to_string()))?;
    let item = web_sys::ClipboardItem::new_with_record_from_str_to_blob_promise(&entries)
        .map_err(|e| AppError::Clipboard(format!("{e:?}")))?;

    let payload = js_sys::Array::of1(&item);
    wasm_bindgen_futures::JsFuture::from(clipboard.write(&payload))
        .await
        .map(|_| ())
        .map_err(|e| AppError::Clipboard(format!("{e:?}")))
}

/// Load the tiling asset; failure is non-fatal and resolves to
/// `Unavailable` instead of blocking the composition.
pub async fn load_pattern(src: &str) -> PatternAsset {
    let Ok(img) = HtmlImageElement::new() else {
        return PatternAsset::Unavailable;
    };

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let tx = Rc::clone(&tx);
        Closure::once(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        })
    };
    let on_error = {
        let tx = Rc::clone(&tx);
        Closure::once(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(false);
            }
        })
    };

    img.set_onload(Some(on_load.as_ref().unchecked_ref()));
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    img.set_src(src);

    let loaded = rx.await.unwrap_or(false);
    img.set_onload(None);
    img.set_onerror(None);

    if loaded { PatternAsset::Available(img) } else { PatternAsset::Unavailable }
}

fn new_square_canvas(document: &Document, size: u32) -> ShareResult<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| AppError::Dom("canvas creation failed".to_string()))?
        .dyn_into()
        .map_err(|_| AppError::Dom("canvas cast failed".to_string()))?;
    canvas.set_width(size);
    canvas.set_height(size);

    let ctx = canvas
        .get_context("2d")
        .map_err(|_| AppError::Dom("2d context unavailable".to_string()))?
        .ok_or_else(|| AppError::Dom("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| AppError::Dom("2d context cast failed".to_string()))?;

    Ok((canvas, ctx))
}

/// `roundRect` traced by hand so the path is available for fill, stroke
/// and clip alike.
fn trace_rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
    ctx.begin_path();
    ctx.move_to(x + r, y);
    let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
    let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
    let _ = ctx.arc_to(x, y + h, x, y, r);
    let _ = ctx.arc_to(x, y, x + w, y, r);
    ctx.close_path();
}

async fn canvas_to_blob(canvas: &HtmlCanvasElement) -> ShareResult<Blob> {
    let (tx, rx) = oneshot::channel::<Option<Blob>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let callback = Closure::once(move |value: JsValue| {
        let blob = value.dyn_into::<Blob>().ok();
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(blob);
        }
    });

    canvas
        .to_blob(callback.as_ref().unchecked_ref())
        .map_err(|_| AppError::Dom("canvas serialization failed".to_string()))?;

    match rx.await {
        Ok(Some(blob)) => Ok(blob),
        _ => Err(AppError::Dom("canvas produced no blob".to_string())),
    }
}
