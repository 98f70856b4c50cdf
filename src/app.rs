use leptos::*;
use std::rc::Rc;
use wasm_bindgen::JsCast;

use crate::{
    application::PriceBoard,
    domain::{
        logging::{LogComponent, get_logger, get_time_provider},
        share_card::{COPY_FAILURE_NOTICE, share_filename},
        theme::ThemePreference,
    },
    event_utils::{EventOptions, window_event_listener_with_options},
    global_state::{share_menu_open, theme_signal},
    infrastructure::{
        dom::{DomDisplaySink, alert, apply_theme},
        http::{PriceFeedClient, PriceFeedConfig},
        rendering::{GlowLoop, ShareCardRenderer, share_image},
    },
    time_utils::iso_date,
};

/// 🦀 The whole single-page widget: themed card, share menu, glow.
#[component]
pub fn App() -> impl IntoView {
    // Theme before first paint, so the page never flashes the wrong mode
    let preference = ThemePreference::new(crate::infrastructure::storage::LocalStoragePreferences::new());
    let initial_theme = preference.load();
    apply_theme(initial_theme);
    theme_signal().set(initial_theme);

    // Cursor glow: pointer feeds the target, the frame loop lags behind it
    let glow = GlowLoop::new();
    glow.start();
    {
        let glow = Rc::clone(&glow);
        window_event_listener_with_options(ev::mousemove, &EventOptions::default(), move |e: web_sys::MouseEvent| {
            glow.set_target(e.client_x() as f64, e.client_y() as f64);
        })
        .forget();
    }

    // Clicking anywhere outside the share menu dismisses its dropdown
    window_event_listener_with_options(ev::click, &EventOptions::default(), move |e: web_sys::MouseEvent| {
        if !share_menu_open().get_untracked() {
            return;
        }
        let target = e.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let contains = |id: &str| {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id))
                .map(|el| el.contains(target.as_ref()))
                .unwrap_or(false)
        };
        if !contains("share-dropdown") && !contains("share-toggle") {
            share_menu_open().set(false);
        }
    })
    .forget();

    // One fetch per page session; failure leaves the loading slot showing
    // the error text and never reveals partial numbers
    spawn_local(async move {
        let client = PriceFeedClient::new(PriceFeedConfig::remote());
        let sink = DomDisplaySink::new();
        let board = PriceBoard::new(&sink);
        match client.fetch_quote().await {
            Ok(record) => {
                board.render(&record);
            }
            Err(e) => board.render_error(&e.to_string()),
        }
    });

    view! {
        <style>{APP_CSS}</style>
        <div class="glow-overlay"></div>
        <div class="mahr-app">
            <TopBar />
            <PriceCard />
        </div>
    }
}

/// Header with the theme switch and the share menu.
#[component]
fn TopBar() -> impl IntoView {
    let (copy_done, set_copy_done) = create_signal(false);

    let on_theme_toggle = move |_: web_sys::MouseEvent| {
        let preference =
            ThemePreference::new(crate::infrastructure::storage::LocalStoragePreferences::new());
        let next = preference.toggle(theme_signal().get_untracked());
        apply_theme(next);
        theme_signal().set(next);

        get_logger().info(LogComponent::Presentation("TopBar"), &format!("🎨 Theme switched to {}", next));
    };

    let on_share_toggle = move |e: web_sys::MouseEvent| {
        e.stop_propagation();
        share_menu_open().update(|open| *open = !*open);
    };

    let on_download = move |_: web_sys::MouseEvent| {
        share_menu_open().set(false);
        spawn_local(async move {
            let sink = DomDisplaySink::new();
            match ShareCardRenderer::new().generate(&sink, theme_signal().get_untracked()).await {
                Ok(image) => {
                    let today = iso_date(get_time_provider().current_timestamp() / 1000);
                    if let Err(e) = share_image::download(&image, &share_filename(&today)) {
                        get_logger().error(LogComponent::Presentation("Share"), &format!("❌ Download failed: {}", e));
                    }
                }
                Err(e) => get_logger().error(LogComponent::Presentation("Share"), &format!("❌ Card composition failed: {}", e)),
            }
        });
    };

    let on_copy = move |_: web_sys::MouseEvent| {
        share_menu_open().set(false);
        spawn_local(async move {
            let sink = DomDisplaySink::new();
            match ShareCardRenderer::new().generate(&sink, theme_signal().get_untracked()).await {
                Ok(image) => match share_image::copy_to_clipboard(&image).await {
                    Ok(()) => {
                        set_copy_done.set(true);
                        gloo_timers::future::TimeoutFuture::new(2_000).await;
                        set_copy_done.set(false);
                    }
                    Err(e) => {
                        get_logger().error(LogComponent::Presentation("Share"), &format!("❌ Clipboard write failed: {}", e));
                        alert(COPY_FAILURE_NOTICE);
                    }
                },
                Err(e) => get_logger().error(LogComponent::Presentation("Share"), &format!("❌ Card composition failed: {}", e)),
            }
        });
    };

    view! {
        <header class="top-bar">
            <h1 class="brand">"মহরে ফাতেমি ক্যালকুলেটর"</h1>
            <div class="actions">
                <div class="share-menu">
                    <button id="share-toggle" class="icon-btn" title="শেয়ার করুন" on:click=on_share_toggle>
                        "📤"
                    </button>
                    <div id="share-dropdown" class="dropdown" class:hidden=move || !share_menu_open().get()>
                        <button id="btn-download" class="dropdown-btn" on:click=on_download>
                            "⬇ ডাউনলোড করুন"
                        </button>
                        <button id="btn-copy" class="dropdown-btn" on:click=on_copy>
                            {move || if copy_done.get() { "✔ কপি হয়েছে" } else { "⧉ কপি করুন" }}
                        </button>
                    </div>
                </div>
                <button id="theme-toggle" class="icon-btn" title="Toggle theme" on:click=on_theme_toggle>
                    {move || if theme_signal().get().is_dark() { "☀" } else { "☾" }}
                </button>
            </div>
        </header>
    }
}

/// The display regions the price board writes into. Content and
/// visibility of the slots are owned by `PriceBoard`, not by signals.
#[component]
fn PriceCard() -> impl IntoView {
    view! {
        <main class="price-card">
            <h2 class="card-title">"আজকের মহরে ফাতেমি"</h2>
            <div id="loading-price" class="loading">"লোড হচ্ছে..."</div>
            <div id="price-display" class="price-value hidden"></div>
            <div class="min-mahr">
                <span>"সর্বনিম্ন মহর: "</span>
                <span id="min-mahr-display"></span>
            </div>
            <div id="per-gram-container" class="per-gram hidden">
                <span>"রুপা প্রতি গ্রাম: ৳ "</span>
                <span id="per-gram-display"></span>
            </div>
            <div id="last-updated" class="last-updated"></div>
        </main>
    }
}

const APP_CSS: &str = r#"
:root {
    --bg: #F8F9FA;
    --text: #0F5132;
    --subtle: #6B7280;
    --accent: #D4AF37;
    --card-bg: #FFFFFF;
    --card-border: rgba(15, 81, 50, 0.1);
}

html.dark {
    --bg: #121212;
    --text: #FFFFFF;
    --subtle: #9CA3AF;
    --card-bg: #1E1E1E;
    --card-border: rgba(255, 255, 255, 0.1);
}

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg);
    color: var(--text);
    font-family: 'Tiro Bangla', serif;
}

.glow-overlay {
    position: fixed;
    inset: 0;
    pointer-events: none;
    background: radial-gradient(
        600px at var(--mouse-x, 50%) var(--mouse-y, 50%),
        rgba(212, 175, 55, 0.12),
        transparent 80%
    );
}

.hidden {
    display: none;
}

.mahr-app {
    max-width: 640px;
    margin: 0 auto;
    padding: 24px;
}

.top-bar {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.brand {
    font-size: 22px;
}

.actions {
    display: flex;
    gap: 8px;
    align-items: center;
}

.icon-btn {
    background: var(--card-bg);
    color: var(--text);
    border: 1px solid var(--card-border);
    border-radius: 10px;
    padding: 8px 12px;
    font-size: 16px;
    cursor: pointer;
}

.share-menu {
    position: relative;
}

.dropdown {
    position: absolute;
    right: 0;
    top: 110%;
    display: flex;
    flex-direction: column;
    min-width: 180px;
    background: var(--card-bg);
    border: 1px solid var(--card-border);
    border-radius: 12px;
    overflow: hidden;
    z-index: 10;
}

.dropdown-btn {
    background: none;
    border: none;
    color: var(--text);
    padding: 12px 16px;
    text-align: left;
    font-family: inherit;
    font-size: 15px;
    cursor: pointer;
}

.dropdown-btn:hover {
    background: rgba(212, 175, 55, 0.12);
}

.price-card {
    margin-top: 40px;
    background: var(--card-bg);
    border: 1px solid var(--card-border);
    border-radius: 24px;
    padding: 40px;
    text-align: center;
}

.card-title {
    font-size: 26px;
    margin: 0 0 16px;
}

.loading {
    font-size: 20px;
    color: var(--subtle);
}

.price-value {
    font-size: 44px;
    font-weight: 700;
    color: var(--accent);
}

.min-mahr {
    margin-top: 16px;
    color: var(--subtle);
}

.per-gram {
    margin-top: 8px;
    color: var(--subtle);
}

.last-updated {
    margin-top: 24px;
    font-size: 14px;
    color: var(--subtle);
}
"#;
