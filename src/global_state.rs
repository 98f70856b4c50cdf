use crate::domain::theme::Theme;
use leptos::*;
use once_cell::sync::OnceCell;

/// Reactive state shared across components. Each signal has a single
/// owning component; the struct only centralizes access.
pub struct Globals {
    pub theme: RwSignal<Theme>,
    pub share_menu_open: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        theme: create_rw_signal(Theme::Light),
        share_menu_open: create_rw_signal(false),
    })
}

crate::global_signals! {
    pub theme_signal => theme: crate::domain::theme::Theme,
    pub share_menu_open => share_menu_open: bool,
}
