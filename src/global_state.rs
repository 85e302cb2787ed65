use crate::presentation::routes::Route;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub route: RwSignal<Route>,
    pub logs: RwSignal<Vec<String>>,
    pub log_paused: RwSignal<bool>,
    pub log_visible: RwSignal<bool>,
    /// `None` until the first health check finishes
    pub api_online: RwSignal<Option<bool>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        route: create_rw_signal(Route::default()),
        logs: create_rw_signal(Vec::new()),
        log_paused: create_rw_signal(false),
        log_visible: create_rw_signal(false),
        api_online: create_rw_signal(None),
    })
}

crate::global_signals! {
    pub current_route => route: Route,
    pub log_lines => logs: Vec<String>,
    pub log_paused => log_paused: bool,
    pub log_visible => log_visible: bool,
    pub api_online => api_online: Option<bool>,
}

/// Switches page and mirrors it into the location hash
pub fn navigate(route: Route) {
    if let Err(e) = gloo::utils::window().location().set_hash(&route.to_hash()) {
        crate::log_warn!(
            crate::domain::logging::LogComponent::Presentation("Router"),
            "Could not update location hash: {:?}",
            e
        );
    }
    current_route().set(route);
}
