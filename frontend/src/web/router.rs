//! Router service
//!
//! Wraps the History API: every navigation, back/forward step and session
//! change goes through `clubsport::guard` before the outlet renders.

use clubsport::{AppRoute, GuardDecision, Viewer, guard};
use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Value of a query parameter of the current URL (`?token=...`).
pub fn query_param(name: &str) -> Option<String> {
    web_sys::UrlSearchParams::new_with_str(&current_search())
        .ok()?
        .get(name)
        .filter(|v| !v.is_empty())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Resolves `target` for `viewer`, following at most one redirect.
fn resolve(target: AppRoute, viewer: Viewer) -> AppRoute {
    match guard(target, viewer) {
        GuardDecision::Allow => target,
        GuardDecision::Redirect(to) => {
            logging::log!("[Router] {} denied, redirecting to {}", target, to);
            to
        }
    }
}

#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// Guard input, injected by the session owner
    viewer: Signal<Viewer>,
    /// Navigation is held back until the session is restored
    ready: Signal<bool>,
}

impl RouterService {
    fn new(viewer: Signal<Viewer>, ready: Signal<bool>) -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_path()));
        Self {
            current_route,
            set_route,
            viewer,
            ready,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Guarded navigation; a redirect replaces the denied history entry.
    pub fn go(&self, target: AppRoute) {
        let route = resolve(target, self.viewer.get_untracked());
        if route == target {
            push_history_state(route.to_path());
        } else {
            replace_history_state(route.to_path());
        }
        self.set_route.set(route);
    }

    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            let route = resolve(target, router.viewer.get_untracked());
            if route != target {
                replace_history_state(route.to_path());
            }
            router.set_route.set(route);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // the listener lives as long as the page
        closure.forget();
    }

    /// Re-runs the guard on the current route whenever the session changes
    /// (boot finished, login, logout, profile refresh).
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let viewer = self.viewer;
        let ready = self.ready;

        Effect::new(move |_| {
            let viewer = viewer.get();
            if !ready.get() {
                return;
            }
            let route = current_route.get_untracked();
            let resolved = resolve(route, viewer);
            if resolved != route {
                replace_history_state(resolved.to_path());
                set_route.set(resolved);
            }
        });
    }
}

fn provide_router(viewer: Signal<Viewer>, ready: Signal<bool>) -> RouterService {
    let router = RouterService::new(viewer, ready);
    router.init_popstate_listener();
    router.setup_auth_redirect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// Components
// ============================================================================

#[component]
pub fn Router(
    viewer: Signal<Viewer>,
    /// False while the session is being restored
    ready: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(viewer, ready);
    children()
}

/// Renders the current route once the session is ready.
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView, loading: fn() -> AnyView) -> impl IntoView {
    let router = use_router();

    move || {
        if !router.ready.get() {
            return loading();
        }
        matcher(router.current_route().get())
    }
}

/// In-app link: History navigation instead of a page load.
#[component]
pub fn Link(
    route: AppRoute,
    #[prop(into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.go(route);
    };

    view! {
        <a href=route.to_path() class=move || class.get() on:click=on_click>
            {children()}
        </a>
    }
}
