//! Session owner of the application
//!
//! Holds the session store and the API gateway. The router only sees the
//! derived [`Viewer`] signal, so navigation never depends on the store itself.

use clubsport::pages::{Notice, auth};
use clubsport::shared::AuthResponse;
use clubsport::{ClientConfig, ClubApi, Session, SessionStore, Viewer, bootstrap};
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web::{BrowserStorage, FetchClient};

pub type Api = ClubApi<FetchClient>;

/// Backend URL fixed at build time; unset or blank falls back to the local backend.
const BUILD_BACKEND_URL: Option<&str> = option_env!("CLUBSPORT_BACKEND_URL");

#[derive(Clone, Copy)]
pub struct AuthContext {
    store: RwSignal<SessionStore<BrowserStorage>>,
    api: StoredValue<Api>,
    /// True until the stored session has been restored and refreshed
    loading: RwSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        let config = ClientConfig::with_base_url(BUILD_BACKEND_URL);
        let store = SessionStore::new(BrowserStorage, config.session_key.clone());
        Self {
            store: RwSignal::new(store),
            api: StoredValue::new(ClubApi::new(FetchClient, config)),
            loading: RwSignal::new(true),
        }
    }

    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    /// Current session, tracked.
    pub fn session(&self) -> Session {
        self.store.with(|s| s.session().clone())
    }

    pub fn session_untracked(&self) -> Session {
        self.store.with_untracked(|s| s.session().clone())
    }

    pub fn viewer_signal(&self) -> Signal<Viewer> {
        let store = self.store;
        Signal::derive(move || store.with(|s| Viewer::from(s.session())))
    }

    pub fn ready_signal(&self) -> Signal<bool> {
        let loading = self.loading;
        Signal::derive(move || !loading.get())
    }

    pub fn open_session(&self, response: AuthResponse) {
        self.store.update(|s| auth::open_session(s, response));
    }

    pub fn enter_as_guest(&self) -> Notice {
        self.store
            .try_update(auth::enter_as_guest)
            .unwrap_or_else(|| Notice::success(auth::GUEST_OK))
    }

    /// Navigation follows through the router's session effect.
    pub fn logout(&self) {
        self.store.update(|s| s.logout());
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Runs the start-up sequence, then releases the loading screen.
pub fn init_auth(ctx: &AuthContext) {
    let ctx = *ctx;
    spawn_local(async move {
        let api = ctx.api();
        let mut store = SessionStore::new(BrowserStorage, api.config().session_key.clone());
        let report = bootstrap(&api, &mut store).await;
        logging::log!(
            "[Auth] boot: seeded={} restored={} refresh={:?}",
            report.seeded,
            report.session_restored,
            report.refresh
        );
        ctx.store.set(store);
        ctx.loading.set(false);
    });
}
