//! Club site frontend (Leptos CSR)
//!
//! - `auth`: session owner, bootstrap, API gateway
//! - `web::router`: History router guarded by `clubsport::guard`
//! - `toast`: transient notifications
//! - `components`: pages and layout

mod auth;
mod components {
    pub mod admin;
    pub mod dashboard;
    pub mod layout;
    pub mod login;
    pub mod matches;
    pub mod navbar;
    pub mod news;
    pub mod profile;
    pub mod rankings;
    pub mod referent;
    pub mod reset_password;
    pub mod tournaments;
    pub mod training;
}
mod toast;

use clubsport::AppRoute;
use leptos::prelude::*;

use crate::auth::{AuthContext, init_auth};
use crate::components::admin::AdminPage;
use crate::components::dashboard::DashboardPage;
use crate::components::layout::NotFoundPage;
use crate::components::login::LoginPage;
use crate::components::matches::MatchesPage;
use crate::components::news::NewsPage;
use crate::components::profile::ProfilePage;
use crate::components::rankings::RankingsPage;
use crate::components::referent::ReferentPage;
use crate::components::reset_password::ResetPasswordPage;
use crate::components::tournaments::TournamentsPage;
use crate::components::training::TrainingPage;
use crate::toast::{ToastHost, provide_toaster};

// Browser adapters of the core traits
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;

    pub use http::FetchClient;
    pub use storage::BrowserStorage;
}

use web::router::{Router, RouterOutlet};

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::ResetPassword => view! { <ResetPasswordPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Tournaments => view! { <TournamentsPage /> }.into_any(),
        AppRoute::Matches => view! { <MatchesPage /> }.into_any(),
        AppRoute::Rankings => view! { <RankingsPage /> }.into_any(),
        AppRoute::Training => view! { <TrainingPage /> }.into_any(),
        AppRoute::News => view! { <NewsPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::Admin => view! { <AdminPage /> }.into_any(),
        AppRoute::Referent => view! { <ReferentPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

fn boot_screen() -> AnyView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-base-200">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <span class="ml-4 text-xl">"Chargement..."</span>
        </div>
    }
    .into_any()
}

#[component]
pub fn App() -> impl IntoView {
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    provide_toaster();

    // seed data, stored session, profile refresh
    init_auth(&auth_ctx);

    view! {
        <ToastHost />
        <Router viewer=auth_ctx.viewer_signal() ready=auth_ctx.ready_signal()>
            <RouterOutlet matcher=route_matcher loading=boot_screen />
        </Router>
    }
}
