use clubsport::{AppRoute, nav_links};
use leptos::prelude::*;

use crate::auth::use_auth;
use crate::web::router::{Link, use_router};

fn emoji(route: AppRoute) -> &'static str {
    match route {
        AppRoute::Dashboard => "🏠",
        AppRoute::Tournaments => "🏆",
        AppRoute::Matches => "🏐",
        AppRoute::Rankings => "📊",
        AppRoute::Training => "💪",
        AppRoute::News => "📰",
        AppRoute::Referent => "🔐",
        AppRoute::Admin => "⚙️",
        AppRoute::Profile => "👤",
        _ => "",
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let viewer = auth.viewer_signal();

    let who = move || {
        let session = auth.session();
        if session.is_guest() {
            "Visiteur".to_string()
        } else {
            session.user().map(|u| u.full_name()).unwrap_or_default()
        }
    };

    view! {
        <nav class="navbar bg-base-100 shadow-lg px-4">
            <div class="flex-1 gap-2">
                <Link route=AppRoute::Dashboard class="btn btn-ghost text-xl">
                    "🏐 TCS Volley"
                </Link>
                <ul class="menu menu-horizontal hidden lg:flex">
                    {move || {
                        let current = router.current_route().get();
                        nav_links(viewer.get())
                            .into_iter()
                            .map(|route| {
                                let class = if route == current { "active" } else { "" };
                                view! {
                                    <li>
                                        <Link route=route class=class.to_string()>
                                            <span>{emoji(route)}</span>
                                            <span>{route.title()}</span>
                                        </Link>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
            <div class="flex-none gap-2">
                <span class="badge badge-neutral hidden md:inline-flex">{who}</span>
                <button class="btn btn-outline btn-error btn-sm" on:click=move |_| auth.logout()>
                    "👋 Déconnexion"
                </button>
            </div>
        </nav>
    }
}
