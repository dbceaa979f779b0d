use clubsport::AppRoute;
use clubsport::pages::LoadState;
use clubsport::pages::dashboard::{self, DashboardStats};
use clubsport::shared::date::today;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::layout::{EmptyState, Loading, PageShell};
use crate::toast::use_toaster;
use crate::web::router::Link;

#[component]
fn StatCard(emoji: &'static str, title: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat bg-base-100 shadow rounded-box">
            <div class="stat-figure text-3xl">{emoji}</div>
            <div class="stat-title">{title}</div>
            <div class="stat-value text-primary">{value}</div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let stats = RwSignal::new(LoadState::<DashboardStats>::Loading);

    Effect::new(move |_| {
        let session = auth.session();
        stats.set(LoadState::Loading);
        spawn_local(async move {
            let (state, notice) = dashboard::load(&auth.api(), &session, today()).await;
            stats.set(state);
            toaster.maybe(notice);
        });
    });

    let greeting = move || {
        auth.session()
            .user()
            .map(|u| format!("Bonjour {} 👋", u.prenom))
            .unwrap_or_else(|| "Bienvenue 👋".to_string())
    };

    view! {
        <PageShell title="Tableau de bord">
            <p class="text-xl">{greeting}</p>
            {move || match stats.get() {
                LoadState::Loading => view! { <Loading /> }.into_any(),
                LoadState::Failed => {
                    view! { <EmptyState message="Statistiques indisponibles" /> }.into_any()
                }
                LoadState::Ready(s) => view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                        <StatCard emoji="🏆" title="Tournois actifs" value=s.active_tournaments.to_string() />
                        <StatCard emoji="🏐" title="Matchs à venir" value=s.upcoming_matches.to_string() />
                        <StatCard emoji="⭐" title="Mes points" value=s.points.to_string() />
                        <StatCard emoji="🎖️" title="Badges" value=s.achievements.to_string() />
                    </div>
                }
                .into_any(),
            }}
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <Link route=AppRoute::Tournaments class="btn btn-primary btn-lg">"🏆 Voir les tournois"</Link>
                <Link route=AppRoute::Matches class="btn btn-secondary btn-lg">"🏐 Calendrier des matchs"</Link>
                <Link route=AppRoute::Training class="btn btn-accent btn-lg">"💪 Entraînements"</Link>
            </div>
        </PageShell>
    }
}
