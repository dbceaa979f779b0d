use clubsport::pages::LoadState;
use clubsport::pages::profile::{self, ProfileView};
use clubsport::shared::Achievement;
use clubsport::shared::date::format_fr;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::layout::{EmptyState, Loading, PageShell};
use crate::toast::use_toaster;

fn badge(a: Achievement) -> impl IntoView {
    view! {
        <div class="card bg-base-200">
            <div class="card-body items-center text-center p-4">
                <span class="text-4xl">{a.icone}</span>
                <h3 class="font-bold">{a.nom}</h3>
                <p class="text-sm text-base-content/70">{a.description}</p>
                {a.date_obtenu.map(|d| view! {
                    <p class="text-xs text-base-content/50">{format!("Obtenu le {}", format_fr(&d))}</p>
                })}
            </div>
        </div>
    }
}

fn profile_card(p: ProfileView) -> impl IntoView {
    let licence_class = if p.user.est_licencie {
        "badge badge-success"
    } else {
        "badge badge-warning"
    };
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title text-2xl">"👤 " {p.full_name}</h2>
                <p class="text-base-content/70">{p.user.email}</p>
                <div class="flex flex-wrap gap-2">
                    <span class="badge badge-primary">{p.role_label}</span>
                    <span class="badge badge-outline">{p.licence_label}</span>
                    <span class=licence_class>{p.licence_status}</span>
                </div>
                {p.member_since.map(|d| view! { <p class="text-sm">{format!("Membre depuis le {}", d)}</p> })}
            </div>
        </div>
        <div class="stats stats-vertical md:stats-horizontal shadow w-full">
            <div class="stat">
                <div class="stat-title">"Points"</div>
                <div class="stat-value text-primary">{p.points}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Participations"</div>
                <div class="stat-value">{p.participations}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Badges"</div>
                <div class="stat-value">{p.badges}</div>
            </div>
        </div>
        <section class="space-y-4">
            <h2 class="text-2xl font-bold">"🎖️ Mes badges"</h2>
            {if p.user.achievements.is_empty() {
                view! { <EmptyState message="Aucun badge pour le moment" /> }.into_any()
            } else {
                view! {
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        {p.user.achievements.into_iter().map(badge).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let view_state = RwSignal::new(LoadState::<ProfileView>::Loading);

    Effect::new(move |_| {
        let session = auth.session();
        spawn_local(async move {
            let (state, notice) = profile::load(&auth.api(), &session).await;
            view_state.set(state);
            toaster.maybe(notice);
        });
    });

    view! {
        <PageShell title="Mon profil">
            {move || match view_state.get() {
                LoadState::Loading => view! { <Loading /> }.into_any(),
                LoadState::Ready(p) => profile_card(p).into_any(),
                LoadState::Failed => view! { <EmptyState message="Profil indisponible" /> }.into_any(),
            }}
        </PageShell>
    }
}
