use clubsport::pages::LoadState;
use clubsport::pages::matches::{self, MatchBoard};
use clubsport::shared::Match;
use clubsport::shared::date::format_fr;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::layout::{EmptyState, Loading, PageShell};
use crate::toast::use_toaster;

fn match_row(m: Match) -> impl IntoView {
    let played = m.is_played();
    let score = m.score_line();
    let score_class = if played {
        "text-2xl font-bold text-primary"
    } else {
        "text-xl text-base-content/50"
    };
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body py-4">
                <div class="grid grid-cols-3 items-center text-center">
                    <span class="font-semibold">{m.equipe_a}</span>
                    <span class=score_class>{score}</span>
                    <span class="font-semibold">{m.equipe_b}</span>
                </div>
                <div class="flex justify-center gap-4 text-sm text-base-content/70">
                    <span>"📅 " {format_fr(&m.date)}</span>
                    <span>"🕐 " {m.heure}</span>
                    <span>"📍 " {m.lieu}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Section(title: &'static str, matches: Vec<Match>) -> impl IntoView {
    view! {
        <section class="space-y-4">
            <h2 class="text-2xl font-bold">{title}</h2>
            {if matches.is_empty() {
                view! { <EmptyState message="Aucun match" /> }.into_any()
            } else {
                matches.into_iter().map(match_row).collect_view().into_any()
            }}
        </section>
    }
}

#[component]
pub fn MatchesPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let board = RwSignal::new(LoadState::<MatchBoard>::Loading);

    Effect::new(move |_| {
        let session = auth.session();
        spawn_local(async move {
            let (state, notice) = matches::load(&auth.api(), &session).await;
            board.set(state);
            toaster.maybe(notice);
        });
    });

    view! {
        <PageShell title="Matchs">
            {move || match board.get() {
                LoadState::Loading => view! { <Loading /> }.into_any(),
                LoadState::Ready(b) if !b.is_empty() => view! {
                    <Section title="🔜 À venir" matches=b.upcoming />
                    <Section title="✅ Résultats" matches=b.played />
                }
                .into_any(),
                _ => view! { <EmptyState message="Aucun match programmé" /> }.into_any(),
            }}
        </PageShell>
    }
}
