use clubsport::pages::LoadState;
use clubsport::pages::tournaments::{self, RegistrationState};
use clubsport::shared::date::format_fr;
use clubsport::shared::{Tournament, TournamentStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::layout::{EmptyState, Loading, PageShell};
use crate::toast::use_toaster;

fn status_badge(statut: TournamentStatus) -> &'static str {
    match statut {
        TournamentStatus::Upcoming => "badge badge-info",
        TournamentStatus::InProgress => "badge badge-warning",
        TournamentStatus::Finished => "badge badge-ghost",
    }
}

#[component]
pub fn TournamentsPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let list = RwSignal::new(LoadState::<Vec<Tournament>>::Loading);
    let pending = RwSignal::new(Option::<String>::None);

    let reload = move || {
        let session = auth.session_untracked();
        spawn_local(async move {
            let (state, notice) = tournaments::load(&auth.api(), &session).await;
            list.set(state);
            toaster.maybe(notice);
        });
    };

    Effect::new(move |_| {
        auth.session();
        reload();
    });

    let on_register = move |tournament: Tournament| {
        pending.set(Some(tournament.id.clone()));
        let session = auth.session_untracked();
        spawn_local(async move {
            match tournaments::register(&auth.api(), &session, &tournament).await {
                Ok(notice) => {
                    toaster.show(notice);
                    reload();
                }
                Err(e) => toaster.action_error(&e),
            }
            pending.set(None);
        });
    };

    let card = move |t: Tournament| {
        let state = RegistrationState::of(&t, &auth.session_untracked());
        let id = t.id.clone();
        let button_class = if state.is_actionable() {
            "btn btn-primary"
        } else {
            "btn btn-disabled"
        };
        let dates = format!("{} → {}", format_fr(&t.date_debut), format_fr(&t.date_fin));
        let places = match t.places_left() {
            0 => format!("{}/{} participants, complet", t.participants.len(), t.max_participants),
            left => format!(
                "{}/{} participants, {} place(s) restante(s)",
                t.participants.len(),
                t.max_participants,
                left
            ),
        };
        let progress = t.participants.len() as u32;
        let max = t.max_participants;
        let tournament = t.clone();

        view! {
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <div class="flex justify-between items-start">
                        <h2 class="card-title">{t.nom}</h2>
                        <span class=status_badge(t.statut)>{t.statut.label()}</span>
                    </div>
                    <p class="text-base-content/70">{t.description}</p>
                    <p>"📅 " {dates}</p>
                    <p>"👥 " {places}</p>
                    <progress class="progress progress-primary" value=progress max=max></progress>
                    <div class="card-actions justify-end">
                        <button
                            class=button_class
                            disabled=move || {
                                !state.is_actionable() || pending.get().as_deref() == Some(id.as_str())
                            }
                            on:click=move |_| on_register(tournament.clone())
                        >
                            {state.label()}
                        </button>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <PageShell title="Tournois">
            {move || match list.get() {
                LoadState::Loading => view! { <Loading /> }.into_any(),
                LoadState::Ready(items) if !items.is_empty() => view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {items.into_iter().map(card).collect_view()}
                    </div>
                }
                .into_any(),
                _ => view! { <EmptyState message="Aucun tournoi pour le moment" /> }.into_any(),
            }}
        </PageShell>
    }
}
