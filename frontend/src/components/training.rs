use clubsport::pages::LoadState;
use clubsport::pages::training::{self, RESERVED, TrainingDay, can_access, group_by_day};
use clubsport::shared::{LicenceType, TrainingSession};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::layout::{EmptyState, Loading, PageShell};
use crate::toast::use_toaster;

fn slot(s: TrainingSession, licence: Option<LicenceType>) -> impl IntoView {
    let open = can_access(&s, licence);
    let class = if open {
        "card bg-base-100 shadow"
    } else {
        "card bg-base-100 shadow opacity-50"
    };
    view! {
        <div class=class>
            <div class="card-body py-4">
                <div class="flex justify-between items-center">
                    <span class="font-mono font-bold">
                        {format!("{} - {}", s.heure_debut, s.heure_fin)}
                    </span>
                    <span class="badge badge-outline">{s.licence_requise.label()}</span>
                </div>
                <p class="font-semibold">{s.kind}</p>
                <p class="text-sm text-base-content/70">{s.description}</p>
                {(!open).then(|| view! { <p class="text-error text-sm">"🔒 " {RESERVED}</p> })}
            </div>
        </div>
    }
}

fn day_column(day: TrainingDay, licence: Option<LicenceType>) -> impl IntoView {
    view! {
        <section class="space-y-3">
            <h2 class="text-xl font-bold">{day.jour}</h2>
            {day.sessions.into_iter().map(|s| slot(s, licence)).collect_view()}
        </section>
    }
}

#[component]
pub fn TrainingPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let sessions = RwSignal::new(LoadState::<Vec<TrainingSession>>::Loading);

    Effect::new(move |_| {
        let session = auth.session();
        spawn_local(async move {
            let (state, notice) = training::load(&auth.api(), &session).await;
            sessions.set(state);
            toaster.maybe(notice);
        });
    });

    view! {
        <PageShell title="Entraînements">
            {move || {
                let licence = auth.session().licence_type();
                sessions.with(|state| match state {
                    LoadState::Loading => view! { <Loading /> }.into_any(),
                    _ => {
                        let days = group_by_day(state.items());
                        if days.is_empty() {
                            view! { <EmptyState message="Aucun entraînement planifié" /> }.into_any()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                    {days.into_iter().map(|d| day_column(d, licence)).collect_view()}
                                </div>
                            }
                            .into_any()
                        }
                    }
                })
            }}
        </PageShell>
    }
}
