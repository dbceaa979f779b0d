use clubsport::pages::admin::{create_match, create_news, create_tournament};
use clubsport::pages::{ActionResult, LoadState, Notice, tournaments, training};
use clubsport::shared::date::{FRENCH_WEEKDAYS, parse_hour};
use clubsport::shared::{
    CreateMatch, CreateNews, CreateTournament, DEFAULT_MATCH_VENUE, DEFAULT_MAX_PARTICIPANTS,
    LicenceRequirement, Tournament, TrainingSession, TrainingSessionInput,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::layout::{EmptyState, Loading, PageShell, TextField};
use crate::toast::{Toaster, use_toaster};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Tournament,
    Match,
    News,
    Training,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Tournament, Tab::Match, Tab::News, Tab::Training];

    fn label(self) -> &'static str {
        match self {
            Tab::Tournament => "🏆 Tournoi",
            Tab::Match => "🏐 Match",
            Tab::News => "📰 Actualité",
            Tab::Training => "💪 Entraînements",
        }
    }
}

/// Toasts the outcome of a form action; returns whether it succeeded.
fn report(toaster: Toaster, result: ActionResult<Notice>) -> bool {
    match result {
        Ok(notice) => {
            toaster.show(notice);
            true
        }
        Err(e) => {
            toaster.action_error(&e);
            false
        }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let tab = RwSignal::new(Tab::Tournament);

    view! {
        <PageShell title="Administration">
            <div role="tablist" class="tabs tabs-boxed">
                {Tab::ALL
                    .into_iter()
                    .map(|t| view! {
                        <a
                            role="tab"
                            class=move || if tab.get() == t { "tab tab-active" } else { "tab" }
                            on:click=move |_| tab.set(t)
                        >
                            {t.label()}
                        </a>
                    })
                    .collect_view()}
            </div>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    {move || match tab.get() {
                        Tab::Tournament => view! { <TournamentForm /> }.into_any(),
                        Tab::Match => view! { <MatchForm /> }.into_any(),
                        Tab::News => view! { <NewsForm /> }.into_any(),
                        Tab::Training => view! { <TrainingAdmin /> }.into_any(),
                    }}
                </div>
            </div>
        </PageShell>
    }
}

#[component]
fn TournamentForm() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let nom = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let date_debut = RwSignal::new(String::new());
    let date_fin = RwSignal::new(String::new());
    let max = RwSignal::new(DEFAULT_MAX_PARTICIPANTS.to_string());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = CreateTournament {
            nom: nom.get_untracked(),
            description: description.get_untracked(),
            date_debut: date_debut.get_untracked(),
            date_fin: date_fin.get_untracked(),
            // unparsable counts fail validation as zero
            max_participants: max.get_untracked().trim().parse().unwrap_or(0),
        };
        let session = auth.session_untracked();
        spawn_local(async move {
            if report(toaster, create_tournament(&auth.api(), &session, &form).await) {
                for field in [nom, description, date_debut, date_fin] {
                    field.set(String::new());
                }
                max.set(DEFAULT_MAX_PARTICIPANTS.to_string());
            }
        });
    };

    view! {
        <form class="space-y-2" on:submit=on_submit>
            <TextField label="Nom du tournoi" value=nom />
            <TextField label="Description" value=description />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-2">
                <TextField label="Début" value=date_debut kind="date" />
                <TextField label="Fin" value=date_fin kind="date" />
                <TextField label="Participants max" value=max kind="number" />
            </div>
            <button class="btn btn-primary">"Créer le tournoi"</button>
        </form>
    }
}

#[component]
fn MatchForm() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let tournament_list = RwSignal::new(LoadState::<Vec<Tournament>>::Loading);
    let tournament_id = RwSignal::new(String::new());
    let equipe_a = RwSignal::new(String::new());
    let equipe_b = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let heure = RwSignal::new(String::new());
    let lieu = RwSignal::new(DEFAULT_MATCH_VENUE.to_string());

    Effect::new(move |_| {
        let session = auth.session();
        spawn_local(async move {
            let (state, notice) = tournaments::load(&auth.api(), &session).await;
            tournament_list.set(state);
            toaster.maybe(notice);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = CreateMatch {
            tournament_id: Some(tournament_id.get_untracked()),
            equipe_a: equipe_a.get_untracked(),
            equipe_b: equipe_b.get_untracked(),
            date: date.get_untracked(),
            heure: heure.get_untracked(),
            lieu: lieu.get_untracked(),
        };
        let session = auth.session_untracked();
        spawn_local(async move {
            if report(toaster, create_match(&auth.api(), &session, &form).await) {
                for field in [tournament_id, equipe_a, equipe_b, date, heure] {
                    field.set(String::new());
                }
                lieu.set(DEFAULT_MATCH_VENUE.to_string());
            }
        });
    };

    view! {
        <form class="space-y-2" on:submit=on_submit>
            <label class="form-control w-full">
                <div class="label">
                    <span class="label-text">"Tournoi"</span>
                </div>
                <select
                    class="select select-bordered"
                    prop:value=move || tournament_id.get()
                    on:change=move |ev| tournament_id.set(event_target_value(&ev))
                >
                    <option value="">"Match amical"</option>
                    {move || tournament_list.with(|state| {
                        state
                            .items()
                            .iter()
                            .map(|t| view! { <option value=t.id.clone()>{t.nom.clone()}</option> })
                            .collect_view()
                    })}
                </select>
            </label>
            <div class="grid grid-cols-2 gap-2">
                <TextField label="Équipe A" value=equipe_a />
                <TextField label="Équipe B" value=equipe_b />
                <TextField label="Date" value=date kind="date" />
                <TextField label="Heure" value=heure kind="time" />
            </div>
            <TextField label="Lieu" value=lieu />
            <button class="btn btn-primary">"Créer le match"</button>
        </form>
    }
}

#[component]
fn NewsForm() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let titre = RwSignal::new(String::new());
    let contenu = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = CreateNews {
            titre: titre.get_untracked(),
            contenu: contenu.get_untracked(),
            image_url: Some(image_url.get_untracked()),
        };
        let session = auth.session_untracked();
        spawn_local(async move {
            if report(toaster, create_news(&auth.api(), &session, &form).await) {
                for field in [titre, contenu, image_url] {
                    field.set(String::new());
                }
            }
        });
    };

    view! {
        <form class="space-y-2" on:submit=on_submit>
            <TextField label="Titre" value=titre />
            <label class="form-control w-full">
                <div class="label">
                    <span class="label-text">"Contenu"</span>
                </div>
                <textarea
                    class="textarea textarea-bordered h-40"
                    prop:value=move || contenu.get()
                    on:input=move |ev| contenu.set(event_target_value(&ev))
                ></textarea>
            </label>
            <TextField label="Image (URL, optionnelle)" value=image_url kind="url" />
            <button class="btn btn-primary">"Publier"</button>
        </form>
    }
}

/// Training schedule editor: one form for create and update, a row list
/// with edit and delete.
#[component]
fn TrainingAdmin() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let sessions = RwSignal::new(LoadState::<Vec<TrainingSession>>::Loading);
    let editing = RwSignal::new(Option::<String>::None);

    let jour = RwSignal::new(FRENCH_WEEKDAYS[0].to_string());
    let heure_debut = RwSignal::new(String::new());
    let heure_fin = RwSignal::new(String::new());
    let kind = RwSignal::new(String::new());
    let licence = RwSignal::new(LicenceRequirement::Tous);
    let description = RwSignal::new(String::new());

    let reset = move || {
        editing.set(None);
        jour.set(FRENCH_WEEKDAYS[0].to_string());
        for field in [heure_debut, heure_fin, kind, description] {
            field.set(String::new());
        }
        licence.set(LicenceRequirement::Tous);
    };

    let reload = move || {
        let session = auth.session_untracked();
        spawn_local(async move {
            let (state, notice) = training::load(&auth.api(), &session).await;
            sessions.set(state);
            toaster.maybe(notice);
        });
    };

    Effect::new(move |_| {
        auth.session();
        reload();
    });

    // time inputs only show zero-padded HH:MM
    let padded = |hour: String| match parse_hour(&hour) {
        Some(t) => t.format("%H:%M").to_string(),
        None => hour,
    };

    let edit = move |s: &TrainingSession| {
        let input = TrainingSessionInput::from(s);
        editing.set(Some(s.id.clone()));
        jour.set(input.jour);
        heure_debut.set(padded(input.heure_debut));
        heure_fin.set(padded(input.heure_fin));
        kind.set(input.kind);
        licence.set(input.licence_requise);
        description.set(input.description);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = TrainingSessionInput {
            jour: jour.get_untracked(),
            heure_debut: heure_debut.get_untracked(),
            heure_fin: heure_fin.get_untracked(),
            kind: kind.get_untracked(),
            licence_requise: licence.get_untracked(),
            description: description.get_untracked(),
        };
        let target = editing.get_untracked();
        let session = auth.session_untracked();
        spawn_local(async move {
            let api = auth.api();
            let result = match target {
                Some(id) => training::update(&api, &session, &id, input).await,
                None => training::create(&api, &session, input).await,
            };
            if report(toaster, result) {
                reset();
                reload();
            }
        });
    };

    let on_delete = move |id: String| {
        let session = auth.session_untracked();
        spawn_local(async move {
            if report(toaster, training::delete(&auth.api(), &session, &id).await) {
                if editing.get_untracked().as_deref() == Some(id.as_str()) {
                    reset();
                }
                reload();
            }
        });
    };

    let row = move |s: &TrainingSession| {
        let session = s.clone();
        let id = s.id.clone();
        view! {
            <tr>
                <td>{s.jour.clone()}</td>
                <td class="font-mono">{format!("{} - {}", s.heure_debut, s.heure_fin)}</td>
                <td>{s.kind.clone()}</td>
                <td>{s.licence_requise.label()}</td>
                <td class="flex gap-2 justify-end">
                    <button class="btn btn-sm btn-outline" on:click=move |_| edit(&session)>"✏️"</button>
                    <button class="btn btn-sm btn-error btn-outline" on:click=move |_| on_delete(id.clone())>
                        "🗑️"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <form class="space-y-2" on:submit=on_submit>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-2">
                <label class="form-control w-full">
                    <div class="label">
                        <span class="label-text">"Jour"</span>
                    </div>
                    <select
                        class="select select-bordered"
                        prop:value=move || jour.get()
                        on:change=move |ev| jour.set(event_target_value(&ev))
                    >
                        {FRENCH_WEEKDAYS
                            .iter()
                            .map(|d| view! { <option value=*d>{*d}</option> })
                            .collect_view()}
                    </select>
                </label>
                <TextField label="Début" value=heure_debut kind="time" />
                <TextField label="Fin" value=heure_fin kind="time" />
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-2">
                <TextField label="Type de séance" value=kind placeholder="Entraînement compétition" />
                <label class="form-control w-full">
                    <div class="label">
                        <span class="label-text">"Licence requise"</span>
                    </div>
                    <select
                        class="select select-bordered"
                        on:change=move |ev| {
                            licence.set(if event_target_value(&ev) == "competition" {
                                LicenceRequirement::Competition
                            } else {
                                LicenceRequirement::Tous
                            })
                        }
                    >
                        <option value="tous" selected=move || licence.get() == LicenceRequirement::Tous>
                            {LicenceRequirement::Tous.label()}
                        </option>
                        <option value="competition" selected=move || licence.get() == LicenceRequirement::Competition>
                            {LicenceRequirement::Competition.label()}
                        </option>
                    </select>
                </label>
            </div>
            <TextField label="Description" value=description />
            <div class="flex gap-2">
                <button class="btn btn-primary">
                    {move || if editing.get().is_some() { "Enregistrer" } else { "Ajouter la séance" }}
                </button>
                <Show when=move || editing.get().is_some()>
                    <button type="button" class="btn btn-ghost" on:click=move |_| reset()>"Annuler"</button>
                </Show>
            </div>
        </form>

        <div class="divider"></div>
        {move || sessions.with(|state| match state {
            LoadState::Loading => view! { <Loading /> }.into_any(),
            _ if state.items().is_empty() => {
                view! { <EmptyState message="Aucune séance planifiée" /> }.into_any()
            }
            _ => view! {
                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Jour"</th>
                                <th>"Horaire"</th>
                                <th>"Type"</th>
                                <th>"Licence"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>{state.items().iter().map(row).collect_view()}</tbody>
                    </table>
                </div>
            }
            .into_any(),
        })}
    }
}
