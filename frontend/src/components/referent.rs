use clubsport::pages::referent::{self, DELETE_CONFIRM, MemberStats, search};
use clubsport::pages::{ActionResult, LoadState, Notice};
use clubsport::shared::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::layout::{EmptyState, Loading, PageShell};
use crate::toast::use_toaster;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[derive(Clone, Copy)]
enum MemberAction {
    ToggleLicense,
    Delete,
}

#[component]
pub fn ReferentPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let members = RwSignal::new(LoadState::<Vec<User>>::Loading);
    let query = RwSignal::new(String::new());

    let reload = move || {
        let session = auth.session_untracked();
        spawn_local(async move {
            let (state, notice) = referent::load(&auth.api(), &session).await;
            members.set(state);
            toaster.maybe(notice);
        });
    };

    Effect::new(move |_| {
        auth.session();
        reload();
    });

    let act = move |action: MemberAction, id: String| {
        if matches!(action, MemberAction::Delete) && !confirm(DELETE_CONFIRM) {
            return;
        }
        let session = auth.session_untracked();
        spawn_local(async move {
            let api = auth.api();
            let result: ActionResult<Notice> = match action {
                MemberAction::ToggleLicense => referent::toggle_license(&api, &session, &id).await,
                MemberAction::Delete => referent::delete_member(&api, &session, &id).await,
            };
            match result {
                Ok(notice) => {
                    toaster.show(notice);
                    reload();
                }
                Err(e) => toaster.action_error(&e),
            }
        });
    };

    let member_row = move |u: &User| {
        let toggle_id = u.id.clone();
        let delete_id = u.id.clone();
        let (status, status_class) = if u.est_licencie {
            ("Licencié", "badge badge-success")
        } else {
            ("Non licencié", "badge badge-warning")
        };
        view! {
            <tr>
                <td>{u.full_name()}</td>
                <td>{u.email.clone()}</td>
                <td>{u.role.label()}</td>
                <td>{u.type_licence.label()}</td>
                <td><span class=status_class>{status}</span></td>
                <td class="flex gap-2 justify-end">
                    <button
                        class="btn btn-sm btn-outline"
                        on:click=move |_| act(MemberAction::ToggleLicense, toggle_id.clone())
                    >
                        "🔄 Licence"
                    </button>
                    <button
                        class="btn btn-sm btn-error btn-outline"
                        on:click=move |_| act(MemberAction::Delete, delete_id.clone())
                    >
                        "🗑️"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <PageShell title="Espace référent">
            {move || members.with(|state| match state {
                LoadState::Loading => view! { <Loading /> }.into_any(),
                LoadState::Failed => view! { <EmptyState message="Membres indisponibles" /> }.into_any(),
                LoadState::Ready(list) => {
                    let stats = MemberStats::of(list);
                    view! {
                        <div class="stats shadow w-full">
                            <div class="stat">
                                <div class="stat-title">"Membres"</div>
                                <div class="stat-value">{stats.total}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">"Licenciés"</div>
                                <div class="stat-value text-success">{stats.licensed}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">"Non licenciés"</div>
                                <div class="stat-value text-warning">{stats.unlicensed}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">"Compétition"</div>
                                <div class="stat-value text-primary">{stats.competition}</div>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            })}
            <input
                type="search"
                placeholder="🔍 Rechercher un membre (nom, prénom, email)"
                class="input input-bordered w-full"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            {move || {
                let q = query.get();
                members.with(|state| {
                    let found = search(state.items(), &q);
                    if found.is_empty() {
                        return (!state.is_loading())
                            .then(|| view! { <EmptyState message="Aucun membre trouvé" /> })
                            .into_any();
                    }
                    view! {
                        <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Nom"</th>
                                        <th>"Email"</th>
                                        <th>"Rôle"</th>
                                        <th>"Licence"</th>
                                        <th>"Statut"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>{found.into_iter().map(member_row).collect_view()}</tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                })
            }}
        </PageShell>
    }
}
