use clubsport::pages::LoadState;
use clubsport::pages::rankings::{self, RankingRow};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::layout::{EmptyState, Loading, PageShell};
use crate::toast::use_toaster;

fn row(r: RankingRow) -> impl IntoView {
    let class = if r.is_self { "bg-primary/10 font-bold" } else { "" };
    let position = r
        .medal
        .map(str::to_string)
        .unwrap_or_else(|| r.position.to_string());
    view! {
        <tr class=class>
            <td class="text-xl">{position}</td>
            <td>{r.label()}</td>
            <td>{r.user.type_licence.label()}</td>
            <td>{r.user.participations}</td>
            <td class="text-right font-mono">{r.points}</td>
        </tr>
    }
}

#[component]
pub fn RankingsPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let rows = RwSignal::new(LoadState::<Vec<RankingRow>>::Loading);

    Effect::new(move |_| {
        let session = auth.session();
        spawn_local(async move {
            let (state, notice) = rankings::load(&auth.api(), &session).await;
            rows.set(state);
            toaster.maybe(notice);
        });
    });

    view! {
        <PageShell title="Classement">
            {move || match rows.get() {
                LoadState::Loading => view! { <Loading /> }.into_any(),
                LoadState::Ready(items) if !items.is_empty() => view! {
                    <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"#"</th>
                                    <th>"Joueur"</th>
                                    <th>"Licence"</th>
                                    <th>"Participations"</th>
                                    <th class="text-right">"Points"</th>
                                </tr>
                            </thead>
                            <tbody>{items.into_iter().map(row).collect_view()}</tbody>
                        </table>
                    </div>
                }
                .into_any(),
                _ => view! { <EmptyState message="Classement indisponible" /> }.into_any(),
            }}
        </PageShell>
    }
}
