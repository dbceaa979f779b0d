use clubsport::pages::LoadState;
use clubsport::pages::news::{self, EXCERPT_CHARS, excerpt};
use clubsport::shared::NewsArticle;
use clubsport::shared::date::format_fr;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::layout::{EmptyState, Loading, PageShell};
use crate::toast::use_toaster;

#[component]
fn ArticleCard(article: NewsArticle) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let short = excerpt(&article.contenu, EXCERPT_CHARS);
    let truncated = short != article.contenu.trim();
    let full = article.contenu.clone();

    view! {
        <article class="card bg-base-100 shadow-xl">
            {article.image_url.map(|src| view! {
                <figure><img src=src alt=article.titre.clone() class="w-full h-48 object-cover" /></figure>
            })}
            <div class="card-body">
                <h2 class="card-title">{article.titre}</h2>
                <p class="text-sm text-base-content/60">
                    {format!("Par {} le {}", article.auteur_nom, format_fr(&article.date_publication))}
                </p>
                <p class="whitespace-pre-line">
                    {move || if expanded.get() { full.clone() } else { short.clone() }}
                </p>
                {truncated.then(|| view! {
                    <div class="card-actions justify-end">
                        <button class="btn btn-link btn-sm" on:click=move |_| expanded.update(|e| *e = !*e)>
                            {move || if expanded.get() { "Réduire" } else { "Lire la suite" }}
                        </button>
                    </div>
                })}
            </div>
        </article>
    }
}

#[component]
pub fn NewsPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let articles = RwSignal::new(LoadState::<Vec<NewsArticle>>::Loading);

    Effect::new(move |_| {
        let session = auth.session();
        spawn_local(async move {
            let (state, notice) = news::load(&auth.api(), &session).await;
            articles.set(state);
            toaster.maybe(notice);
        });
    });

    view! {
        <PageShell title="Actualités">
            {move || match articles.get() {
                LoadState::Loading => view! { <Loading /> }.into_any(),
                LoadState::Ready(items) if !items.is_empty() => view! {
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        {items
                            .into_iter()
                            .map(|article| view! { <ArticleCard article=article /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
                _ => view! { <EmptyState message="Aucune actualité" /> }.into_any(),
            }}
        </PageShell>
    }
}
