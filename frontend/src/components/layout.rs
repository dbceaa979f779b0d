use clubsport::AppRoute;
use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::web::router::Link;

/// Navbar plus a titled content column.
#[component]
pub fn PageShell(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <Navbar />
            <main class="max-w-7xl mx-auto p-4 md:p-8 space-y-8">
                <h1 class="text-4xl font-bold uppercase tracking-wider">{title}</h1>
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex justify-center py-16">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body items-center text-center text-base-content/60">
                <p>{message}</p>
            </div>
        </div>
    }
}

/// Labelled input bound to a string signal.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-control w-full">
            <div class="label">
                <span class="label-text">{label}</span>
            </div>
            <input
                type=kind
                placeholder=placeholder
                class="input input-bordered w-full"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">"Page introuvable"</p>
                <Link route=AppRoute::Dashboard class="btn btn-primary">
                    "Retour à l'accueil"
                </Link>
            </div>
        </div>
    }
}
