use clubsport::AppRoute;
use clubsport::pages::auth::reset_password;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::layout::TextField;
use crate::toast::use_toaster;
use crate::web::router::{query_param, use_router};

/// Target of the emailed link: `/reset-password?token=...`.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toaster = use_toaster();

    let token = query_param("token");
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let has_token = token.is_some();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let token = token.clone();
        let (password, confirmation) = (password.get_untracked(), confirmation.get_untracked());
        busy.set(true);
        spawn_local(async move {
            match reset_password(&auth.api(), token.as_deref(), &password, &confirmation).await {
                Ok(notice) => {
                    toaster.show(notice);
                    router.go(AppRoute::Login);
                }
                Err(e) => toaster.action_error(&e),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content w-full max-w-md">
                <form class="card w-full shadow-2xl bg-base-100" on:submit=on_submit>
                    <div class="card-body space-y-2">
                        <h1 class="card-title text-2xl">"🔑 Nouveau mot de passe"</h1>
                        <Show when=move || !has_token>
                            <div role="alert" class="alert alert-warning text-sm">
                                "Lien de réinitialisation invalide ou expiré"
                            </div>
                        </Show>
                        <TextField label="Nouveau mot de passe" value=password kind="password" />
                        <TextField label="Confirmation" value=confirmation kind="password" />
                        <button class="btn btn-primary" disabled=move || busy.get()>
                            "Réinitialiser"
                        </button>
                        <button type="button" class="btn btn-ghost" on:click=move |_| router.go(AppRoute::Login)>
                            "Retour à la connexion"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
