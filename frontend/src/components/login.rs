use clubsport::AppRoute;
use clubsport::pages::auth::{
    self, LOGIN_OK, NON_LICENSED_TEXT, NON_LICENSED_TITLE, REFERENT_OK, REGISTER_OK,
    RegisterOutcome,
};
use clubsport::shared::{
    LicenceType, LoginRequest, REFERENT_CODE_PREFIX, ReferentRegisterRequest, RegisterRequest,
    VerifyReferentRequest,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::layout::TextField;
use crate::toast::use_toaster;
use crate::web::router::use_router;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Login,
    Register,
    Referent,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toaster = use_toaster();

    let tab = RwSignal::new(Tab::Login);
    let forgot_open = RwSignal::new(false);

    let on_guest = move |_| {
        toaster.show(auth.enter_as_guest());
        router.go(AppRoute::Dashboard);
    };

    let tab_class = move |t: Tab| {
        move || {
            if tab.get() == t {
                "tab tab-active"
            } else {
                "tab"
            }
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-lg">
                <div class="text-center mb-4">
                    <h1 class="text-4xl font-bold">"🏐 TCS Volley"</h1>
                    <p class="text-base-content/70">"Espace membres du club"</p>
                </div>

                <div class="card w-full shadow-2xl bg-base-100">
                    <div class="card-body">
                        <div role="tablist" class="tabs tabs-boxed mb-4">
                            <a role="tab" class=tab_class(Tab::Login) on:click=move |_| tab.set(Tab::Login)>
                                "Connexion"
                            </a>
                            <a role="tab" class=tab_class(Tab::Register) on:click=move |_| tab.set(Tab::Register)>
                                "Inscription"
                            </a>
                            <a role="tab" class=tab_class(Tab::Referent) on:click=move |_| tab.set(Tab::Referent)>
                                "Référent"
                            </a>
                        </div>

                        {move || match tab.get() {
                            Tab::Login => view! { <LoginForm forgot_open=forgot_open /> }.into_any(),
                            Tab::Register => view! { <RegisterForm /> }.into_any(),
                            Tab::Referent => view! { <ReferentForm /> }.into_any(),
                        }}

                        <div class="divider">"ou"</div>
                        <button class="btn btn-outline" on:click=on_guest>
                            "👀 Continuer en tant que visiteur"
                        </button>
                    </div>
                </div>
            </div>
        </div>
        <ForgotPasswordDialog open=forgot_open />
    }
}

#[component]
fn LoginForm(forgot_open: RwSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toaster = use_toaster();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let req = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        busy.set(true);
        spawn_local(async move {
            match auth::login(&auth.api(), &req).await {
                Ok(response) => {
                    auth.open_session(response);
                    toaster.success(LOGIN_OK);
                    router.go(AppRoute::Dashboard);
                }
                Err(e) => toaster.action_error(&e),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="space-y-2" on:submit=on_submit>
            <TextField label="Email" value=email kind="email" placeholder="vous@exemple.fr" />
            <TextField label="Mot de passe" value=password kind="password" placeholder="••••••••" />
            <div class="text-right">
                <button type="button" class="link link-hover text-sm" on:click=move |_| forgot_open.set(true)>
                    "Mot de passe oublié ?"
                </button>
            </div>
            <button class="btn btn-primary w-full" disabled=move || busy.get()>
                {move || if busy.get() {
                    view! { <span class="loading loading-spinner"></span> "Connexion..." }.into_any()
                } else {
                    "Se connecter".into_any()
                }}
            </button>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toaster = use_toaster();

    let defaults = RegisterRequest::default();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let nom = RwSignal::new(String::new());
    let prenom = RwSignal::new(String::new());
    let licence = RwSignal::new(defaults.type_licence);
    let licensed = RwSignal::new(defaults.est_licencie);
    let busy = RwSignal::new(false);
    let show_notice = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let req = RegisterRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
            nom: nom.get_untracked(),
            prenom: prenom.get_untracked(),
            type_licence: licence.get_untracked(),
            est_licencie: licensed.get_untracked(),
        };
        busy.set(true);
        spawn_local(async move {
            match auth::register(&auth.api(), &req).await {
                Ok(RegisterOutcome::Registered(response)) => {
                    auth.open_session(response);
                    toaster.success(REGISTER_OK);
                    router.go(AppRoute::Dashboard);
                }
                Ok(RegisterOutcome::NonLicensedNotice) => show_notice.set(true),
                Err(e) => toaster.action_error(&e),
            }
            busy.set(false);
        });
    };

    let on_licence = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        licence.set(if value == "jeu_libre" {
            LicenceType::JeuLibre
        } else {
            LicenceType::Competition
        });
    };

    view! {
        <form class="space-y-2" on:submit=on_submit>
            <div class="grid grid-cols-2 gap-2">
                <TextField label="Prénom" value=prenom />
                <TextField label="Nom" value=nom />
            </div>
            <TextField label="Email" value=email kind="email" />
            <TextField label="Mot de passe" value=password kind="password" />
            <label class="form-control w-full">
                <div class="label">
                    <span class="label-text">"Type de licence"</span>
                </div>
                <select class="select select-bordered" on:change=on_licence>
                    <option value="competition" selected=move || licence.get() == LicenceType::Competition>
                        {LicenceType::Competition.label()}
                    </option>
                    <option value="jeu_libre" selected=move || licence.get() == LicenceType::JeuLibre>
                        {LicenceType::JeuLibre.label()}
                    </option>
                </select>
            </label>
            <label class="label cursor-pointer justify-start gap-3">
                <input
                    type="checkbox"
                    class="checkbox checkbox-primary"
                    prop:checked=move || licensed.get()
                    on:change=move |ev| licensed.set(event_target_checked(&ev))
                />
                <span class="label-text">"Je suis licencié au club"</span>
            </label>
            <button class="btn btn-primary w-full" disabled=move || busy.get()>
                "Créer mon compte"
            </button>
        </form>

        <Show when=move || show_notice.get()>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg">{NON_LICENSED_TITLE}</h3>
                    <p class="py-4">{NON_LICENSED_TEXT}</p>
                    <div class="modal-action">
                        <button class="btn" on:click=move |_| show_notice.set(false)>"Compris"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Two steps: the club code sends a verification email, the emailed code
/// opens the referent session.
#[component]
fn ReferentForm() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toaster = use_toaster();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let nom = RwSignal::new(String::new());
    let prenom = RwSignal::new(String::new());
    let code_secret = RwSignal::new(String::new());
    let code_verification = RwSignal::new(String::new());
    let code_sent = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_request = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let req = ReferentRegisterRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
            nom: nom.get_untracked(),
            prenom: prenom.get_untracked(),
            code_secret: code_secret.get_untracked(),
        };
        busy.set(true);
        spawn_local(async move {
            match auth::request_referent_code(&auth.api(), &req).await {
                Ok(notice) => {
                    toaster.show(notice);
                    code_sent.set(true);
                }
                Err(e) => toaster.action_error(&e),
            }
            busy.set(false);
        });
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let req = VerifyReferentRequest {
            email: email.get_untracked(),
            code_verification: code_verification.get_untracked(),
        };
        busy.set(true);
        spawn_local(async move {
            match auth::verify_referent(&auth.api(), &req).await {
                Ok(response) => {
                    auth.open_session(response);
                    toaster.success(REFERENT_OK);
                    router.go(AppRoute::Referent);
                }
                Err(e) => toaster.action_error(&e),
            }
            busy.set(false);
        });
    };

    move || {
        if code_sent.get() {
            view! {
                <form class="space-y-2" on:submit=on_verify>
                    <p class="text-sm text-base-content/70">
                        "Un code de vérification a été envoyé à " {email.get_untracked()}
                    </p>
                    <TextField label="Code de vérification" value=code_verification />
                    <button class="btn btn-primary w-full" disabled=move || busy.get()>
                        "Vérifier"
                    </button>
                    <button type="button" class="btn btn-ghost w-full" on:click=move |_| code_sent.set(false)>
                        "Retour"
                    </button>
                </form>
            }
            .into_any()
        } else {
            view! {
                <form class="space-y-2" on:submit=on_request>
                    <div class="grid grid-cols-2 gap-2">
                        <TextField label="Prénom" value=prenom />
                        <TextField label="Nom" value=nom />
                    </div>
                    <TextField label="Email" value=email kind="email" />
                    <TextField label="Mot de passe" value=password kind="password" />
                    <label class="form-control w-full">
                        <div class="label">
                            <span class="label-text">"Code secret du club"</span>
                        </div>
                        <div class="join w-full">
                            <span class="join-item btn btn-disabled">{REFERENT_CODE_PREFIX}</span>
                            <input
                                class="join-item input input-bordered w-full"
                                prop:value=move || code_secret.get()
                                on:input=move |ev| code_secret.set(event_target_value(&ev))
                            />
                        </div>
                    </label>
                    <button class="btn btn-secondary w-full" disabled=move || busy.get()>
                        "Recevoir le code"
                    </button>
                </form>
            }
            .into_any()
        }
    }
}

#[component]
fn ForgotPasswordDialog(open: RwSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = email.get_untracked();
        busy.set(true);
        spawn_local(async move {
            match auth::forgot_password(&auth.api(), &value).await {
                Ok(notice) => {
                    toaster.show(notice);
                    email.set(String::new());
                    open.set(false);
                }
                Err(e) => toaster.action_error(&e),
            }
            busy.set(false);
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal modal-open">
                <form class="modal-box space-y-2" on:submit=on_submit>
                    <h3 class="font-bold text-lg">"Mot de passe oublié"</h3>
                    <p class="text-sm text-base-content/70">
                        "Entrez votre email pour recevoir un lien de réinitialisation."
                    </p>
                    <TextField label="Email" value=email kind="email" />
                    <div class="modal-action">
                        <button type="button" class="btn" on:click=move |_| open.set(false)>"Annuler"</button>
                        <button class="btn btn-primary" disabled=move || busy.get()>"Envoyer"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
