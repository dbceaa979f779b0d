//! Login page: sign-in, registration, referent onboarding, password recovery
//! and visitor entry.
//!
//! Server calls return the [`AuthResponse`]; the caller then opens the session
//! with [`open_session`] so the store is never borrowed across an await.

use clubsport_shared::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, REFERENT_CODE_PREFIX,
    ReferentRegisterRequest, RegisterRequest, ResetPasswordRequest, VerifyReferentRequest,
};

use super::{ActionError, ActionResult, Notice};
use crate::api::ClubApi;
use crate::request::HttpClient;
use crate::session::{Session, SessionStore};
use crate::storage::KeyValueStore;

pub const LOGIN_OK: &str = "Connexion réussie!";
pub const REGISTER_OK: &str = "Inscription réussie!";
pub const REFERENT_OK: &str = "Compte référent créé avec succès!";
pub const GUEST_OK: &str = "Bienvenue! Vous êtes connecté en tant que visiteur.";
pub const NON_LICENSED_TITLE: &str = "Vous n'êtes pas encore licencié?";
pub const NON_LICENSED_TEXT: &str =
    "Demandez une période d'essai pour vous entraîner! Contactez-nous pour plus d'informations.";

// =========================================================
// Sign-in & registration
// =========================================================

pub async fn login<C: HttpClient>(api: &ClubApi<C>, req: &LoginRequest) -> ActionResult<AuthResponse> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ActionError::blocked("Veuillez remplir tous les champs"));
    }
    api.send(&Session::default(), req)
        .await
        .map_err(ActionError::api("Erreur de connexion"))
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    Registered(AuthResponse),
    /// Non-licensed applicants are pointed to a trial period; nothing is sent
    NonLicensedNotice,
}

pub async fn register<C: HttpClient>(
    api: &ClubApi<C>,
    req: &RegisterRequest,
) -> ActionResult<RegisterOutcome> {
    if !req.est_licencie {
        return Ok(RegisterOutcome::NonLicensedNotice);
    }
    if [&req.email, &req.password, &req.nom, &req.prenom]
        .iter()
        .any(|f| f.trim().is_empty())
    {
        return Err(ActionError::blocked("Veuillez remplir tous les champs"));
    }
    api.send(&Session::default(), req)
        .await
        .map(RegisterOutcome::Registered)
        .map_err(ActionError::api("Erreur d'inscription"))
}

/// Makes the authenticated member the active session.
///
/// A storage failure only costs persistence across reloads, so it is logged.
pub fn open_session<S: KeyValueStore>(store: &mut SessionStore<S>, auth: AuthResponse) {
    if let Err(e) = store.login(auth.token, auth.user) {
        tracing::warn!("session not persisted: {}", e);
    }
}

/// Trial mode: synthetic unlicensed member, nothing persisted, nothing sent.
pub fn enter_as_guest<S: KeyValueStore>(store: &mut SessionStore<S>) -> Notice {
    store.enter_as_guest();
    Notice::success(GUEST_OK)
}

// =========================================================
// Referent onboarding
// =========================================================

/// Full referent code; the form only asks for the part after the club prefix.
pub fn referent_code(code: &str) -> String {
    let code = code.trim();
    if code.starts_with(REFERENT_CODE_PREFIX) {
        code.to_string()
    } else {
        format!("{}{}", REFERENT_CODE_PREFIX, code)
    }
}

/// First step: checks the club code and has a verification code emailed.
pub async fn request_referent_code<C: HttpClient>(
    api: &ClubApi<C>,
    req: &ReferentRegisterRequest,
) -> ActionResult<Notice> {
    if req.code_secret.trim().is_empty() {
        return Err(ActionError::blocked("Entrez le code secret du club"));
    }
    let req = ReferentRegisterRequest {
        code_secret: referent_code(&req.code_secret),
        ..req.clone()
    };
    api.send(&Session::default(), &req)
        .await
        .map(|_| Notice::success("Code envoyé à votre email!"))
        .map_err(ActionError::api("Erreur lors de l'inscription"))
}

/// Second step: exchanges the emailed code for a referent session.
pub async fn verify_referent<C: HttpClient>(
    api: &ClubApi<C>,
    req: &VerifyReferentRequest,
) -> ActionResult<AuthResponse> {
    if req.code_verification.trim().is_empty() {
        return Err(ActionError::blocked("Entrez le code de vérification"));
    }
    api.send(&Session::default(), req)
        .await
        .map_err(ActionError::api("Code invalide"))
}

// =========================================================
// Password recovery
// =========================================================

pub async fn forgot_password<C: HttpClient>(api: &ClubApi<C>, email: &str) -> ActionResult<Notice> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ActionError::blocked("Veuillez entrer votre email"));
    }
    let req = ForgotPasswordRequest {
        email: email.to_string(),
    };
    api.send(&Session::default(), &req)
        .await
        .map(|_| Notice::success("Un email de réinitialisation a été envoyé"))
        .map_err(ActionError::api("Erreur lors de l'envoi de l'email"))
}

pub async fn reset_password<C: HttpClient>(
    api: &ClubApi<C>,
    token: Option<&str>,
    password: &str,
    confirmation: &str,
) -> ActionResult<Notice> {
    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return Err(ActionError::blocked("Lien de réinitialisation invalide ou expiré"));
    };
    if password.is_empty() {
        return Err(ActionError::blocked("Veuillez entrer un nouveau mot de passe"));
    }
    if password != confirmation {
        return Err(ActionError::blocked("Les mots de passe ne correspondent pas"));
    }
    let req = ResetPasswordRequest {
        token: token.to_string(),
        new_password: password.to_string(),
    };
    api.send(&Session::default(), &req)
        .await
        .map(|_| Notice::success("Mot de passe réinitialisé avec succès!"))
        .map_err(ActionError::api("Erreur lors de la réinitialisation"))
}
