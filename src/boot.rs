//! Application start-up
//!
//! Seeds the reference data, restores the persisted session and refreshes the
//! cached profile. The two network calls run concurrently; the page shows its
//! loading screen until [`bootstrap`] returns.

use clubsport_shared::protocol::{CurrentUser, SeedData};

use crate::api::ClubApi;
use crate::config::RefreshFailurePolicy;
use crate::error::ApiError;
use crate::request::HttpClient;
use crate::session::{Session, SessionStore};
use crate::storage::KeyValueStore;

/// Result of the boot-time profile refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// No stored token, or the visitor session
    Skipped,
    Refreshed,
    /// Refresh failed, token kept with an unknown profile
    ProfileCleared(ApiError),
    /// Refresh failed, the session was closed
    LoggedOut(ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BootReport {
    pub seeded: bool,
    pub session_restored: bool,
    pub refresh: RefreshOutcome,
}

pub async fn bootstrap<C, S>(api: &ClubApi<C>, store: &mut SessionStore<S>) -> BootReport
where
    C: HttpClient,
    S: KeyValueStore,
{
    let restored = store.hydrate().clone();
    let session_restored = restored.bearer().is_some();

    let seed = async {
        match api.send(&Session::default(), &SeedData).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("seed data skipped: {}", e);
                false
            }
        }
    };
    let refresh = async {
        if session_restored {
            Some(api.send(&restored, &CurrentUser).await)
        } else {
            None
        }
    };
    let (seeded, profile) = futures::join!(seed, refresh);

    let refresh = match profile {
        None => RefreshOutcome::Skipped,
        Some(Ok(user)) => match store.set_user(Some(user)) {
            Ok(()) => RefreshOutcome::Refreshed,
            Err(e) => {
                tracing::warn!("refreshed profile not persisted: {}", e);
                RefreshOutcome::Refreshed
            }
        },
        Some(Err(err)) => apply_refresh_failure(store, api.config().refresh_failure, err),
    };

    BootReport {
        seeded,
        session_restored,
        refresh,
    }
}

fn apply_refresh_failure<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    policy: RefreshFailurePolicy,
    err: ApiError,
) -> RefreshOutcome {
    let logout = match policy {
        RefreshFailurePolicy::Adaptive => err.is_unauthorized(),
        RefreshFailurePolicy::KeepToken => false,
        RefreshFailurePolicy::ClearSession => true,
    };

    if logout {
        tracing::info!("stored session rejected: {}", err);
        store.logout();
        return RefreshOutcome::LoggedOut(err);
    }

    tracing::warn!("profile refresh failed, keeping token: {}", err);
    if let Err(e) = store.set_user(None) {
        tracing::warn!("session not persisted: {}", e);
    }
    RefreshOutcome::ProfileCleared(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientConfig, DEFAULT_SESSION_KEY};
    use crate::request::{HttpMethod, MockHttpClient};
    use crate::storage::MemoryStore;
    use crate::testing::{BASE, member, url, user_json};
    use clubsport_shared::Role;
    use serde_json::json;

    fn api_with(policy: RefreshFailurePolicy) -> ClubApi<MockHttpClient> {
        ClubApi::new(
            MockHttpClient::new(),
            ClientConfig::with_base_url(Some(BASE)).with_refresh_failure(policy),
        )
    }

    fn signed_in_store() -> (MemoryStore, SessionStore<MemoryStore>) {
        let storage = MemoryStore::new();
        let mut first = SessionStore::new(storage.clone(), DEFAULT_SESSION_KEY);
        first.login("tok".into(), member("u1", Role::Member)).unwrap();
        (storage.clone(), SessionStore::new(storage, DEFAULT_SESSION_KEY))
    }

    #[tokio::test]
    async fn test_fresh_start_only_seeds() {
        let api = api_with(RefreshFailurePolicy::Adaptive);
        api.client()
            .mock_response(HttpMethod::Post, &url("/seed-data"), 200, json!({"message": "ok"}));
        let mut store = SessionStore::new(MemoryStore::new(), DEFAULT_SESSION_KEY);

        let report = bootstrap(&api, &mut store).await;
        assert!(report.seeded);
        assert!(!report.session_restored);
        assert_eq!(report.refresh, RefreshOutcome::Skipped);
        assert_eq!(api.client().count(HttpMethod::Get, &url("/users/me")), 0);
    }

    #[tokio::test]
    async fn test_seed_failure_is_swallowed_and_profile_refreshed() {
        let api = api_with(RefreshFailurePolicy::Adaptive);
        api.client()
            .mock_unreachable(HttpMethod::Post, &url("/seed-data"));
        let mut fresh = user_json("u1", 42);
        fresh["role"] = json!("admin");
        api.client()
            .mock_response(HttpMethod::Get, &url("/users/me"), 200, fresh);
        let (_, mut store) = signed_in_store();

        let report = bootstrap(&api, &mut store).await;
        assert!(!report.seeded);
        assert_eq!(report.refresh, RefreshOutcome::Refreshed);
        assert_eq!(store.session().role(), Some(Role::Admin));
        assert_eq!(store.session().user.as_ref().map(|u| u.points), Some(42));
    }

    #[tokio::test]
    async fn test_adaptive_policy_logs_out_on_401() {
        let api = api_with(RefreshFailurePolicy::Adaptive);
        api.client().mock_response(
            HttpMethod::Get,
            &url("/users/me"),
            401,
            json!({"detail": "Token invalide"}),
        );
        let (storage, mut store) = signed_in_store();

        let report = bootstrap(&api, &mut store).await;
        assert!(matches!(report.refresh, RefreshOutcome::LoggedOut(_)));
        assert!(!store.session().is_authenticated());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_adaptive_policy_keeps_token_on_server_error() {
        let api = api_with(RefreshFailurePolicy::Adaptive);
        api.client()
            .mock_response(HttpMethod::Get, &url("/users/me"), 500, json!({}));
        let (_, mut store) = signed_in_store();

        let report = bootstrap(&api, &mut store).await;
        assert!(matches!(report.refresh, RefreshOutcome::ProfileCleared(_)));
        assert_eq!(store.session().token.as_deref(), Some("tok"));
        assert!(store.session().user.is_none());
    }

    #[tokio::test]
    async fn test_explicit_policies() {
        let api = api_with(RefreshFailurePolicy::KeepToken);
        api.client()
            .mock_response(HttpMethod::Get, &url("/users/me"), 401, json!({}));
        let (_, mut store) = signed_in_store();
        bootstrap(&api, &mut store).await;
        assert!(store.session().is_authenticated());

        let api = api_with(RefreshFailurePolicy::ClearSession);
        api.client()
            .mock_unreachable(HttpMethod::Get, &url("/users/me"));
        let (_, mut store) = signed_in_store();
        bootstrap(&api, &mut store).await;
        assert!(!store.session().is_authenticated());
    }
}
