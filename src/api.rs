use clubsport_shared::protocol::ApiRequest;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::request::{HttpClient, HttpRequest};
use crate::session::Session;

// =========================================================
// API gateway
// =========================================================

/// Typed gateway to the club backend.
///
/// Generic over the transport so the same code runs on browser fetch,
/// reqwest and the test mock.
#[derive(Clone)]
pub struct ClubApi<C: HttpClient> {
    client: C,
    config: ClientConfig,
}

impl<C: HttpClient> ClubApi<C> {
    pub fn new(client: C, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Performs `req` once and decodes its response.
    ///
    /// The bearer header is attached only for authenticated endpoints and only
    /// when the session holds a real token.
    pub async fn send<R: ApiRequest>(&self, session: &Session, req: &R) -> ApiResult<R::Response> {
        let path = req.path();
        let url = self.config.endpoint(&path);
        let mut http = HttpRequest::new(&url, R::METHOD).with_header("Accept", "application/json");

        if R::AUTHENTICATED {
            if let Some(token) = session.bearer() {
                http = http.with_header("Authorization", &format!("Bearer {}", token));
            }
        }

        if R::METHOD.has_body() {
            let body = serde_json::to_value(req)
                .map_err(|e| ApiError::decode(0, format!("request encoding: {}", e)))?;
            if !body.is_null() {
                http = http
                    .with_header("Content-Type", "application/json")
                    .with_body(body);
            }
        }

        tracing::debug!(method = R::METHOD.as_str(), %path, "api call");

        let resp = self.client.send(http).await.map_err(|e| {
            tracing::warn!(method = R::METHOD.as_str(), %path, "transport failure: {}", e);
            ApiError::network(e.0)
        })?;

        if !resp.is_success() {
            let err = ApiError::from_response(resp.status, &resp.body);
            tracing::warn!(method = R::METHOD.as_str(), %path, status = resp.status, "{}", err);
            return Err(err);
        }

        decode_body::<R::Response>(&resp.body).map_err(|e| {
            tracing::warn!(%path, "unexpected response body: {}", e);
            ApiError::decode(resp.status, e.to_string())
        })
    }
}

/// Decodes a success body. An empty body (202/204) reads as `null`, and as `{}`
/// for object responses whose fields are all optional.
fn decode_body<T: serde::de::DeserializeOwned>(body: &str) -> serde_json::Result<T> {
    if !body.trim().is_empty() {
        return serde_json::from_str(body);
    }
    serde_json::from_value(Value::Null)
        .or_else(|_| serde_json::from_value(Value::Object(Default::default())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use crate::testing::{api, member, session_for, url};
    use clubsport_shared::protocol::{
        CurrentUser, ListTournaments, RegisterForTournament, SeedData, ToggleLicense,
    };
    use clubsport_shared::{LoginRequest, MessageResponse, Role};
    use serde_json::json;

    #[tokio::test]
    async fn test_bearer_attached_to_authenticated_call() {
        let api = api();
        api.client()
            .mock_response(HttpMethod::Get, &url("/tournaments"), 200, json!([]));
        let session = session_for(member("u1", Role::Member));

        let list = api.send(&session, &ListTournaments).await.unwrap();
        assert!(list.is_empty());

        let reqs = api.client().requests.borrow();
        assert_eq!(reqs.len(), 1);
        assert_eq!(
            reqs[0].2.get("Authorization").map(String::as_str),
            Some("Bearer token-u1")
        );
        assert!(reqs[0].3.is_none());
    }

    #[tokio::test]
    async fn test_public_call_has_no_bearer() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Post,
            &url("/auth/login"),
            200,
            json!({ "token": "t", "user": crate::testing::user_json("a", 0) }),
        );
        let session = session_for(member("u1", Role::Member));
        let req = LoginRequest {
            email: "a@club.fr".into(),
            password: "pw".into(),
        };

        let auth = api.send(&session, &req).await.unwrap();
        assert_eq!(auth.token, "t");

        let reqs = api.client().requests.borrow();
        assert!(!reqs[0].2.contains_key("Authorization"));
        let body: Value = serde_json::from_str(reqs[0].3.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "email": "a@club.fr", "password": "pw" }));
    }

    #[tokio::test]
    async fn test_guest_token_is_never_sent() {
        let api = api();
        api.client()
            .mock_response(HttpMethod::Get, &url("/users/me"), 401, json!({"detail": "Non authentifié"}));

        let err = api.send(&Session::guest(), &CurrentUser).await.unwrap_err();
        assert!(err.is_unauthorized());
        let reqs = api.client().requests.borrow();
        assert!(!reqs[0].2.contains_key("Authorization"));
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_error() {
        let api = api();
        let target = url("/tournaments/t1/register");
        api.client().mock_response(
            HttpMethod::Post,
            &target,
            400,
            json!({"detail": "Tournoi complet"}),
        );
        let session = session_for(member("u1", Role::Member));

        let err = api
            .send(&session, &RegisterForTournament { id: "t1".into() })
            .await
            .unwrap_err();
        assert_eq!(err.status, Some(400));
        assert_eq!(err.user_message("Erreur"), "Tournoi complet");
        assert_eq!(api.client().count(HttpMethod::Post, &target), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let api = api();
        api.client()
            .mock_unreachable(HttpMethod::Post, &url("/seed-data"));

        let err = api.send(&Session::default(), &SeedData).await.unwrap_err();
        assert_eq!(err.kind, crate::error::ApiErrorKind::Network);

        // unit request: no body at all
        let reqs = api.client().requests.borrow();
        assert!(reqs[0].3.is_none());
    }

    #[tokio::test]
    async fn test_empty_body_decodes() {
        let api = api();
        api.client().mock_raw(
            HttpMethod::Patch,
            &url("/referent/users/u2/toggle-license"),
            204,
            "",
        );
        let session = session_for(member("r", Role::Referent));

        let resp = api
            .send(&session, &ToggleLicense { id: "u2".into() })
            .await
            .unwrap();
        assert_eq!(resp, MessageResponse { message: None });
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let api = api();
        api.client()
            .mock_raw(HttpMethod::Get, &url("/tournaments"), 200, "<html>");
        let session = session_for(member("u1", Role::Member));

        let err = api.send(&session, &ListTournaments).await.unwrap_err();
        assert_eq!(err.kind, crate::error::ApiErrorKind::Decode);
    }
}
