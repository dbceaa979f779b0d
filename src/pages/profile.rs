use clubsport_shared::User;
use clubsport_shared::date::format_fr;
use clubsport_shared::protocol::CurrentUser;

use super::{LoadState, Notice, fetch};
use crate::api::ClubApi;
use crate::request::HttpClient;
use crate::session::Session;

pub const LOAD_FAILED: &str = "Erreur lors du chargement du profil";

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub user: User,
    pub full_name: String,
    pub role_label: &'static str,
    pub licence_label: &'static str,
    /// "Licencié" or "Non licencié"
    pub licence_status: &'static str,
    pub member_since: Option<String>,
    pub points: i64,
    pub participations: u32,
    pub badges: usize,
}

impl From<User> for ProfileView {
    fn from(user: User) -> Self {
        Self {
            full_name: user.full_name(),
            role_label: user.role.label(),
            licence_label: user.type_licence.label(),
            licence_status: if user.est_licencie {
                "Licencié"
            } else {
                "Non licencié"
            },
            member_since: user.date_creation.as_deref().map(format_fr),
            points: user.points,
            participations: user.participations,
            badges: user.achievements.len(),
            user,
        }
    }
}

pub async fn load<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
) -> (LoadState<ProfileView>, Option<Notice>) {
    let (state, notice) = fetch(api, session, &CurrentUser, LOAD_FAILED).await;
    (state.map(ProfileView::from), notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use crate::testing::{api, member, session_for, url, user_json};
    use clubsport_shared::Role;
    use serde_json::json;

    #[tokio::test]
    async fn test_profile_view_from_server() {
        let api = api();
        let mut me = user_json("u1", 64);
        me["date_creation"] = json!("2024-09-02T12:00:00");
        me["participations"] = json!(4);
        me["est_licencie"] = json!(false);
        me["achievements"] = json!([
            {"id": "a1", "icone": "🏆", "nom": "Champion", "description": "Gagner un tournoi", "date_obtenu": "2025-02-01"},
            {"id": "a2", "icone": "🔥", "nom": "Assidu", "description": "10 séances"}
        ]);
        api.client()
            .mock_response(HttpMethod::Get, &url("/users/me"), 200, me);
        let session = session_for(member("u1", Role::Member));

        let (state, notice) = load(&api, &session).await;
        assert!(notice.is_none());
        let view = state.ready().unwrap();
        assert_eq!(view.full_name, "U1 Nom");
        assert_eq!(view.member_since.as_deref(), Some("02/09/2024"));
        assert_eq!(view.licence_status, "Non licencié");
        assert_eq!((view.points, view.participations, view.badges), (64, 4, 2));
    }

    #[tokio::test]
    async fn test_guest_profile_read_fails_softly() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Get,
            &url("/users/me"),
            401,
            json!({"detail": "Not authenticated"}),
        );
        let (state, notice) = load(&api, &Session::guest()).await;
        assert_eq!(state, LoadState::Failed);
        assert!(notice.unwrap().is_error());
    }
}
