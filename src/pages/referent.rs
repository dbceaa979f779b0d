//! Referent panel: member directory with licence management.

use clubsport_shared::protocol::{DeleteMember, ListMembers, ToggleLicense};
use clubsport_shared::{LicenceType, User};

use super::{ActionError, ActionResult, LoadState, Notice, fetch};
use crate::api::ClubApi;
use crate::request::HttpClient;
use crate::session::Session;

pub const LOAD_FAILED: &str = "Erreur lors du chargement des utilisateurs";
pub const DELETE_CONFIRM: &str = "Êtes-vous sûr de vouloir supprimer cet utilisateur?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberStats {
    pub total: usize,
    pub licensed: usize,
    pub unlicensed: usize,
    pub competition: usize,
}

impl MemberStats {
    pub fn of(members: &[User]) -> Self {
        let licensed = members.iter().filter(|u| u.est_licencie).count();
        Self {
            total: members.len(),
            licensed,
            unlicensed: members.len() - licensed,
            competition: members
                .iter()
                .filter(|u| u.type_licence == LicenceType::Competition)
                .count(),
        }
    }
}

/// Case-insensitive match on nom, prenom or email. A blank query keeps everyone.
pub fn search<'a>(members: &'a [User], query: &str) -> Vec<&'a User> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return members.iter().collect();
    }
    members
        .iter()
        .filter(|u| {
            [&u.nom, &u.prenom, &u.email]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}

pub async fn load<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
) -> (LoadState<Vec<User>>, Option<Notice>) {
    fetch(api, session, &ListMembers, LOAD_FAILED).await
}

/// Flips the member's licence flag on the server. The caller re-fetches.
pub async fn toggle_license<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
    user_id: &str,
) -> ActionResult<Notice> {
    let req = ToggleLicense {
        id: user_id.to_string(),
    };
    api.send(session, &req)
        .await
        .map(|_| Notice::success("Statut de licence modifié"))
        .map_err(ActionError::api("Erreur lors de la modification"))
}

/// Deletes the member. The page asks for [`DELETE_CONFIRM`] first.
pub async fn delete_member<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
    user_id: &str,
) -> ActionResult<Notice> {
    if session.user_id() == Some(user_id) {
        return Err(ActionError::blocked(
            "Vous ne pouvez pas supprimer votre propre compte",
        ));
    }
    let req = DeleteMember {
        id: user_id.to_string(),
    };
    api.send(session, &req)
        .await
        .map(|_| Notice::success("Utilisateur supprimé"))
        .map_err(ActionError::api("Erreur lors de la suppression"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use crate::testing::{api, member, session_for, url, user_json};
    use clubsport_shared::Role;
    use serde_json::json;

    fn roster() -> Vec<User> {
        let mut a = member("a", Role::Member);
        a.nom = "Martin".into();
        a.email = "claire@club.fr".into();
        let mut b = member("b", Role::Member);
        b.prenom = "Léa".into();
        b.est_licencie = false;
        b.type_licence = LicenceType::JeuLibre;
        let c = member("c", Role::Referent);
        vec![a, b, c]
    }

    #[test]
    fn test_stats() {
        assert_eq!(
            MemberStats::of(&roster()),
            MemberStats {
                total: 3,
                licensed: 2,
                unlicensed: 1,
                competition: 2,
            }
        );
        assert_eq!(MemberStats::of(&[]), MemberStats::default());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let roster = roster();
        let ids = |q: &str| search(&roster, q).iter().map(|u| u.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids("MARTIN"), ["a"]);
        assert_eq!(ids("léa"), ["b"]);
        assert_eq!(ids("Claire@"), ["a"]);
        assert_eq!(ids("  ").len(), 3);
        assert!(ids("zzz").is_empty());
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_licence() {
        let api = api();
        let referent = session_for(member("r", Role::Referent));
        let toggle_url = url("/referent/users/u2/toggle-license");
        let list_url = url("/referent/users");

        let mut licensed = user_json("u2", 10);
        licensed["est_licencie"] = json!(true);
        let mut unlicensed = licensed.clone();
        unlicensed["est_licencie"] = json!(false);

        api.client()
            .mock_response(HttpMethod::Get, &list_url, 200, json!([licensed.clone()]));
        api.client()
            .mock_response(HttpMethod::Get, &list_url, 200, json!([unlicensed]));
        api.client()
            .mock_response(HttpMethod::Get, &list_url, 200, json!([licensed]));
        api.client()
            .mock_response(HttpMethod::Patch, &toggle_url, 200, json!({"message": "ok"}));

        let (before, _) = load(&api, &referent).await;
        let original = before.items()[0].est_licencie;

        toggle_license(&api, &referent, "u2").await.unwrap();
        let (after_one, _) = load(&api, &referent).await;
        assert_eq!(after_one.items()[0].est_licencie, !original);

        toggle_license(&api, &referent, "u2").await.unwrap();
        let (after_two, _) = load(&api, &referent).await;
        assert_eq!(after_two.items()[0].est_licencie, original);
        assert_eq!(api.client().count(HttpMethod::Patch, &toggle_url), 2);
    }

    #[tokio::test]
    async fn test_delete_member() {
        let api = api();
        let referent = session_for(member("r", Role::Referent));
        api.client().mock_response(
            HttpMethod::Delete,
            &url("/referent/users/u2"),
            200,
            json!({"message": "Utilisateur supprimé"}),
        );

        let notice = delete_member(&api, &referent, "u2").await.unwrap();
        assert_eq!(notice.message, "Utilisateur supprimé");

        let err = delete_member(&api, &referent, "r").await.unwrap_err();
        assert!(err.is_blocked());

        api.client().mock_response(
            HttpMethod::Delete,
            &url("/referent/users/u3"),
            403,
            json!({}),
        );
        let err = delete_member(&api, &referent, "u3").await.unwrap_err();
        assert_eq!(err.message(), "Erreur lors de la suppression");
    }
}
