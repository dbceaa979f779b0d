//! Tournament list and registration.

use clubsport_shared::protocol::{ListTournaments, RegisterForTournament};
use clubsport_shared::{Tournament, TournamentStatus};

use super::{ActionError, ActionResult, LoadState, Notice, fetch};
use crate::api::ClubApi;
use crate::request::HttpClient;
use crate::session::Session;

pub const LOAD_FAILED: &str = "Erreur lors du chargement des tournois";
pub const NOT_LICENSED: &str = "Vous devez être licencié pour vous inscrire";
pub const REGISTER_OK: &str = "Inscription réussie au tournoi!";
pub const REGISTER_FAILED: &str = "Erreur lors de l'inscription";

/// What the registration button shows for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationState {
    /// Already among the participants
    Registered,
    Full,
    /// Registrations closed (in progress or finished)
    Closed,
    Open,
}

impl RegistrationState {
    /// Checked in order: registered, full, closed, open.
    pub fn of(tournament: &Tournament, session: &Session) -> Self {
        if session
            .user_id()
            .is_some_and(|id| tournament.has_participant(id))
        {
            RegistrationState::Registered
        } else if tournament.is_full() {
            RegistrationState::Full
        } else if tournament.statut != TournamentStatus::Upcoming {
            RegistrationState::Closed
        } else {
            RegistrationState::Open
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegistrationState::Registered => "Inscrit",
            RegistrationState::Full => "Complet",
            RegistrationState::Closed => "Inscriptions fermées",
            RegistrationState::Open => "S'inscrire",
        }
    }

    pub fn is_actionable(&self) -> bool {
        *self == RegistrationState::Open
    }
}

pub async fn load<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
) -> (LoadState<Vec<Tournament>>, Option<Notice>) {
    fetch(api, session, &ListTournaments, LOAD_FAILED).await
}

/// Registers the session owner. Nothing is sent unless the tournament is open
/// to them and they hold a licence.
pub async fn register<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
    tournament: &Tournament,
) -> ActionResult<Notice> {
    let state = RegistrationState::of(tournament, session);
    if !state.is_actionable() {
        return Err(ActionError::blocked(state.label()));
    }
    if !session.is_licensed() {
        return Err(ActionError::blocked(NOT_LICENSED));
    }

    let req = RegisterForTournament {
        id: tournament.id.clone(),
    };
    api.send(session, &req)
        .await
        .map(|_| Notice::success(REGISTER_OK))
        .map_err(ActionError::api(REGISTER_FAILED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use crate::testing::{api, member, session_for, tournament, url};
    use clubsport_shared::Role;
    use serde_json::json;

    #[test]
    fn test_registration_state_order() {
        let me = session_for(member("u1", Role::Member));
        let full_with_me = tournament("t", &["u1", "u2"], 2, TournamentStatus::Upcoming);
        assert_eq!(
            RegistrationState::of(&full_with_me, &me),
            RegistrationState::Registered
        );

        let full = tournament("t", &["u2", "u3"], 2, TournamentStatus::Upcoming);
        assert_eq!(RegistrationState::of(&full, &me), RegistrationState::Full);
        assert_eq!(RegistrationState::Full.label(), "Complet");

        let running = tournament("t", &[], 8, TournamentStatus::InProgress);
        assert_eq!(RegistrationState::of(&running, &me), RegistrationState::Closed);

        let open = tournament("t", &["u2"], 8, TournamentStatus::Upcoming);
        assert_eq!(RegistrationState::of(&open, &me), RegistrationState::Open);
        assert_eq!(RegistrationState::Open.label(), "S'inscrire");
    }

    #[tokio::test]
    async fn test_full_tournament_issues_no_call() {
        let api = api();
        let me = session_for(member("u1", Role::Member));
        let full = tournament("t1", &["a", "b"], 2, TournamentStatus::Upcoming);

        let err = register(&api, &me, &full).await.unwrap_err();
        assert!(err.is_blocked());
        assert_eq!(err.message(), "Complet");
        assert!(api.client().requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_unlicensed_member_is_refused() {
        let api = api();
        let mut user = member("u1", Role::Member);
        user.est_licencie = false;
        let me = session_for(user);
        let open = tournament("t1", &[], 8, TournamentStatus::Upcoming);

        let err = register(&api, &me, &open).await.unwrap_err();
        assert_eq!(err.message(), NOT_LICENSED);
        assert!(api.client().requests.borrow().is_empty());

        let err = register(&api, &Session::guest(), &open).await.unwrap_err();
        assert_eq!(err.message(), NOT_LICENSED);
    }

    #[tokio::test]
    async fn test_register_then_refetch_shows_registered() {
        let api = api();
        let me = session_for(member("u1", Role::Member));
        let open = tournament("t1", &[], 8, TournamentStatus::Upcoming);
        api.client().mock_response(
            HttpMethod::Post,
            &url("/tournaments/t1/register"),
            200,
            json!({"message": "Inscription réussie"}),
        );
        api.client().mock_response(
            HttpMethod::Get,
            &url("/tournaments"),
            200,
            json!([{
                "id": "t1", "nom": "Open", "description": "", "date_debut": "2025-05-01",
                "date_fin": "2025-05-02", "max_participants": 8, "participants": ["u1"],
                "statut": "à_venir"
            }]),
        );

        let notice = register(&api, &me, &open).await.unwrap();
        assert_eq!(notice.message, REGISTER_OK);

        let (state, _) = load(&api, &me).await;
        let list = state.items();
        assert_eq!(
            RegistrationState::of(&list[0], &me),
            RegistrationState::Registered
        );
    }

    #[tokio::test]
    async fn test_server_refusal_uses_detail() {
        let api = api();
        let me = session_for(member("u1", Role::Member));
        let open = tournament("t1", &[], 8, TournamentStatus::Upcoming);
        api.client().mock_response(
            HttpMethod::Post,
            &url("/tournaments/t1/register"),
            409,
            json!({"detail": "Déjà inscrit"}),
        );
        let err = register(&api, &me, &open).await.unwrap_err();
        assert_eq!(err.message(), "Déjà inscrit");
    }
}
