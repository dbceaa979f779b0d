//! Dashboard: three concurrent reads combined into the headline figures.

use chrono::NaiveDate;
use clubsport_shared::date::parse_date;
use clubsport_shared::protocol::{CurrentUser, ListMatches, ListTournaments};
use clubsport_shared::{Match, Tournament, TournamentStatus, User};

use super::{LoadState, Notice};
use crate::api::ClubApi;
use crate::request::HttpClient;
use crate::session::Session;

pub const LOAD_FAILED: &str = "Erreur lors du chargement du tableau de bord";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    /// Tournaments not yet finished
    pub active_tournaments: usize,
    /// Matches dated today or later
    pub upcoming_matches: usize,
    pub points: i64,
    pub achievements: usize,
}

impl DashboardStats {
    pub fn compute(tournaments: &[Tournament], matches: &[Match], profile: &User, today: NaiveDate) -> Self {
        Self {
            active_tournaments: tournaments
                .iter()
                .filter(|t| t.statut != TournamentStatus::Finished)
                .count(),
            upcoming_matches: matches
                .iter()
                .filter(|m| parse_date(&m.date).is_some_and(|d| d >= today))
                .count(),
            points: profile.points,
            achievements: profile.achievements.len(),
        }
    }
}

/// Loads tournaments, matches and the profile together and waits for all three.
///
/// Any failure leaves the figures unavailable.
pub async fn load<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
    today: NaiveDate,
) -> (LoadState<DashboardStats>, Option<Notice>) {
    let (tournaments, matches, profile) = futures::join!(
        api.send(session, &ListTournaments),
        api.send(session, &ListMatches),
        api.send(session, &CurrentUser),
    );

    match (tournaments, matches, profile) {
        (Ok(t), Ok(m), Ok(p)) => (LoadState::Ready(DashboardStats::compute(&t, &m, &p, today)), None),
        (t, m, p) => {
            let errors = [t.err(), m.err(), p.err()];
            for e in errors.iter().flatten() {
                tracing::debug!("dashboard read failed: {}", e);
            }
            (LoadState::Failed, Some(Notice::error(LOAD_FAILED)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use crate::testing::{api, member, session_for, url, user_json};
    use clubsport_shared::Role;
    use serde_json::json;

    fn day(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[tokio::test]
    async fn test_stats_combine_three_reads() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Get,
            &url("/tournaments"),
            200,
            json!([
                {"id": "t1", "nom": "A", "date_debut": "2025-01-01", "date_fin": "2025-01-02", "statut": "à_venir"},
                {"id": "t2", "nom": "B", "date_debut": "2025-01-01", "date_fin": "2025-01-02", "statut": "en_cours"},
                {"id": "t3", "nom": "C", "date_debut": "2024-01-01", "date_fin": "2024-01-02", "statut": "terminé"}
            ]),
        );
        api.client().mock_response(
            HttpMethod::Get,
            &url("/matches"),
            200,
            json!([
                {"id": "m1", "equipe_a": "A", "equipe_b": "B", "date": "2025-06-10", "heure": "18:00", "lieu": "Salle"},
                {"id": "m2", "equipe_a": "A", "equipe_b": "C", "date": "2025-06-01", "heure": "18:00", "lieu": "Salle"},
                {"id": "m3", "equipe_a": "A", "equipe_b": "D", "date": "2025-05-01", "heure": "18:00", "lieu": "Salle", "score_a": 3, "score_b": 1}
            ]),
        );
        let mut me = user_json("u1", 87);
        me["achievements"] = json!([{"id": "b1", "icone": "🏅", "nom": "Premier match", "description": "Jouer un match"}]);
        api.client()
            .mock_response(HttpMethod::Get, &url("/users/me"), 200, me);
        let session = session_for(member("u1", Role::Member));

        let (state, notice) = load(&api, &session, day("2025-06-01")).await;
        assert!(notice.is_none());
        assert_eq!(
            state,
            LoadState::Ready(DashboardStats {
                active_tournaments: 2,
                upcoming_matches: 2,
                points: 87,
                achievements: 1,
            })
        );
    }

    #[tokio::test]
    async fn test_one_failed_read_fails_the_page() {
        let api = api();
        api.client()
            .mock_response(HttpMethod::Get, &url("/tournaments"), 200, json!([]));
        api.client()
            .mock_response(HttpMethod::Get, &url("/matches"), 200, json!([]));
        // /users/me unmocked: 404
        let session = session_for(member("u1", Role::Member));

        let (state, notice) = load(&api, &session, day("2025-06-01")).await;
        assert_eq!(state, LoadState::Failed);
        assert_eq!(notice.map(|n| n.message), Some(LOAD_FAILED.to_string()));
        assert_eq!(api.client().requests.borrow().len(), 3);
    }
}
