use chrono::NaiveDate;
use clubsport_shared::Match;
use clubsport_shared::date::parse_date;
use clubsport_shared::protocol::ListMatches;

use super::{LoadState, Notice, fetch};
use crate::api::ClubApi;
use crate::request::HttpClient;
use crate::session::Session;

pub const LOAD_FAILED: &str = "Erreur lors du chargement des matchs";

/// Matches split for display: upcoming soonest first, played most recent first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchBoard {
    pub upcoming: Vec<Match>,
    pub played: Vec<Match>,
}

impl MatchBoard {
    /// A match is played once both scores are known, whatever its date.
    pub fn build(matches: Vec<Match>) -> Self {
        let (mut played, mut upcoming): (Vec<Match>, Vec<Match>) =
            matches.into_iter().partition(Match::is_played);
        upcoming.sort_by_key(sort_key);
        played.sort_by_key(sort_key);
        played.reverse();
        Self { upcoming, played }
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.played.is_empty()
    }
}

// Unparseable dates sort last among upcoming matches.
fn sort_key(m: &Match) -> (NaiveDate, String) {
    (
        parse_date(&m.date).unwrap_or(NaiveDate::MAX),
        m.heure.clone(),
    )
}

pub async fn load<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
) -> (LoadState<MatchBoard>, Option<Notice>) {
    let (state, notice) = fetch(api, session, &ListMatches, LOAD_FAILED).await;
    (state.map(MatchBoard::build), notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use crate::testing::{api, member, session_for, url};
    use clubsport_shared::Role;
    use serde_json::json;

    #[tokio::test]
    async fn test_board_splits_and_orders() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Get,
            &url("/matches"),
            200,
            json!([
                {"id": "late", "equipe_a": "A", "equipe_b": "B", "date": "2025-07-01", "heure": "20:00", "lieu": "Salle"},
                {"id": "old", "equipe_a": "A", "equipe_b": "C", "date": "2025-01-10", "heure": "18:00", "lieu": "Salle", "score_a": 2, "score_b": 3},
                {"id": "soon", "equipe_a": "A", "equipe_b": "D", "date": "2025-06-01", "heure": "18:00", "lieu": "Salle", "score_a": null, "score_b": null},
                {"id": "recent", "equipe_a": "A", "equipe_b": "E", "date": "2025-03-01", "heure": "18:00", "lieu": "Salle", "score_a": 3, "score_b": 0}
            ]),
        );
        let session = session_for(member("u1", Role::Member));

        let (state, notice) = load(&api, &session).await;
        assert!(notice.is_none());
        let board = state.ready().unwrap();
        let ids = |v: &[Match]| v.iter().map(|m| m.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&board.upcoming), ["soon", "late"]);
        assert_eq!(ids(&board.played), ["recent", "old"]);
        assert_eq!(board.played[0].score_line(), "3 - 0");
    }

    #[tokio::test]
    async fn test_failure_renders_empty_state() {
        let api = api();
        api.client()
            .mock_unreachable(HttpMethod::Get, &url("/matches"));
        let session = session_for(member("u1", Role::Member));

        let (state, notice) = load(&api, &session).await;
        assert_eq!(state, LoadState::Failed);
        assert_eq!(notice, Some(Notice::error(LOAD_FAILED)));
    }
}
