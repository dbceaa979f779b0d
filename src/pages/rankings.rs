use clubsport_shared::User;
use clubsport_shared::protocol::ListRankings;

use super::{LoadState, Notice, fetch};
use crate::api::ClubApi;
use crate::request::HttpClient;
use crate::session::Session;

pub const LOAD_FAILED: &str = "Erreur lors du chargement du classement";
pub const SELF_MARK: &str = "(Vous)";
const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    /// 1-based, in server order
    pub position: usize,
    pub medal: Option<&'static str>,
    pub is_self: bool,
    pub display_name: String,
    pub points: i64,
    pub user: User,
}

impl RankingRow {
    /// Name with the `(Vous)` mark on the viewer's own row.
    pub fn label(&self) -> String {
        if self.is_self {
            format!("{} {}", self.display_name, SELF_MARK)
        } else {
            self.display_name.clone()
        }
    }
}

/// Rows in the order the server ranked them; the client never re-sorts.
pub fn rows(users: Vec<User>, session: &Session) -> Vec<RankingRow> {
    let me = session.user_id();
    users
        .into_iter()
        .enumerate()
        .map(|(i, user)| RankingRow {
            position: i + 1,
            medal: MEDALS.get(i).copied(),
            is_self: me == Some(user.id.as_str()),
            display_name: display_name(&user),
            points: user.points,
            user,
        })
        .collect()
}

fn display_name(user: &User) -> String {
    let name = user.full_name();
    let name = name.trim();
    if name.is_empty() {
        user.id.clone()
    } else {
        name.to_string()
    }
}

pub async fn load<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
) -> (LoadState<Vec<RankingRow>>, Option<Notice>) {
    let (state, notice) = fetch(api, session, &ListRankings, LOAD_FAILED).await;
    (state.map(|users| rows(users, session)), notice)
}
