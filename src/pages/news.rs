use clubsport_shared::NewsArticle;
use clubsport_shared::date::parse_date;
use clubsport_shared::protocol::ListNews;

use super::{LoadState, Notice, fetch};
use crate::api::ClubApi;
use crate::request::HttpClient;
use crate::session::Session;

pub const LOAD_FAILED: &str = "Erreur lors du chargement des actualités";
pub const EXCERPT_CHARS: usize = 200;

/// Newest first. Articles with an unreadable date go last, keeping their order.
pub fn newest_first(mut articles: Vec<NewsArticle>) -> Vec<NewsArticle> {
    articles.sort_by(|a, b| {
        parse_date(&b.date_publication)
            .cmp(&parse_date(&a.date_publication))
            .then_with(|| b.date_publication.cmp(&a.date_publication))
    });
    articles
}

/// First `max_chars` characters of `text`, cut at a word boundary, with an ellipsis.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let cut = match cut.rfind(char::is_whitespace) {
        Some(i) if i > 0 => &cut[..i],
        _ => cut.as_str(),
    };
    format!("{}…", cut.trim_end())
}

pub async fn load<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
) -> (LoadState<Vec<NewsArticle>>, Option<Notice>) {
    let (state, notice) = fetch(api, session, &ListNews, LOAD_FAILED).await;
    (state.map(newest_first), notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use crate::testing::{api, member, session_for, url};
    use clubsport_shared::Role;
    use serde_json::json;

    #[tokio::test]
    async fn test_articles_newest_first() {
        let api = api();
        api.client().mock_response(
            HttpMethod::Get,
            &url("/news"),
            200,
            json!([
                {"id": "n1", "titre": "Vieux", "contenu": "...", "auteur_nom": "Admin", "date_publication": "2025-01-05T10:00:00+00:00"},
                {"id": "n2", "titre": "Récent", "contenu": "...", "auteur_nom": "Admin", "date_publication": "2025-03-01T08:00:00"},
                {"id": "n3", "titre": "Sans date", "contenu": "...", "auteur_nom": "Admin", "date_publication": ""}
            ]),
        );
        let session = session_for(member("u1", Role::Member));

        let (state, _) = load(&api, &session).await;
        let ids: Vec<&str> = state.items().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["n2", "n1", "n3"]);
    }

    #[test]
    fn test_excerpt_cuts_on_word() {
        assert_eq!(excerpt("Court", 10), "Court");
        assert_eq!(excerpt("Le club ouvre ses portes", 12), "Le club…");
        assert_eq!(excerpt("Inscriptionsouvertes", 5), "Inscr…");
    }
}
