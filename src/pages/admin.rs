//! Admin panel: tournament, match and news publication. Training slots are
//! managed through [`super::training`].

use clubsport_shared::date::parse_date;
use clubsport_shared::{CreateMatch, CreateNews, CreateTournament};

use super::{ActionError, ActionResult, Notice};
use crate::api::ClubApi;
use crate::request::HttpClient;
use crate::session::Session;

pub const MIN_PARTICIPANTS: u32 = 2;

fn required(fields: &[&str]) -> ActionResult<()> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ActionError::blocked("Veuillez remplir tous les champs obligatoires"));
    }
    Ok(())
}

pub fn validate_tournament(form: &CreateTournament) -> ActionResult<()> {
    required(&[form.nom.as_str(), form.date_debut.as_str(), form.date_fin.as_str()])?;
    let (Some(debut), Some(fin)) = (parse_date(&form.date_debut), parse_date(&form.date_fin)) else {
        return Err(ActionError::blocked("Dates invalides"));
    };
    if fin < debut {
        return Err(ActionError::blocked(
            "La date de fin doit être postérieure à la date de début",
        ));
    }
    if form.max_participants < MIN_PARTICIPANTS {
        return Err(ActionError::blocked(format!(
            "Un tournoi doit accepter au moins {} participants",
            MIN_PARTICIPANTS
        )));
    }
    Ok(())
}

pub fn validate_match(form: &CreateMatch) -> ActionResult<()> {
    required(&[
        form.equipe_a.as_str(),
        form.equipe_b.as_str(),
        form.date.as_str(),
        form.heure.as_str(),
        form.lieu.as_str(),
    ])?;
    if parse_date(&form.date).is_none() {
        return Err(ActionError::blocked("Date invalide"));
    }
    if form.equipe_a.trim().eq_ignore_ascii_case(form.equipe_b.trim()) {
        return Err(ActionError::blocked("Les deux équipes doivent être différentes"));
    }
    Ok(())
}

pub fn validate_news(form: &CreateNews) -> ActionResult<()> {
    required(&[form.titre.as_str(), form.contenu.as_str()])
}

pub async fn create_tournament<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
    form: &CreateTournament,
) -> ActionResult<Notice> {
    validate_tournament(form)?;
    api.send(session, form)
        .await
        .map(|_| Notice::success("Tournoi créé avec succès!"))
        .map_err(ActionError::api("Erreur lors de la création du tournoi"))
}

pub async fn create_match<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
    form: &CreateMatch,
) -> ActionResult<Notice> {
    validate_match(form)?;
    // an empty tournament selection means a friendly match
    let form = CreateMatch {
        tournament_id: form
            .tournament_id
            .clone()
            .filter(|id| !id.trim().is_empty()),
        ..form.clone()
    };
    api.send(session, &form)
        .await
        .map(|_| Notice::success("Match créé avec succès!"))
        .map_err(ActionError::api("Erreur lors de la création du match"))
}

pub async fn create_news<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
    form: &CreateNews,
) -> ActionResult<Notice> {
    validate_news(form)?;
    let form = CreateNews {
        image_url: form.image_url.clone().filter(|u| !u.trim().is_empty()),
        ..form.clone()
    };
    api.send(session, &form)
        .await
        .map(|_| Notice::success("Actualité publiée avec succès!"))
        .map_err(ActionError::api("Erreur lors de la publication de l'actualité"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use crate::testing::{api, member, session_for, url};
    use clubsport_shared::{DEFAULT_MATCH_VENUE, Role};
    use serde_json::{Value, json};

    fn tournament_form() -> CreateTournament {
        CreateTournament {
            nom: "Open de printemps".into(),
            description: "Tournoi interne".into(),
            date_debut: "2025-04-12".into(),
            date_fin: "2025-04-13".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_tournament_validation() {
        assert!(validate_tournament(&tournament_form()).is_ok());

        let mut reversed = tournament_form();
        reversed.date_fin = "2025-04-11".into();
        assert!(validate_tournament(&reversed).is_err());

        let mut tiny = tournament_form();
        tiny.max_participants = 1;
        assert!(validate_tournament(&tiny).is_err());

        let mut unnamed = tournament_form();
        unnamed.nom = " ".into();
        assert_eq!(
            validate_tournament(&unnamed).unwrap_err().message(),
            "Veuillez remplir tous les champs obligatoires"
        );

        let mut same_day = tournament_form();
        same_day.date_fin = same_day.date_debut.clone();
        assert!(validate_tournament(&same_day).is_ok());
    }

    #[tokio::test]
    async fn test_create_tournament_posts_defaults() {
        let api = api();
        let admin = session_for(member("adm", Role::Admin));
        api.client().mock_response(
            HttpMethod::Post,
            &url("/tournaments"),
            200,
            json!({"id": "t9", "nom": "Open de printemps", "date_debut": "2025-04-12",
                   "date_fin": "2025-04-13", "participants": [], "statut": "à_venir"}),
        );

        create_tournament(&api, &admin, &tournament_form()).await.unwrap();
        let reqs = api.client().requests.borrow();
        let body: Value = serde_json::from_str(reqs[0].3.as_deref().unwrap()).unwrap();
        assert_eq!(body["max_participants"], json!(16));
    }

    #[tokio::test]
    async fn test_create_match_defaults_and_friendly() {
        let api = api();
        let admin = session_for(member("adm", Role::Admin));
        api.client().mock_response(
            HttpMethod::Post,
            &url("/matches"),
            200,
            json!({"id": "m9", "equipe_a": "TCS", "equipe_b": "ASV", "date": "2025-05-03",
                   "heure": "15:00", "lieu": DEFAULT_MATCH_VENUE}),
        );
        let form = CreateMatch {
            tournament_id: Some(String::new()),
            equipe_a: "TCS".into(),
            equipe_b: "ASV".into(),
            date: "2025-05-03".into(),
            heure: "15:00".into(),
            ..Default::default()
        };

        create_match(&api, &admin, &form).await.unwrap();
        let reqs = api.client().requests.borrow();
        let body: Value = serde_json::from_str(reqs[0].3.as_deref().unwrap()).unwrap();
        assert_eq!(body["lieu"], json!("Salle TCS Suzini"));
        assert!(body.get("tournament_id").is_none());
    }

    #[tokio::test]
    async fn test_match_between_same_team_is_refused() {
        let api = api();
        let admin = session_for(member("adm", Role::Admin));
        let form = CreateMatch {
            equipe_a: "TCS".into(),
            equipe_b: "tcs".into(),
            date: "2025-05-03".into(),
            heure: "15:00".into(),
            ..Default::default()
        };
        assert!(create_match(&api, &admin, &form).await.unwrap_err().is_blocked());
        assert!(api.client().requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_create_news_reports_server_detail() {
        let api = api();
        let admin = session_for(member("adm", Role::Admin));
        api.client().mock_response(
            HttpMethod::Post,
            &url("/news"),
            403,
            json!({"detail": "Accès réservé aux administrateurs"}),
        );
        let form = CreateNews {
            titre: "Assemblée générale".into(),
            contenu: "Rendez-vous samedi.".into(),
            image_url: Some("  ".into()),
        };

        let err = create_news(&api, &admin, &form).await.unwrap_err();
        assert_eq!(err.message(), "Accès réservé aux administrateurs");
        let reqs = api.client().requests.borrow();
        let body: Value = serde_json::from_str(reqs[0].3.as_deref().unwrap()).unwrap();
        assert!(body.get("image_url").is_none());
    }
}
