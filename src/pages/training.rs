//! Weekly training schedule: licence gating, day grouping and the admin
//! create/update/delete actions.

use clubsport_shared::date::{FRENCH_WEEKDAYS, parse_hour, weekday_index};
use clubsport_shared::protocol::{
    CreateTrainingSession, DeleteTrainingSession, ListTrainingSessions, UpdateTrainingSession,
};
use clubsport_shared::{LicenceRequirement, LicenceType, TrainingSession, TrainingSessionInput};

use super::{ActionError, ActionResult, LoadState, Notice, fetch};
use crate::api::ClubApi;
use crate::request::HttpClient;
use crate::session::Session;

pub const LOAD_FAILED: &str = "Erreur lors du chargement des horaires";
pub const RESERVED: &str = "Réservé aux licenciés compétition";

/// Whether a viewer with `licence` may attend `session`.
///
/// Unknown licence (no profile) only opens the sessions meant for everyone.
pub fn can_access(session: &TrainingSession, licence: Option<LicenceType>) -> bool {
    match session.licence_requise {
        LicenceRequirement::Tous => true,
        LicenceRequirement::Competition => licence == Some(LicenceType::Competition),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingDay {
    pub jour: &'static str,
    pub sessions: Vec<TrainingSession>,
}

/// Groups by weekday, Monday first, each day ordered by start time. Days
/// without sessions are left out, and so are sessions on an unknown day.
/// Sessions whose start hour does not parse go last in their day.
pub fn group_by_day(sessions: &[TrainingSession]) -> Vec<TrainingDay> {
    let mut days: Vec<TrainingDay> = FRENCH_WEEKDAYS
        .iter()
        .map(|&jour| TrainingDay {
            jour,
            sessions: Vec::new(),
        })
        .collect();

    for s in sessions {
        match weekday_index(&s.jour) {
            Some(i) => days[i].sessions.push(s.clone()),
            None => tracing::debug!(jour = %s.jour, "training session on unknown day"),
        }
    }
    for day in &mut days {
        day.sessions.sort_by_key(|s| {
            let start = parse_hour(&s.heure_debut);
            (start.is_none(), start)
        });
    }
    days.retain(|d| !d.sessions.is_empty());
    days
}

pub async fn load<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
) -> (LoadState<Vec<TrainingSession>>, Option<Notice>) {
    fetch(api, session, &ListTrainingSessions, LOAD_FAILED).await
}

// =========================================================
// Admin actions
// =========================================================

fn validate(input: &TrainingSessionInput) -> ActionResult<()> {
    if weekday_index(&input.jour).is_none() {
        return Err(ActionError::blocked("Choisissez un jour de la semaine"));
    }
    if input.heure_debut.trim().is_empty() || input.heure_fin.trim().is_empty() {
        return Err(ActionError::blocked("Indiquez les horaires de la séance"));
    }
    let (Some(debut), Some(fin)) = (parse_hour(&input.heure_debut), parse_hour(&input.heure_fin)) else {
        return Err(ActionError::blocked("Horaires invalides (format HH:MM)"));
    };
    if fin <= debut {
        return Err(ActionError::blocked(
            "L'heure de fin doit être après l'heure de début",
        ));
    }
    if input.kind.trim().is_empty() {
        return Err(ActionError::blocked("Indiquez le type de séance"));
    }
    Ok(())
}

pub async fn create<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
    input: TrainingSessionInput,
) -> ActionResult<Notice> {
    validate(&input)?;
    api.send(session, &CreateTrainingSession(input))
        .await
        .map(|_| Notice::success("Séance ajoutée au planning"))
        .map_err(ActionError::api("Erreur lors de la création de la séance"))
}

pub async fn update<C: HttpClient>(
    api: &ClubApi<C>,
    session: &Session,
    id: &str,
    input: TrainingSessionInput,
) -> ActionResult<Notice> {
    validate(&input)?;
    let req = UpdateTrainingSession {
        id: id.to_string(),
        input,
    };
    api.send(session, &req)
        .await
        .map(|_| Notice::success("Séance modifiée"))
        .map_err(ActionError::api("Erreur lors de la modification de la séance"))
}

pub async fn delete<C: HttpClient>(api: &ClubApi<C>, session: &Session, id: &str) -> ActionResult<Notice> {
    let req = DeleteTrainingSession { id: id.to_string() };
    api.send(session, &req)
        .await
        .map(|_| Notice::success("Séance supprimée"))
        .map_err(ActionError::api("Erreur lors de la suppression de la séance"))
}
