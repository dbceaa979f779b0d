use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

// =========================================================
// Constants
// =========================================================

/// Token value of the visitor (trial) session. Never sent to the backend.
pub const GUEST_TOKEN: &str = "temp-guest-token";
/// Prefix the club puts in front of every referent secret code.
pub const REFERENT_CODE_PREFIX: &str = "TCS-REF-";
pub const DEFAULT_MAX_PARTICIPANTS: u32 = 16;
pub const DEFAULT_MATCH_VENUE: &str = "Salle TCS Suzini";

// =========================================================
// Members
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The backend spells the plain member role `"user"`.
    #[default]
    #[serde(rename = "user", alias = "member")]
    Member,
    Referent,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Member => "Membre",
            Role::Referent => "Référent",
            Role::Admin => "Administrateur",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LicenceType {
    #[default]
    Competition,
    JeuLibre,
}

impl LicenceType {
    pub fn label(&self) -> &'static str {
        match self {
            LicenceType::Competition => "Compétition",
            LicenceType::JeuLibre => "Jeu libre",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub icone: String,
    pub nom: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_obtenu: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub nom: String,
    pub prenom: String,
    #[serde(default)]
    pub role: Role,
    pub type_licence: LicenceType,
    pub est_licencie: bool,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub participations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_creation: Option<String>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }
}

// =========================================================
// Club activity
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TournamentStatus {
    #[default]
    #[serde(rename = "à_venir", alias = "inscriptions_ouvertes")]
    Upcoming,
    #[serde(rename = "en_cours")]
    InProgress,
    #[serde(rename = "terminé")]
    Finished,
}

impl TournamentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "À venir",
            TournamentStatus::InProgress => "En cours",
            TournamentStatus::Finished => "Terminé",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: String,
    pub nom: String,
    #[serde(default)]
    pub description: String,
    pub date_debut: String,
    pub date_fin: String,
    #[serde(default = "default_max_participants")]
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub statut: TournamentStatus,
}

fn default_max_participants() -> u32 {
    DEFAULT_MAX_PARTICIPANTS
}

impl Tournament {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }

    pub fn places_left(&self) -> u32 {
        self.max_participants
            .saturating_sub(self.participants.len() as u32)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<String>,
    pub equipe_a: String,
    pub equipe_b: String,
    pub date: String,
    pub heure: String,
    pub lieu: String,
    #[serde(default)]
    pub score_a: Option<u32>,
    #[serde(default)]
    pub score_b: Option<u32>,
}

impl Match {
    pub fn is_played(&self) -> bool {
        self.score_a.is_some() && self.score_b.is_some()
    }

    /// `"3 - 1"` once played, `"vs"` before.
    pub fn score_line(&self) -> String {
        match (self.score_a, self.score_b) {
            (Some(a), Some(b)) => format!("{} - {}", a, b),
            _ => "vs".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LicenceRequirement {
    #[default]
    Tous,
    Competition,
}

impl LicenceRequirement {
    pub fn label(&self) -> &'static str {
        match self {
            LicenceRequirement::Tous => "Tous",
            LicenceRequirement::Competition => "Compétition",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    pub id: String,
    pub jour: String,
    pub heure_debut: String,
    pub heure_fin: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub licence_requise: LicenceRequirement,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    pub titre: String,
    pub contenu: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auteur_id: Option<String>,
    pub auteur_nom: String,
    pub date_publication: String,
}

// =========================================================
// Request / response bodies
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub nom: String,
    pub prenom: String,
    pub type_licence: LicenceType,
    pub est_licencie: bool,
}

impl Default for RegisterRequest {
    /// A new registration is assumed licensed until the member says otherwise.
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            nom: String::new(),
            prenom: String::new(),
            type_licence: LicenceType::Competition,
            est_licencie: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferentRegisterRequest {
    pub email: String,
    pub password: String,
    pub nom: String,
    pub prenom: String,
    pub code_secret: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifyReferentRequest {
    pub email: String,
    pub code_verification: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTournament {
    pub nom: String,
    pub description: String,
    pub date_debut: String,
    pub date_fin: String,
    pub max_participants: u32,
}

impl Default for CreateTournament {
    fn default() -> Self {
        Self {
            nom: String::new(),
            description: String::new(),
            date_debut: String::new(),
            date_fin: String::new(),
            max_participants: DEFAULT_MAX_PARTICIPANTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<String>,
    pub equipe_a: String,
    pub equipe_b: String,
    pub date: String,
    pub heure: String,
    pub lieu: String,
}

impl Default for CreateMatch {
    fn default() -> Self {
        Self {
            tournament_id: None,
            equipe_a: String::new(),
            equipe_b: String::new(),
            date: String::new(),
            heure: String::new(),
            lieu: DEFAULT_MATCH_VENUE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateNews {
    pub titre: String,
    pub contenu: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body of both training-schedule create (POST) and update (PUT).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingSessionInput {
    pub jour: String,
    pub heure_debut: String,
    pub heure_fin: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub licence_requise: LicenceRequirement,
    pub description: String,
}

impl From<&TrainingSession> for TrainingSessionInput {
    fn from(s: &TrainingSession) -> Self {
        Self {
            jour: s.jour.clone(),
            heure_debut: s.heure_debut.clone(),
            heure_fin: s.heure_fin.clone(),
            kind: s.kind.clone(),
            licence_requise: s.licence_requise,
            description: s.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Loose acknowledgement body (`{"message": ...}`), also used for empty 2xx bodies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tournament(participants: usize, max: u32) -> Tournament {
        Tournament {
            id: "t1".into(),
            nom: "Open".into(),
            description: String::new(),
            date_debut: "2025-03-01".into(),
            date_fin: "2025-03-02".into(),
            max_participants: max,
            participants: (0..participants).map(|i| format!("u{}", i)).collect(),
            statut: TournamentStatus::Upcoming,
        }
    }

    #[test]
    fn test_member_role_uses_backend_spelling() {
        assert_eq!(serde_json::to_value(Role::Member).unwrap(), json!("user"));
        let role: Role = serde_json::from_value(json!("member")).unwrap();
        assert_eq!(role, Role::Member);
        let role: Role = serde_json::from_value(json!("referent")).unwrap();
        assert_eq!(role, Role::Referent);
    }

    #[test]
    fn test_user_defaults_missing_fields() {
        let user: User = serde_json::from_value(json!({
            "id": "a",
            "email": "a@club.fr",
            "nom": "Martin",
            "prenom": "Léa",
            "type_licence": "jeu_libre",
            "est_licencie": false
        }))
        .unwrap();
        assert_eq!(user.role, Role::Member);
        assert_eq!(user.points, 0);
        assert!(user.achievements.is_empty());
        assert_eq!(user.full_name(), "Léa Martin");
    }

    #[test]
    fn test_tournament_status_spellings() {
        let s: TournamentStatus = serde_json::from_value(json!("inscriptions_ouvertes")).unwrap();
        assert_eq!(s, TournamentStatus::Upcoming);
        let s: TournamentStatus = serde_json::from_value(json!("terminé")).unwrap();
        assert_eq!(s, TournamentStatus::Finished);
        assert_eq!(serde_json::to_value(TournamentStatus::Upcoming).unwrap(), json!("à_venir"));
    }

    #[test]
    fn test_tournament_capacity() {
        assert!(!tournament(3, 4).is_full());
        assert!(tournament(4, 4).is_full());
        assert_eq!(tournament(1, 4).places_left(), 3);
        assert_eq!(tournament(6, 4).places_left(), 0);
        assert!(tournament(2, 4).has_participant("u1"));
    }

    #[test]
    fn test_training_kind_field_name() {
        let input = TrainingSessionInput {
            jour: "Lundi".into(),
            kind: "Entraînement dirigé".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["type"], json!("Entraînement dirigé"));
        assert_eq!(value["licence_requise"], json!("tous"));
    }

    #[test]
    fn test_match_score_line() {
        let mut m: Match = serde_json::from_value(json!({
            "id": "m1", "equipe_a": "TCS", "equipe_b": "ASV",
            "date": "2025-01-10", "heure": "20:00", "lieu": "Salle",
            "score_a": null, "score_b": null
        }))
        .unwrap();
        assert!(!m.is_played());
        assert_eq!(m.score_line(), "vs");
        m.score_a = Some(3);
        m.score_b = Some(1);
        assert_eq!(m.score_line(), "3 - 1");
    }
}
