//! Fixtures shared by the unit tests.

use clubsport_shared::{LicenceType, Role, Tournament, TournamentStatus, User};
use serde_json::{Value, json};

use crate::api::ClubApi;
use crate::config::ClientConfig;
use crate::request::MockHttpClient;
use crate::session::Session;

pub const BASE: &str = "http://club.test";

pub fn url(path: &str) -> String {
    format!("{}/api{}", BASE, path)
}

pub fn api() -> ClubApi<MockHttpClient> {
    ClubApi::new(
        MockHttpClient::new(),
        ClientConfig::with_base_url(Some(BASE)),
    )
}

pub fn member(id: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        email: format!("{}@club.fr", id),
        nom: "Dupont".to_string(),
        prenom: "Alex".to_string(),
        role,
        type_licence: LicenceType::Competition,
        est_licencie: true,
        points: 10,
        participations: 1,
        date_creation: None,
        achievements: Vec::new(),
    }
}

pub fn session_for(user: User) -> Session {
    Session::new(format!("token-{}", user.id), user)
}

pub fn user_json(id: &str, points: i64) -> Value {
    json!({
        "id": id,
        "email": format!("{}@club.fr", id),
        "nom": "Nom",
        "prenom": id.to_uppercase(),
        "role": "user",
        "type_licence": "competition",
        "est_licencie": true,
        "points": points,
        "participations": 0,
        "achievements": []
    })
}

pub fn tournament(id: &str, participants: &[&str], max: u32, statut: TournamentStatus) -> Tournament {
    Tournament {
        id: id.to_string(),
        nom: format!("Tournoi {}", id),
        description: String::new(),
        date_debut: "2025-05-01".to_string(),
        date_fin: "2025-05-02".to_string(),
        max_participants: max,
        participants: participants.iter().map(|p| p.to_string()).collect(),
        statut,
    }
}
