use crate::{
    AuthResponse, CreateMatch, CreateNews, CreateTournament, ForgotPasswordRequest, LoginRequest,
    Match, MessageResponse, NewsArticle, ReferentRegisterRequest, RegisterRequest,
    ResetPasswordRequest, Tournament, TrainingSession, TrainingSessionInput, User,
    VerifyReferentRequest,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether the request value is sent as a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Fields marked `#[serde(skip)]` only feed the path; everything else is the JSON body.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the bearer token is attached.
    const AUTHENTICATED: bool = true;
    /// The URL path relative to the API root.
    fn path(&self) -> String;
}

/// Percent-encodes a single path segment (RFC 3986 unreserved set kept as is).
pub fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for b in segment.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

macro_rules! static_endpoint {
    ($ty:ty, $method:ident, $path:literal, $resp:ty) => {
        impl ApiRequest for $ty {
            type Response = $resp;
            const METHOD: HttpMethod = HttpMethod::$method;
            fn path(&self) -> String {
                $path.to_string()
            }
        }
    };
    ($ty:ty, $method:ident, $path:literal, $resp:ty, public) => {
        impl ApiRequest for $ty {
            type Response = $resp;
            const METHOD: HttpMethod = HttpMethod::$method;
            const AUTHENTICATED: bool = false;
            fn path(&self) -> String {
                $path.to_string()
            }
        }
    };
}

// =========================================================
// Authentication
// =========================================================

static_endpoint!(LoginRequest, Post, "/auth/login", AuthResponse, public);
static_endpoint!(RegisterRequest, Post, "/auth/register", AuthResponse, public);
static_endpoint!(
    ReferentRegisterRequest,
    Post,
    "/auth/register-referent",
    MessageResponse,
    public
);
static_endpoint!(
    VerifyReferentRequest,
    Post,
    "/auth/verify-referent",
    AuthResponse,
    public
);
static_endpoint!(
    ForgotPasswordRequest,
    Post,
    "/auth/forgot-password",
    MessageResponse,
    public
);
static_endpoint!(
    ResetPasswordRequest,
    Post,
    "/auth/reset-password",
    MessageResponse,
    public
);

/// Profile of the session owner.
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentUser;
static_endpoint!(CurrentUser, Get, "/users/me", User);

/// Idempotent bootstrap of the reference data.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeedData;
static_endpoint!(SeedData, Post, "/seed-data", MessageResponse, public);

// =========================================================
// Tournaments & matches
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ListTournaments;
static_endpoint!(ListTournaments, Get, "/tournaments", Vec<Tournament>);
static_endpoint!(CreateTournament, Post, "/tournaments", Tournament);

/// Registers the session owner; the body is an empty object.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterForTournament {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for RegisterForTournament {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/tournaments/{}/register", encode_segment(&self.id))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListMatches;
static_endpoint!(ListMatches, Get, "/matches", Vec<Match>);
static_endpoint!(CreateMatch, Post, "/matches", Match);

/// Licensed members ordered by points, highest first.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListRankings;
static_endpoint!(ListRankings, Get, "/rankings", Vec<User>);

// =========================================================
// Training schedule
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ListTrainingSessions;
static_endpoint!(
    ListTrainingSessions,
    Get,
    "/training-schedule",
    Vec<TrainingSession>
);

#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateTrainingSession(pub TrainingSessionInput);
static_endpoint!(
    CreateTrainingSession,
    Post,
    "/training-schedule",
    TrainingSession
);

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTrainingSession {
    #[serde(skip)]
    pub id: String,
    #[serde(flatten)]
    pub input: TrainingSessionInput,
}

impl ApiRequest for UpdateTrainingSession {
    type Response = TrainingSession;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/training-schedule/{}", encode_segment(&self.id))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTrainingSession {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for DeleteTrainingSession {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/training-schedule/{}", encode_segment(&self.id))
    }
}

// =========================================================
// News
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ListNews;
static_endpoint!(ListNews, Get, "/news", Vec<NewsArticle>);
static_endpoint!(CreateNews, Post, "/news", NewsArticle);

// =========================================================
// Referent member management
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ListMembers;
static_endpoint!(ListMembers, Get, "/referent/users", Vec<User>);

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleLicense {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for ToggleLicense {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/referent/users/{}/toggle-license", encode_segment(&self.id))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteMember {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for DeleteMember {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/referent/users/{}", encode_segment(&self.id))
    }
}
