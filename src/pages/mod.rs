//! Page logic
//!
//! Everything a page does besides rendering: what it loads, how it derives
//! its view, which mutations it allows. Every page follows the same contract:
//! reads scoped to the session, a loading state while pending, a toast and an
//! empty state on failure, and a single write per action followed by a
//! re-fetch of the affected collection.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod matches;
pub mod news;
pub mod profile;
pub mod rankings;
pub mod referent;
pub mod tournaments;
pub mod training;

use clubsport_shared::protocol::ApiRequest;
use thiserror::Error;

use crate::api::ClubApi;
use crate::error::ApiError;
use crate::request::HttpClient;
use crate::session::Session;

// =========================================================
// Load state
// =========================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    /// The read failed; the page renders its empty state
    Failed,
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Ready(v) => LoadState::Ready(f(v)),
            LoadState::Failed => LoadState::Failed,
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Loaded items, empty while loading or after a failure.
    pub fn items(&self) -> &[T] {
        match self {
            LoadState::Ready(v) => v,
            _ => &[],
        }
    }
}

// =========================================================
// Notices
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

// =========================================================
// Action errors
// =========================================================

/// Why a user action did not go through.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// Refused locally, nothing was sent
    #[error("{0}")]
    Blocked(String),
    /// The server call failed; `fallback` is shown when the server gave no detail
    #[error("{error}")]
    Api {
        error: ApiError,
        fallback: &'static str,
    },
}

impl ActionError {
    pub fn blocked(message: impl Into<String>) -> Self {
        ActionError::Blocked(message.into())
    }

    pub fn api(fallback: &'static str) -> impl FnOnce(ApiError) -> Self {
        move |error| ActionError::Api { error, fallback }
    }

    /// Text for the toast.
    pub fn message(&self) -> String {
        match self {
            ActionError::Blocked(msg) => msg.clone(),
            ActionError::Api { error, fallback } => error.user_message(fallback),
        }
    }

    pub fn notice(&self) -> Notice {
        Notice::error(self.message())
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, ActionError::Blocked(_))
    }
}

pub type ActionResult<T> = std::result::Result<T, ActionError>;

/// Runs a page read. On failure the page gets [`LoadState::Failed`] and an
/// error toast carrying `fallback`.
pub async fn fetch<C, R>(
    api: &ClubApi<C>,
    session: &Session,
    req: &R,
    fallback: &str,
) -> (LoadState<R::Response>, Option<Notice>)
where
    C: HttpClient,
    R: ApiRequest,
{
    match api.send(session, req).await {
        Ok(data) => (LoadState::Ready(data), None),
        Err(e) => {
            tracing::debug!(path = %req.path(), "page read failed: {}", e);
            (LoadState::Failed, Some(Notice::error(fallback)))
        }
    }
}
