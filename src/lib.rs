//! Client core of the club membership site
//!
//! Platform-neutral: the HTTP transport and the key-value storage are traits,
//! implemented by the browser frontend, by reqwest (`native` feature) and by
//! the test mocks.
//! - `api` / `request`: typed gateway to the REST backend
//! - `session` / `storage`: session store and its persistence
//! - `guard`: routes and role-based access
//! - `boot`: start-up sequence
//! - `pages`: loading, derived views and mutations of each page

pub mod api;
pub mod boot;
pub mod config;
pub mod error;
pub mod guard;
pub mod pages;
pub mod request;
pub mod session;
pub mod storage;

#[cfg(test)]
mod testing;

pub use clubsport_shared as shared;

pub use api::ClubApi;
pub use boot::{BootReport, RefreshOutcome, bootstrap};
pub use config::{ClientConfig, RefreshFailurePolicy};
pub use error::{ApiError, ApiErrorKind, ApiResult, StorageError};
pub use guard::{Access, AppRoute, GuardDecision, Viewer, guard, nav_links};
pub use request::{HttpClient, HttpMethod, HttpRequest, HttpResponse, TransportError};
pub use session::{Session, SessionStore};
pub use storage::{KeyValueStore, MemoryStore};
