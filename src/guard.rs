//! Route definitions and access guard
//!
//! Pure domain logic with no DOM dependency: the browser router asks
//! [`guard`] on every navigation and follows the decision.

use std::fmt::Display;

use clubsport_shared::Role;

use crate::session::Session;

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    #[default]
    Login,
    ResetPassword,
    Dashboard,
    Tournaments,
    Matches,
    Rankings,
    Training,
    News,
    Profile,
    Admin,
    Referent,
    NotFound,
}

impl AppRoute {
    /// Parses a URL path. Query string, fragment and trailing slash are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("/");
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        match path {
            "/login" => Self::Login,
            "/reset-password" => Self::ResetPassword,
            "/" => Self::Dashboard,
            "/tournaments" => Self::Tournaments,
            "/matches" => Self::Matches,
            "/rankings" => Self::Rankings,
            "/training" => Self::Training,
            "/news" => Self::News,
            "/profile" => Self::Profile,
            "/admin" => Self::Admin,
            "/referent" => Self::Referent,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::ResetPassword => "/reset-password",
            Self::Dashboard => "/",
            Self::Tournaments => "/tournaments",
            Self::Matches => "/matches",
            Self::Rankings => "/rankings",
            Self::Training => "/training",
            Self::News => "/news",
            Self::Profile => "/profile",
            Self::Admin => "/admin",
            Self::Referent => "/referent",
            Self::NotFound => "/404",
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Self::Login => Access::GuestOnly,
            Self::ResetPassword | Self::NotFound => Access::Public,
            Self::Admin => Access::Role(Role::Admin),
            Self::Referent => Access::Role(Role::Referent),
            _ => Access::Authenticated,
        }
    }

    /// Navbar label
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Connexion",
            Self::ResetPassword => "Réinitialisation du mot de passe",
            Self::Dashboard => "Tableau de bord",
            Self::Tournaments => "Tournois",
            Self::Matches => "Matchs",
            Self::Rankings => "Classement",
            Self::Training => "Entraînements",
            Self::News => "Actualités",
            Self::Profile => "Profil",
            Self::Admin => "Admin",
            Self::Referent => "Référent",
            Self::NotFound => "Page introuvable",
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// Who may open a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone
    Public,
    /// Only visitors without a session; signed-in users are sent home
    GuestOnly,
    /// Any session, visitor included
    Authenticated,
    /// A session whose role is exactly this one
    Role(Role),
}

/// The two axes the guard looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewer {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl From<&Session> for Viewer {
    fn from(session: &Session) -> Self {
        Self {
            authenticated: session.is_authenticated(),
            role: session.role(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(AppRoute),
}

/// Decides whether `viewer` may open `route`.
///
/// Unauthenticated viewers go to `/login`; authenticated viewers lacking the
/// role (or whose profile is unknown) go to `/`.
pub fn guard(route: AppRoute, viewer: Viewer) -> GuardDecision {
    match route.access() {
        Access::Public => GuardDecision::Allow,
        Access::GuestOnly if viewer.authenticated => GuardDecision::Redirect(AppRoute::Dashboard),
        Access::GuestOnly => GuardDecision::Allow,
        _ if !viewer.authenticated => GuardDecision::Redirect(AppRoute::Login),
        Access::Authenticated => GuardDecision::Allow,
        Access::Role(required) if viewer.role == Some(required) => GuardDecision::Allow,
        Access::Role(_) => GuardDecision::Redirect(AppRoute::Dashboard),
    }
}

/// Navbar entries for `viewer`, in display order.
pub fn nav_links(viewer: Viewer) -> Vec<AppRoute> {
    if !viewer.authenticated {
        return Vec::new();
    }
    let mut links = vec![
        AppRoute::Dashboard,
        AppRoute::Tournaments,
        AppRoute::Matches,
        AppRoute::Rankings,
        AppRoute::Training,
        AppRoute::News,
    ];
    match viewer.role {
        Some(Role::Referent) => links.push(AppRoute::Referent),
        Some(Role::Admin) => links.push(AppRoute::Admin),
        _ => {}
    }
    links.push(AppRoute::Profile);
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer(role: Option<Role>) -> Viewer {
        Viewer {
            authenticated: true,
            role,
        }
    }

    #[test]
    fn test_admin_route_guard() {
        let anonymous = Viewer::default();
        assert_eq!(
            guard(AppRoute::Admin, viewer(Some(Role::Member))),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
        assert_eq!(
            guard(AppRoute::Admin, anonymous),
            GuardDecision::Redirect(AppRoute::Login)
        );
        assert_eq!(
            guard(AppRoute::Admin, viewer(Some(Role::Admin))),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_role_must_match_exactly() {
        assert_eq!(
            guard(AppRoute::Referent, viewer(Some(Role::Admin))),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
        // token present but profile unknown
        assert_eq!(
            guard(AppRoute::Referent, viewer(None)),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
        assert_eq!(
            guard(AppRoute::Referent, viewer(Some(Role::Referent))),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_login_page_sends_signed_in_users_home() {
        assert_eq!(
            guard(AppRoute::Login, viewer(Some(Role::Member))),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
        assert_eq!(guard(AppRoute::Login, Viewer::default()), GuardDecision::Allow);
        assert_eq!(
            guard(AppRoute::ResetPassword, Viewer::default()),
            GuardDecision::Allow
        );
        assert_eq!(
            guard(AppRoute::Tournaments, Viewer::default()),
            GuardDecision::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn test_guest_session_is_a_member() {
        let viewer = Viewer::from(&Session::guest());
        assert_eq!(guard(AppRoute::Training, viewer), GuardDecision::Allow);
        assert_eq!(
            guard(AppRoute::Admin, viewer),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
    }

    #[test]
    fn test_path_parsing() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/news/"), AppRoute::News);
        assert_eq!(
            AppRoute::from_path("/reset-password?token=abc"),
            AppRoute::ResetPassword
        );
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::Training.to_string(), "/training");
    }

    #[test]
    fn test_nav_links_by_role() {
        assert!(nav_links(Viewer::default()).is_empty());
        let admin = nav_links(viewer(Some(Role::Admin)));
        assert!(admin.contains(&AppRoute::Admin));
        assert!(!admin.contains(&AppRoute::Referent));
        let member = nav_links(viewer(Some(Role::Member)));
        assert_eq!(member.len(), 7);
        assert_eq!(member.last(), Some(&AppRoute::Profile));
    }
}
