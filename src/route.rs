//! Route table and access guard.
//!
//! Pure routing rules with no DOM access; the browser router applies them.

use std::fmt::Display;

use seva_kendra_shared::schema::RecordCategory;

use crate::session::AuthStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// `/`, always forwarded
    Root,
    #[default]
    SignIn,
    Dashboard,
    Beneficiaries,
    LegalAid,
    Workshops,
    Reports,
    ModuleReports,
    /// A sectioned category page such as `/health/pwd`
    Records(RecordCategory),
    /// Ungated intake form
    PublicForm,
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        match path {
            "/" => Self::Root,
            "/signin" => Self::SignIn,
            "/dashboard" => Self::Dashboard,
            "/beneficiaries" => Self::Beneficiaries,
            "/legal-aid" => Self::LegalAid,
            "/workshops" => Self::Workshops,
            "/reports" => Self::Reports,
            "/module-reports" => Self::ModuleReports,
            "/form" => Self::PublicForm,
            other => RecordCategory::from_path(other)
                .map(Self::Records)
                .unwrap_or(Self::NotFound),
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::SignIn => "/signin",
            Self::Dashboard => "/dashboard",
            Self::Beneficiaries => "/beneficiaries",
            Self::LegalAid => "/legal-aid",
            Self::Workshops => "/workshops",
            Self::Reports => "/reports",
            Self::ModuleReports => "/module-reports",
            Self::Records(category) => category.schema().path,
            Self::PublicForm => "/form",
            Self::NotFound => "/404",
        }
    }

    /// Address bar text once this route renders for `requested`. Unknown
    /// paths keep what was typed instead of showing `/404`.
    pub fn address<'a>(&self, requested: &'a str) -> &'a str {
        match self {
            Self::NotFound => requested,
            route => route.to_path(),
        }
    }

    /// The record category listed on this page, if any.
    pub fn category(&self) -> Option<RecordCategory> {
        match self {
            Self::Beneficiaries => Some(RecordCategory::Beneficiaries),
            Self::LegalAid => Some(RecordCategory::LegalAid),
            Self::Workshops => Some(RecordCategory::Workshops),
            Self::Records(category) => Some(*category),
            _ => None,
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Self::Root | Self::SignIn | Self::PublicForm | Self::NotFound
        )
    }

    /// Signed-in users skip the sign-in page.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::SignIn)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::SignIn
    }

    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render(AppRoute),
    Redirect(AppRoute),
    /// Session not restored yet; show a spinner instead of guessing
    Wait,
}

pub fn guard(target: AppRoute, status: AuthStatus) -> GuardDecision {
    let gated = target.requires_auth() || target.should_redirect_when_authenticated();
    match (target, status) {
        (AppRoute::Root, AuthStatus::Authenticated) => {
            GuardDecision::Redirect(AppRoute::auth_success_redirect())
        }
        (AppRoute::Root, _) => GuardDecision::Redirect(AppRoute::auth_failure_redirect()),
        (_, AuthStatus::Initializing) if gated => GuardDecision::Wait,
        (route, AuthStatus::Unauthenticated) if route.requires_auth() => {
            GuardDecision::Redirect(AppRoute::auth_failure_redirect())
        }
        (route, AuthStatus::Authenticated) if route.should_redirect_when_authenticated() => {
            GuardDecision::Redirect(AppRoute::auth_success_redirect())
        }
        (route, _) => GuardDecision::Render(route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GATED: &[&str] = &[
        "/dashboard",
        "/beneficiaries",
        "/legal-aid",
        "/workshops",
        "/reports",
        "/module-reports",
        "/education/study-centers",
        "/education/sc-students",
        "/education/dropouts",
        "/education/schools",
        "/education/competitive-exams",
        "/education/board-preparation",
        "/health/health-camps",
        "/health/elderly",
        "/health/mother-child",
        "/health/pwd",
        "/health/adolescents",
        "/health/tb-hiv-addict",
        "/social-justice/cbucbo-details",
        "/social-justice/entitlements",
        "/social-justice/legal-aid",
        "/social-justice/workshops",
    ];

    #[test]
    fn unauthenticated_users_land_on_sign_in() {
        for path in GATED {
            let route = AppRoute::from_path(path);
            assert!(route.requires_auth(), "{path}");
            assert_ne!(route, AppRoute::NotFound, "{path}");
            assert_eq!(
                guard(route, AuthStatus::Unauthenticated),
                GuardDecision::Redirect(AppRoute::SignIn),
                "{path}"
            );
            assert_eq!(guard(route, AuthStatus::Authenticated), GuardDecision::Render(route));
        }
    }

    #[test]
    fn initializing_waits_instead_of_redirecting() {
        assert_eq!(
            guard(AppRoute::Dashboard, AuthStatus::Initializing),
            GuardDecision::Wait
        );
        assert_eq!(
            guard(AppRoute::SignIn, AuthStatus::Initializing),
            GuardDecision::Wait
        );
        assert_eq!(
            guard(AppRoute::PublicForm, AuthStatus::Initializing),
            GuardDecision::Render(AppRoute::PublicForm)
        );
    }

    #[test]
    fn sign_in_and_root_forwarding() {
        assert_eq!(
            guard(AppRoute::SignIn, AuthStatus::Authenticated),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
        assert_eq!(
            guard(AppRoute::SignIn, AuthStatus::Unauthenticated),
            GuardDecision::Render(AppRoute::SignIn)
        );
        assert_eq!(
            guard(AppRoute::from_path("/"), AuthStatus::Unauthenticated),
            GuardDecision::Redirect(AppRoute::SignIn)
        );
        assert_eq!(
            guard(AppRoute::Root, AuthStatus::Authenticated),
            GuardDecision::Redirect(AppRoute::Dashboard)
        );
    }

    #[test]
    fn public_and_unknown_paths() {
        assert_eq!(AppRoute::from_path("/form"), AppRoute::PublicForm);
        assert!(!AppRoute::PublicForm.requires_auth());
        assert_eq!(AppRoute::from_path("/health/unknown"), AppRoute::NotFound);
        assert_eq!(
            guard(AppRoute::NotFound, AuthStatus::Unauthenticated),
            GuardDecision::Render(AppRoute::NotFound)
        );
        assert_eq!(AppRoute::from_path("/dashboard/"), AppRoute::Dashboard);
    }

    #[test]
    fn not_found_keeps_the_typed_address() {
        let typed = "/health/unknown";
        let route = AppRoute::from_path(typed);
        assert_eq!(route.address(typed), typed);
        assert_eq!(AppRoute::from_path("/dashboard/").address("/dashboard/"), "/dashboard");
        assert_eq!(
            AppRoute::from_path("/social-justice/legal-aid").address("/social-justice/legal-aid"),
            "/legal-aid"
        );
    }

    #[test]
    fn aliases_share_a_category() {
        assert_eq!(AppRoute::LegalAid.category(), Some(RecordCategory::LegalAid));
        assert_eq!(
            AppRoute::from_path("/social-justice/legal-aid").category(),
            Some(RecordCategory::LegalAid)
        );
        assert_eq!(AppRoute::Records(RecordCategory::Pwd).to_path(), "/health/pwd");
    }
}
