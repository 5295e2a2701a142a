//! Simulated LTI launch and role-based redirects.
//!
//! A launch URL carries `user_role` and `context_id` query parameters. A valid
//! role is saved to the store and the user is sent to that role's landing
//! page; later visits to the homepage follow the saved role.

mod navigator;
mod site;

pub use navigator::{Navigator, SimulatedNavigator};
pub use site::SiteLayout;

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::store::{KeyValueStore, StoreError, CONTEXT_KEY, ROLE_KEY};

/// Query parameter naming the launching user's role.
pub const ROLE_PARAM: &str = "user_role";

/// Query parameter naming the course context.
pub const CONTEXT_PARAM: &str = "context_id";

/// The two roles a launch may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Student,
    Instructor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "instructor" => Ok(Role::Instructor),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Errors from the redirect flow.
#[derive(Debug, thiserror::Error)]
pub enum RedirectError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Cannot build landing page URL: {0}")]
    Url(#[from] url::ParseError),
}

/// What the page-load bootstrap did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoad {
    /// Launch page with a valid role: saved and redirected.
    Launched(Role),
    /// Launch page without a valid role: nothing saved, no redirect.
    LaunchIgnored,
    /// Homepage with a saved role: redirected.
    Redirected(Role),
    /// Nothing to do on this page.
    Stayed,
}

/// Decides where a visitor goes based on launch parameters or a saved role.
///
/// Holds no state of its own; the navigator and store are passed per call.
#[derive(Debug, Clone, Default)]
pub struct RoleRedirect {
    site: SiteLayout,
}

impl RoleRedirect {
    pub fn new(site: SiteLayout) -> Self {
        Self { site }
    }

    pub fn site(&self) -> &SiteLayout {
        &self.site
    }

    /// Handle a launch from the current URL's query parameters.
    ///
    /// Returns `true` when the role was valid, saved, and followed. Any other
    /// role value, including none, changes nothing and returns `false`.
    pub fn handle_launch<N, S>(&self, nav: &mut N, store: &mut S) -> Result<bool, RedirectError>
    where
        N: Navigator + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        Ok(self.launch(nav, store)?.is_some())
    }

    fn launch<N, S>(&self, nav: &mut N, store: &mut S) -> Result<Option<Role>, RedirectError>
    where
        N: Navigator + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        let raw_role = nav.query_param(ROLE_PARAM);
        let role = match raw_role.as_deref().map(Role::from_str) {
            Some(Ok(role)) => role,
            _ => {
                tracing::debug!("Ignoring launch with role {:?}", raw_role);
                return Ok(None);
            }
        };

        let context_id = nav
            .query_param(CONTEXT_PARAM)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.site.default_context_id.clone());

        // Resolve first so a bad target leaves the store untouched.
        let target = self.site.landing_url(nav.location(), role)?;

        store.set_many(&[(ROLE_KEY, role.as_str()), (CONTEXT_KEY, context_id.as_str())])?;
        tracing::debug!("Saved role {} for context {:?}", role, context_id);

        nav.navigate_to(target);
        Ok(Some(role))
    }

    /// On the homepage, follow a previously saved role.
    ///
    /// Returns the role that was followed, if any. Off the homepage, or with
    /// no recognizable saved role, nothing happens.
    pub fn auto_redirect_if_saved<N, S>(
        &self,
        nav: &mut N,
        store: &S,
    ) -> Result<Option<Role>, RedirectError>
    where
        N: Navigator + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        if !self.site.is_homepage(nav.current_path()) {
            return Ok(None);
        }

        let Some(role) = store.get(ROLE_KEY).and_then(|r| r.parse::<Role>().ok()) else {
            return Ok(None);
        };

        let target = self.site.landing_url(nav.location(), role)?;
        nav.navigate_to(target);
        Ok(Some(role))
    }

    /// Page-load entry point: launch handling on the launch page, saved-role
    /// redirect on the homepage, nothing anywhere else.
    pub fn on_page_load<N, S>(&self, nav: &mut N, store: &mut S) -> Result<PageLoad, RedirectError>
    where
        N: Navigator + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        let path = nav.current_path().to_string();

        if self.site.is_launch_page(&path) {
            return Ok(match self.launch(nav, store)? {
                Some(role) => PageLoad::Launched(role),
                None => PageLoad::LaunchIgnored,
            });
        }

        if self.site.is_homepage(&path) {
            return Ok(match self.auto_redirect_if_saved(nav, store)? {
                Some(role) => PageLoad::Redirected(role),
                None => PageLoad::Stayed,
            });
        }

        Ok(PageLoad::Stayed)
    }

    /// Landing page for `role`, resolved on the origin of `current`.
    pub fn landing_url(&self, current: &Url, role: Role) -> Result<Url, url::ParseError> {
        self.site.landing_url(current, role)
    }
}
