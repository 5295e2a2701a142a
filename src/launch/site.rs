//! Where the site's fixed pages live.

use serde::{Deserialize, Serialize};
use url::Url;

use super::Role;

fn default_base_path() -> String {
    "/".to_string()
}

fn default_launch_page() -> String {
    "lti/launch".to_string()
}

fn default_student_landing() -> String {
    "student/chapter-1.html".to_string()
}

fn default_instructor_landing() -> String {
    "instructor/analytics-1.html".to_string()
}

fn default_context_id() -> String {
    "Algebra I".to_string()
}

/// Page layout of a deployed site.
///
/// Page paths are relative to `base_path`, so a site published under
/// `/mini-openstax/` only needs the base path changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLayout {
    /// Path the site is deployed under (`/` for a root deployment).
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_launch_page")]
    pub launch_page: String,
    #[serde(default = "default_student_landing")]
    pub student_landing: String,
    #[serde(default = "default_instructor_landing")]
    pub instructor_landing: String,
    /// Context saved when a launch does not name one.
    #[serde(default = "default_context_id")]
    pub default_context_id: String,
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            launch_page: default_launch_page(),
            student_landing: default_student_landing(),
            instructor_landing: default_instructor_landing(),
            default_context_id: default_context_id(),
        }
    }
}

impl SiteLayout {
    /// A layout deployed under `base_path`, everything else default.
    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Self::default()
        }
    }

    /// Base path with exactly one leading and one trailing slash.
    pub fn base(&self) -> String {
        let trimmed = self.base_path.trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", trimmed)
        }
    }

    pub fn landing_page(&self, role: Role) -> &str {
        match role {
            Role::Student => &self.student_landing,
            Role::Instructor => &self.instructor_landing,
        }
    }

    /// Landing page for `role` on the same origin as `current`.
    pub fn landing_url(&self, current: &Url, role: Role) -> Result<Url, url::ParseError> {
        let page = self.landing_page(role).trim_start_matches('/');
        current.join(&format!("{}{}", self.base(), page))
    }

    /// Whether `path` is the site's homepage.
    pub fn is_homepage(&self, path: &str) -> bool {
        if path == "/" || path == "/index.html" {
            return true;
        }

        let base = self.base();
        if base == "/" {
            return false;
        }

        let bare = base.trim_end_matches('/');
        path.ends_with(&base) || path.ends_with(bare) || path.ends_with(&format!("{}index.html", base))
    }

    /// Whether `path` is the launch endpoint.
    pub fn is_launch_page(&self, path: &str) -> bool {
        let page = self.launch_page.trim_matches('/');
        path == format!("/{}", page) || path == format!("{}{}", self.base(), page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_normalization() {
        assert_eq!(SiteLayout::with_base_path("").base(), "/");
        assert_eq!(SiteLayout::with_base_path("/").base(), "/");
        assert_eq!(SiteLayout::with_base_path("mini-openstax").base(), "/mini-openstax/");
        assert_eq!(SiteLayout::with_base_path("/mini-openstax").base(), "/mini-openstax/");
    }

    #[test]
    fn test_root_homepage() {
        let site = SiteLayout::default();
        assert!(site.is_homepage("/"));
        assert!(site.is_homepage("/index.html"));
        assert!(!site.is_homepage("/other.html"));
        assert!(!site.is_homepage("/student/chapter-1.html"));
    }

    #[test]
    fn test_sub_path_homepage() {
        let site = SiteLayout::with_base_path("/mini-openstax/");
        assert!(site.is_homepage("/mini-openstax/"));
        assert!(site.is_homepage("/mini-openstax"));
        assert!(site.is_homepage("/mini-openstax/index.html"));
        assert!(site.is_homepage("/"));
        assert!(!site.is_homepage("/mini-openstax/other.html"));
        assert!(!site.is_homepage("/not-mini-openstax-page"));
    }

    #[test]
    fn test_launch_page() {
        let site = SiteLayout::with_base_path("/course");
        assert!(site.is_launch_page("/lti/launch"));
        assert!(site.is_launch_page("/course/lti/launch"));
        assert!(!site.is_launch_page("/course/"));
    }

    #[test]
    fn test_landing_urls() {
        let current = Url::parse("https://user.github.io/mini-openstax/lti/launch?user_role=student").unwrap();
        let site = SiteLayout::with_base_path("/mini-openstax/");
        assert_eq!(
            site.landing_url(&current, Role::Student).unwrap().as_str(),
            "https://user.github.io/mini-openstax/student/chapter-1.html"
        );
        assert_eq!(
            SiteLayout::default()
                .landing_url(&current, Role::Instructor)
                .unwrap()
                .as_str(),
            "https://user.github.io/instructor/analytics-1.html"
        );
    }
}
