//! Launch, page-load, and session commands.

use url::Url;

use crate::cli::icons::{dim_arrow, info, success, warn};
use crate::config::Config;
use crate::launch::{Navigator, PageLoad, RoleRedirect, SimulatedNavigator};
use crate::store::{FileStore, KeyValueStore, CONTEXT_KEY, ROLE_KEY};

fn open(config: &Config, url: &str) -> anyhow::Result<(RoleRedirect, SimulatedNavigator, FileStore)> {
    let location = Url::parse(url).map_err(|e| anyhow::anyhow!("Invalid page URL {}: {}", url, e))?;
    let store = FileStore::open(config.storage_path())?;
    Ok((
        RoleRedirect::new(config.site.clone()),
        SimulatedNavigator::new(location),
        store,
    ))
}

fn report_navigation(nav: &SimulatedNavigator) {
    if let Some(target) = nav.navigated_to() {
        println!("{}", target);
    }
}

/// Simulate loading a page.
pub fn cmd_visit(config: &Config, url: &str) -> anyhow::Result<()> {
    let (redirect, mut nav, mut store) = open(config, url)?;

    match redirect.on_page_load(&mut nav, &mut store)? {
        PageLoad::Launched(role) => {
            eprintln!("{} Launched as {}", success(), role);
        }
        PageLoad::LaunchIgnored => {
            eprintln!("{} Launch ignored: no valid user_role", warn());
        }
        PageLoad::Redirected(role) => {
            eprintln!("{} Saved role {} found, redirecting", info(), role);
        }
        PageLoad::Stayed => {
            eprintln!("{} Staying on {}", dim_arrow(), nav.current_path());
        }
    }
    report_navigation(&nav);
    Ok(())
}

/// Run the launch handler regardless of the page path.
pub fn cmd_launch(config: &Config, url: &str) -> anyhow::Result<()> {
    let (redirect, mut nav, mut store) = open(config, url)?;

    if redirect.handle_launch(&mut nav, &mut store)? {
        eprintln!("{} Role saved to {}", success(), store.path().display());
        report_navigation(&nav);
    } else {
        eprintln!("{} Launch ignored: no valid user_role", warn());
    }
    Ok(())
}

/// Show what the store currently holds.
pub fn cmd_session(config: &Config) -> anyhow::Result<()> {
    let store = FileStore::open(config.storage_path())?;
    let show = |value: Option<String>| value.unwrap_or_else(|| "(unset)".to_string());

    println!("{}: {}", ROLE_KEY, show(store.get(ROLE_KEY)));
    println!("{}: {}", CONTEXT_KEY, show(store.get(CONTEXT_KEY)));
    eprintln!("  {} Store: {}", dim_arrow(), store.path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &tempfile::TempDir) -> Config {
        Config {
            storage_path: Some(dir.path().join("storage.json")),
            ..Config::default()
        }
    }

    fn saved(config: &Config, key: &str) -> Option<String> {
        FileStore::open(config.storage_path()).unwrap().get(key)
    }

    #[test]
    fn test_visit_launch_then_homepage() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        cmd_visit(&config, "https://example.org/lti/launch?user_role=instructor&context_id=Geo")
            .unwrap();
        assert_eq!(saved(&config, ROLE_KEY).as_deref(), Some("instructor"));
        assert_eq!(saved(&config, CONTEXT_KEY).as_deref(), Some("Geo"));

        cmd_visit(&config, "https://example.org/").unwrap();
        cmd_session(&config).unwrap();
    }

    #[test]
    fn test_visit_ignores_invalid_launch() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        cmd_visit(&config, "https://example.org/lti/launch?user_role=admin").unwrap();
        assert!(saved(&config, ROLE_KEY).is_none());
        assert!(!dir.path().join("storage.json").exists());
    }

    #[test]
    fn test_launch_ignores_page_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        cmd_launch(&config, "https://example.org/anywhere.html?user_role=student").unwrap();
        assert_eq!(saved(&config, ROLE_KEY).as_deref(), Some("student"));
        assert_eq!(saved(&config, CONTEXT_KEY).as_deref(), Some("Algebra I"));
    }

    #[test]
    fn test_invalid_url_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(cmd_visit(&config_in(&dir), "not a url").is_err());
    }
}
