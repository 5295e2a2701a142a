//! Page location and navigation.

use url::Url;

/// Read access to the current page location plus the ability to leave it.
pub trait Navigator {
    /// Full URL of the current page, query string included.
    fn location(&self) -> &Url;

    /// Navigate away. The current page is considered unloaded afterwards.
    fn navigate_to(&mut self, target: Url);

    fn current_path(&self) -> &str {
        self.location().path()
    }

    /// First value of a query parameter, percent-decoded.
    fn query_param(&self, name: &str) -> Option<String> {
        self.location()
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

/// Navigator that only records where it was sent.
#[derive(Debug, Clone)]
pub struct SimulatedNavigator {
    location: Url,
    history: Vec<Url>,
}

impl SimulatedNavigator {
    pub fn new(location: Url) -> Self {
        Self {
            location,
            history: Vec::new(),
        }
    }

    /// Every navigation performed, oldest first.
    pub fn history(&self) -> &[Url] {
        &self.history
    }

    /// The last navigation target, if any navigation happened.
    pub fn navigated_to(&self) -> Option<&Url> {
        self.history.last()
    }
}

impl Navigator for SimulatedNavigator {
    fn location(&self) -> &Url {
        &self.location
    }

    fn navigate_to(&mut self, target: Url) {
        tracing::info!("Navigating {} -> {}", self.location, target);
        self.history.push(target.clone());
        self.location = target;
    }
}
