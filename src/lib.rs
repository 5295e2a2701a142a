//! ministax - helpers for a static course site.
//!
//! - `utils`: HTML escaping and score formatting
//! - `render`: loading and error placeholders
//! - `loader`: chapter and analytics JSON resolved relative to the current page
//! - `launch`: simulated LTI launch and saved-role redirects
//! - `store`: the key-value store standing in for browser local storage

pub mod cli;
pub mod config;
pub mod launch;
pub mod loader;
pub mod render;
pub mod store;
pub mod utils;

pub use config::Config;
pub use launch::{Navigator, PageLoad, Role, RoleRedirect, SimulatedNavigator, SiteLayout};
pub use loader::{Fetcher, LoadError, ResourceKind, ResourceRef, StaticLoader};
pub use store::{FileStore, KeyValueStore, MemoryStore};
