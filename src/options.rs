//! Generation options and their TOML configuration file.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::line::Tracker;

/// Placeholder replaced by the bug id in tracker URL templates.
pub const BUG_ID_PLACEHOLDER: &str = "{id}";

/// Rendering options.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```
/// use changelog_html::Options;
///
/// let options = Options::from_toml("[banner]\ntitle = \"My Changelog\"\n").unwrap();
/// assert_eq!(options.banner.title, "My Changelog");
/// assert_eq!(options.banner.icon, "Changelog.ico");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Banner placed ahead of the version blocks.
    pub banner: Banner,
    /// Bug tracker URL templates.
    pub trackers: TrackerUrls,
}

/// Title, icon and one-line description shown above the changelog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Banner {
    pub title: String,
    pub icon: String,
    pub description: String,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            title: "DC++ Changelog".to_string(),
            icon: "Changelog.ico".to_string(),
            description: "See the version history of DC++ below.".to_string(),
        }
    }
}

/// URL templates per tracker; `{id}` is replaced by the bug id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerUrls {
    pub bugzilla: String,
    pub launchpad: String,
}

impl Default for TrackerUrls {
    fn default() -> Self {
        Self {
            bugzilla: "http://dcpp.net/bugzilla/show_bug.cgi?id={id}".to_string(),
            launchpad: "https://bugs.launchpad.net/dcplusplus/+bug/{id}".to_string(),
        }
    }
}

impl TrackerUrls {
    /// URL template for a tracker.
    pub fn template(&self, tracker: Tracker) -> &str {
        match tracker {
            Tracker::Bugzilla => &self.bugzilla,
            Tracker::Launchpad => &self.launchpad,
        }
    }

    /// Link to a bug on its tracker.
    pub fn url(&self, tracker: Tracker, bug_id: &str) -> String {
        self.template(tracker).replace(BUG_ID_PLACEHOLDER, bug_id)
    }
}

impl Options {
    /// Parse options from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load options from a TOML file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        let content =
            std::fs::read_to_string(config_path).map_err(|source| Error::io(config_path, source))?;

        Self::from_toml(&content).map_err(|source| Error::Config {
            path: config_path.to_path_buf(),
            source,
        })
    }
}
