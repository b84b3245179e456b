// ⚙️ Settings - fixed run parameters
// The import has no configuration surface: the binary always uses
// `Settings::default()`. Tests build their own to point at local fixtures.

use std::path::PathBuf;
use std::time::Duration;

/// Number of the Congress currently in session, written to the `term` column.
pub const CURRENT_CONGRESS: u32 = 119;

pub const BASE_URL: &str =
    "https://raw.githubusercontent.com/unitedstates/congress-legislators/master";

pub const LEGISLATORS_DOCUMENT: &str = "legislators-current.yaml";
pub const SOCIAL_MEDIA_DOCUMENT: &str = "legislators-social-media.yaml";

/// `{id}` is replaced by the bioguide identifier.
pub const IMAGE_URL_TEMPLATE: &str =
    "https://theunitedstates.io/images/congress/original/{id}.jpg";

pub const DATABASE_PATH: &str = "data.sqlite";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory URL the two documents are fetched from (no trailing slash)
    pub base_url: String,
    pub legislators_document: String,
    pub social_media_document: String,
    pub database_path: PathBuf,
    pub session: u32,
    pub image_url_template: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Honour HTTP(S)_PROXY from the environment
    pub use_system_proxy: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: BASE_URL.to_string(),
            legislators_document: LEGISLATORS_DOCUMENT.to_string(),
            social_media_document: SOCIAL_MEDIA_DOCUMENT.to_string(),
            database_path: PathBuf::from(DATABASE_PATH),
            session: CURRENT_CONGRESS,
            image_url_template: IMAGE_URL_TEMPLATE.to_string(),
            user_agent: format!("congress-legislators/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(60),
            use_system_proxy: true,
        }
    }
}

impl Settings {
    /// Image URL for one legislator
    pub fn image_url(&self, bioguide: &str) -> String {
        self.image_url_template.replace("{id}", bioguide)
    }
}
