// 🌐 Remote Loader - fetch and parse YAML documents
//
// `DocumentSource` is the seam between the pipeline and wherever documents
// come from. `RemoteLoader` is the HTTP implementation the binary uses.

use crate::config::Settings;
use crate::error::{ImportError, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

// ============================================================================
// SOURCE TRAIT
// ============================================================================

/// Anything that can hand back the raw text of a named document
pub trait DocumentSource {
    /// Raw text of `name`, or a `Fetch` error
    fn fetch_text(&self, name: &str) -> Result<String>;

    /// Fetch `name` and deserialize it
    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T>
    where
        Self: Sized,
    {
        let text = self.fetch_text(name)?;
        parse_document(name, &text)
    }
}

/// Parse YAML text into a typed document; any failure is a `Parse` error.
pub fn parse_document<T: DeserializeOwned>(name: &str, text: &str) -> Result<T> {
    serde_yaml::from_str(text).map_err(|e| ImportError::Parse {
        document: name.to_string(),
        message: e.to_string(),
    })
}

// ============================================================================
// HTTP SOURCE
// ============================================================================

pub struct RemoteLoader {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl RemoteLoader {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(settings.timeout);
        if !settings.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| ImportError::Fetch {
                url: settings.base_url.clone(),
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(RemoteLoader {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }
}

impl DocumentSource for RemoteLoader {
    fn fetch_text(&self, name: &str) -> Result<String> {
        let url = self.url_for(name);
        info!(%url, "fetching document");

        let fetch_error = |e: reqwest::Error| ImportError::Fetch {
            url: url.clone(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(fetch_error)?
            .error_for_status()
            .map_err(fetch_error)?;
        let text = response.text().map_err(fetch_error)?;

        debug!(%url, bytes = text.len(), "document fetched");
        Ok(text)
    }
}
