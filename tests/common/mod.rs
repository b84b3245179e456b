#![allow(dead_code)]

use congress_legislators::{DocumentSource, ImportError, Result, Settings};
use std::collections::HashMap;

pub const LEGISLATORS_YAML: &str = r#"
- id:
    bioguide: X000001
    govtrack: 456001
    wikipedia: Jane Example
  name:
    first: Jane
    middle: Quinn
    last: Example
  bio:
    birthday: '1970-04-01'
    gender: F
  terms:
  - type: rep
    start: '2023-01-03'
    end: '2025-01-03'
    state: CA
    district: 11
    party: Democrat
  - type: rep
    start: '2025-01-03'
    end: '2027-01-03'
    state: CA
    district: 12
    party: Democrat
    url: https://example.house.gov
    phone: 202-225-4965
- id:
    bioguide: X000002
    govtrack: 456002
  name:
    first: J.
    middle: Robert
    last: Sample
    suffix: Jr.
    nickname: Bob
  bio:
    gender: M
  terms:
  - type: sen
    start: '2025-01-03'
    end: '2031-01-03'
    state: VT
    class: 1
    party: Independent
    url: https://www.sample.senate.gov
- id:
    bioguide: X000003
  name:
    first: Alex
    last: Atlarge
  bio:
    birthday: '1980-12-31'
  terms:
  - type: rep
    start: '2025-01-03'
    end: '2027-01-03'
    state: WY
    district: 0
    party: Republican
"#;

pub const SOCIAL_MEDIA_YAML: &str = r#"
- id:
    bioguide: X000001
    govtrack: 456001
  social:
    twitter: RepExample
    facebook: 1537155909907320
    youtube_id: UCxxxx
- id:
    bioguide: X000002
  social:
    instagram: senator.sample
- id:
    bioguide: Z999999
  social:
    twitter: NotInCongress
"#;

/// Documents served from memory, keyed by name
pub struct InMemorySource {
    documents: HashMap<String, String>,
}

impl InMemorySource {
    pub fn new(documents: &[(&str, &str)]) -> Self {
        InMemorySource {
            documents: documents
                .iter()
                .map(|(name, text)| (name.to_string(), text.to_string()))
                .collect(),
        }
    }

    /// Both standard documents with the fixtures above
    pub fn standard() -> Self {
        let settings = Settings::default();
        InMemorySource::new(&[
            (settings.legislators_document.as_str(), LEGISLATORS_YAML),
            (settings.social_media_document.as_str(), SOCIAL_MEDIA_YAML),
        ])
    }
}

impl DocumentSource for InMemorySource {
    fn fetch_text(&self, name: &str) -> Result<String> {
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| ImportError::Fetch {
                url: format!("memory://{}", name),
                message: "404 Not Found".to_string(),
            })
    }
}
