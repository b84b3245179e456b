// 🔗 Social Media Indexer - bioguide id → handles
// Duplicate ids overwrite earlier entries; misses resolve to empty handles.

use crate::models::{SocialHandles, SocialMediaRecord};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Default)]
pub struct SocialMediaIndex {
    by_id: HashMap<String, SocialHandles>,
}

impl SocialMediaIndex {
    /// Index records by bioguide id (last write wins)
    pub fn build(records: Vec<SocialMediaRecord>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());

        for record in records {
            if let Some(previous) = by_id.insert(record.id.bioguide.clone(), record.social) {
                warn!(
                    bioguide = %record.id.bioguide,
                    ?previous,
                    "duplicate social media entry, keeping the later one"
                );
            }
        }

        SocialMediaIndex { by_id }
    }

    /// Handles for one legislator; every field is `None` when the id is unknown
    pub fn handles(&self, bioguide: &str) -> SocialHandles {
        self.by_id.get(bioguide).cloned().unwrap_or_default()
    }

    pub fn contains(&self, bioguide: &str) -> bool {
        self.by_id.contains_key(bioguide)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
