// 🏛️ Record Models - input documents and the flat output row
// Input types mirror the congress-legislators YAML layout; unknown keys are
// ignored so new upstream fields never break a run.

use chrono::NaiveDate;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

// ============================================================================
// LEGISLATORS DOCUMENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Legislator {
    pub id: LegislatorIds,
    pub name: LegislatorName,
    #[serde(default)]
    pub bio: Bio,
    /// Chronological; the last entry is the current term
    #[serde(default)]
    pub terms: Vec<Term>,
}

/// External identifiers. Only the ones the output uses are modelled.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegislatorIds {
    pub bioguide: String,
    #[serde(default)]
    pub wikipedia: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegislatorName {
    pub first: String,
    #[serde(default)]
    pub middle: Option<String>,
    pub last: String,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Bio {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Term {
    /// Raw chamber code ("rep" or "sen"), resolved by `lookup::Chamber`
    #[serde(rename = "type")]
    pub term_type: String,
    pub state: String,
    /// Representatives only; 0 means at-large
    #[serde(default)]
    pub district: Option<u32>,
    #[serde(default)]
    pub party: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub phone: Option<String>,
}

impl Legislator {
    pub fn bioguide(&self) -> &str {
        &self.id.bioguide
    }

    /// Current term: always the last one in the sequence.
    /// Mid-term party switches are not split into separate rows.
    pub fn current_term(&self) -> Option<&Term> {
        self.terms.last()
    }
}

// ============================================================================
// SOCIAL MEDIA DOCUMENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialMediaRecord {
    pub id: SocialMediaIds,
    #[serde(default)]
    pub social: SocialHandles,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialMediaIds {
    pub bioguide: String,
}

/// Handles for the three platforms the output carries
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SocialHandles {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub twitter: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub facebook: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub instagram: Option<String>,
}

/// Accepts scalars of any YAML type as text; some upstream handles and phone
/// numbers are written unquoted and load as numbers.
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        _ => Err(Error::custom("expected a scalar value")),
    }
}

// ============================================================================
// OUTPUT ROW
// ============================================================================

/// One row per legislator's current term.
///
/// Field order is the column order of the `data` table and of CSV exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub id: String,
    pub name: String,
    pub sort_name: String,
    pub given_name: String,
    pub family_name: String,
    pub honorific_suffix: Option<String>,
    pub area: String,
    pub group: Option<String>,
    /// Congress number
    pub term: u32,
    pub chamber: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub image: String,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub wikipedia: Option<String>,
}
