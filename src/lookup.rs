// 📚 Fixed Lookup Tables - chambers and state names
// Immutable statics; a code outside a table is a `Lookup` error.

use crate::error::{ImportError, Result};

// ============================================================================
// CHAMBER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    /// Resolve a term's `type` code
    pub fn from_code(code: &str) -> Result<Chamber> {
        match code {
            "rep" => Ok(Chamber::House),
            "sen" => Ok(Chamber::Senate),
            other => Err(ImportError::Lookup {
                table: "chamber",
                code: other.to_string(),
            }),
        }
    }

    /// Display name written to the `chamber` column
    pub fn name(&self) -> &'static str {
        match self {
            Chamber::House => "House of Representatives",
            Chamber::Senate => "Senate",
        }
    }
}

// ============================================================================
// STATES AND TERRITORIES
// ============================================================================

/// USPS code → display name, including territories and the historical
/// territories that appear in older terms.
pub const STATES: &[(&str, &str)] = &[
    ("AK", "Alaska"),
    ("AL", "Alabama"),
    ("AR", "Arkansas"),
    ("AS", "American Samoa"),
    ("AZ", "Arizona"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DC", "District of Columbia"),
    ("DE", "Delaware"),
    ("DK", "Dakota Territory"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("GU", "Guam"),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("MA", "Massachusetts"),
    ("MD", "Maryland"),
    ("ME", "Maine"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MO", "Missouri"),
    ("MP", "Northern Mariana Islands"),
    ("MS", "Mississippi"),
    ("MT", "Montana"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NE", "Nebraska"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NV", "Nevada"),
    ("NY", "New York"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OL", "Orleans Territory"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("PI", "Philippine Islands"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VA", "Virginia"),
    ("VI", "Virgin Islands"),
    ("VT", "Vermont"),
    ("WA", "Washington"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

/// Display name for a state code
pub fn state_name(code: &str) -> Result<&'static str> {
    STATES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .ok_or_else(|| ImportError::Lookup {
            table: "state",
            code: code.to_string(),
        })
}
