// ✍️ Field Deriver - display strings for the output row
// Pure functions: ordinal numbers, area descriptions, full/sort names.

use crate::error::{ImportError, Result};
use crate::lookup::{state_name, Chamber};
use crate::models::{Legislator, Term};
use std::str::FromStr;

// ============================================================================
// ORDINALS
// ============================================================================

/// `n` with its English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 21st, 113th.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

// ============================================================================
// AREA
// ============================================================================

/// Human-readable state or district for a term.
///
/// Senators get the bare state name; representatives get
/// "<State>’s 5th Congressional District" or "<State>’s At-Large Congressional District".
pub fn build_area(term: &Term) -> Result<String> {
    let mut area = state_name(&term.state)?.to_string();

    if Chamber::from_code(&term.term_type)? == Chamber::House {
        let district = term.district.ok_or_else(|| ImportError::MissingField {
            record: format!("{} term starting {}", term.state, term.start),
            field: "district",
        })?;

        area.push_str("’s ");
        if district == 0 {
            area.push_str("At-Large");
        } else {
            area.push_str(&ordinal(district));
        }
        area.push_str(" Congressional District");
    }

    Ok(area)
}

// ============================================================================
// NAMES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMode {
    /// "First Last"
    Full,
    /// "Last, First"
    Sort,
}

impl FromStr for NameMode {
    type Err = ImportError;

    fn from_str(mode: &str) -> Result<Self> {
        match mode {
            "full" => Ok(NameMode::Full),
            "sort" => Ok(NameMode::Sort),
            other => Err(ImportError::InvalidArgument(format!(
                "unsupported name mode '{}'",
                other
            ))),
        }
    }
}

/// Preferred first name.
///
/// An abbreviated first name ("J.") gives way to the middle name, and a
/// nickname shorter than the result replaces it.
pub fn first_name(legislator: &Legislator) -> Result<String> {
    let name = &legislator.name;

    let mut first = if name.first.ends_with('.') {
        name.middle.clone().ok_or_else(|| ImportError::MissingField {
            record: format!("Legislator {}", legislator.bioguide()),
            field: "name.middle",
        })?
    } else {
        name.first.clone()
    };

    if let Some(nickname) = name.nickname.as_deref().filter(|n| !n.is_empty()) {
        if nickname.chars().count() < first.chars().count() {
            first = nickname.to_string();
        }
    }

    Ok(first)
}

/// Last name with ", <suffix>" appended when one is recorded
pub fn last_name(legislator: &Legislator) -> String {
    let name = &legislator.name;
    match name.suffix.as_deref().filter(|s| !s.is_empty()) {
        Some(suffix) => format!("{}, {}", name.last, suffix),
        None => name.last.clone(),
    }
}

pub fn build_name(legislator: &Legislator, mode: NameMode) -> Result<String> {
    let first = first_name(legislator)?;
    let last = last_name(legislator);

    Ok(match mode {
        NameMode::Full => format!("{} {}", first, last),
        NameMode::Sort => format!("{}, {}", last, first),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bio, LegislatorIds, LegislatorName};
    use chrono::NaiveDate;
    use rstest::rstest;

    fn term(term_type: &str, state: &str, district: Option<u32>) -> Term {
        Term {
            term_type: term_type.to_string(),
            state: state.to_string(),
            district,
            party: Some("Independent".to_string()),
            start: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            end: NaiveDate::from_ymd_opt(2027, 1, 3).unwrap(),
            url: None,
            phone: None,
        }
    }

    fn legislator(
        first: &str,
        middle: Option<&str>,
        last: &str,
        suffix: Option<&str>,
        nickname: Option<&str>,
    ) -> Legislator {
        Legislator {
            id: LegislatorIds {
                bioguide: "T000001".to_string(),
                wikipedia: None,
            },
            name: LegislatorName {
                first: first.to_string(),
                middle: middle.map(str::to_string),
                last: last.to_string(),
                suffix: suffix.map(str::to_string),
                nickname: nickname.map(str::to_string),
            },
            bio: Bio::default(),
            terms: vec![term("sen", "VT", None)],
        }
    }

    #[rstest]
    #[case(1, "1st")]
    #[case(2, "2nd")]
    #[case(3, "3rd")]
    #[case(4, "4th")]
    #[case(11, "11th")]
    #[case(12, "12th")]
    #[case(13, "13th")]
    #[case(21, "21st")]
    #[case(22, "22nd")]
    #[case(23, "23rd")]
    #[case(100, "100th")]
    #[case(101, "101st")]
    #[case(111, "111th")]
    #[case(113, "113th")]
    fn test_ordinal(#[case] n: u32, #[case] expected: &str) {
        assert_eq!(ordinal(n), expected);
    }

    #[test]
    fn test_senate_area_is_state_name() {
        assert_eq!(build_area(&term("sen", "OH", None)).unwrap(), "Ohio");
    }

    #[rstest]
    #[case("WY", 0, "Wyoming’s At-Large Congressional District")]
    #[case("NY", 5, "New York’s 5th Congressional District")]
    #[case("CA", 12, "California’s 12th Congressional District")]
    #[case("TX", 22, "Texas’s 22nd Congressional District")]
    fn test_house_area(#[case] state: &str, #[case] district: u32, #[case] expected: &str) {
        assert_eq!(build_area(&term("rep", state, Some(district))).unwrap(), expected);
    }

    #[test]
    fn test_house_area_without_district() {
        let err = build_area(&term("rep", "CA", None)).unwrap_err();
        assert!(matches!(err, ImportError::MissingField { field: "district", .. }));
    }

    #[test]
    fn test_area_unknown_state_or_chamber() {
        assert!(matches!(
            build_area(&term("rep", "ZZ", Some(1))),
            Err(ImportError::Lookup { table: "state", .. })
        ));
        assert!(matches!(
            build_area(&term("del", "CA", Some(1))),
            Err(ImportError::Lookup { table: "chamber", .. })
        ));
    }

    #[test]
    fn test_abbreviated_first_name_uses_middle() {
        let p = legislator("J.", Some("Gresham"), "Barrett", None, None);
        assert_eq!(build_name(&p, NameMode::Full).unwrap(), "Gresham Barrett");
    }

    #[test]
    fn test_abbreviated_first_name_without_middle() {
        let p = legislator("J.", None, "Barrett", None, None);
        assert!(matches!(
            build_name(&p, NameMode::Full),
            Err(ImportError::MissingField { field: "name.middle", .. })
        ));
    }

    #[rstest]
    #[case("Bernard", "Bernie", "Bernie")]
    #[case("Al", "Alexander", "Al")]
    // Equal length keeps the stored first name
    #[case("Dan", "Ann", "Dan")]
    #[case("Jose", "José", "Jose")]
    // Five characters but six bytes: still shorter than "Thomas"
    #[case("Thomas", "Tomás", "Tomás")]
    fn test_nickname_must_be_strictly_shorter(
        #[case] first: &str,
        #[case] nickname: &str,
        #[case] expected: &str,
    ) {
        let p = legislator(first, None, "Last", None, Some(nickname));
        assert_eq!(
            build_name(&p, NameMode::Full).unwrap(),
            format!("{} Last", expected)
        );
    }

    #[test]
    fn test_nickname_applies_after_middle_substitution() {
        let p = legislator("A.", Some("Mitchell"), "McConnell", None, Some("Mitch"));
        assert_eq!(build_name(&p, NameMode::Full).unwrap(), "Mitch McConnell");
    }

    #[rstest]
    #[case(NameMode::Full, "Robert Casey, Jr.")]
    #[case(NameMode::Sort, "Casey, Jr., Robert")]
    fn test_suffix_in_both_modes(#[case] mode: NameMode, #[case] expected: &str) {
        let p = legislator("Robert", Some("P."), "Casey", Some("Jr."), None);
        assert_eq!(build_name(&p, mode).unwrap(), expected);
    }

    #[test]
    fn test_sort_mode() {
        let p = legislator("Sherrod", None, "Brown", None, None);
        assert_eq!(build_name(&p, NameMode::Sort).unwrap(), "Brown, Sherrod");
    }

    #[rstest]
    #[case("full", NameMode::Full)]
    #[case("sort", NameMode::Sort)]
    fn test_name_mode_parse(#[case] raw: &str, #[case] expected: NameMode) {
        assert_eq!(raw.parse::<NameMode>().unwrap(), expected);
    }

    #[rstest]
    #[case("official")]
    #[case("FULL")]
    #[case("")]
    fn test_unknown_name_mode_is_invalid_argument(#[case] raw: &str) {
        assert!(matches!(
            raw.parse::<NameMode>(),
            Err(ImportError::InvalidArgument(_))
        ));
    }
}
