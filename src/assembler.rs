// 🧩 Record Assembler - one flat row per legislator
// Current term + derived display fields + social handles.

use crate::config::Settings;
use crate::derive::{build_area, build_name, NameMode};
use crate::error::{ImportError, Result};
use crate::lookup::Chamber;
use crate::models::{Legislator, OutputRecord};
use crate::social::SocialMediaIndex;

/// Build the output row for a legislator's current (last) term
pub fn assemble_record(
    legislator: &Legislator,
    social: &SocialMediaIndex,
    settings: &Settings,
) -> Result<OutputRecord> {
    let id = legislator.bioguide();
    let term = legislator
        .current_term()
        .ok_or_else(|| ImportError::MissingField {
            record: format!("Legislator {}", id),
            field: "terms",
        })?;

    let chamber = Chamber::from_code(&term.term_type)?;
    let handles = social.handles(id);

    Ok(OutputRecord {
        id: id.to_string(),
        name: build_name(legislator, NameMode::Full)?,
        sort_name: build_name(legislator, NameMode::Sort)?,
        given_name: legislator.name.first.clone(),
        family_name: legislator.name.last.clone(),
        honorific_suffix: legislator.name.suffix.clone(),
        area: build_area(term)?,
        group: term.party.clone(),
        term: settings.session,
        chamber: chamber.name().to_string(),
        start_date: term.start,
        end_date: term.end,
        phone: term.phone.clone(),
        website: term.url.clone(),
        gender: legislator.bio.gender.clone(),
        birth_date: legislator.bio.birthday,
        image: settings.image_url(id),
        twitter: handles.twitter,
        facebook: handles.facebook,
        instagram: handles.instagram,
        wikipedia: legislator
            .id
            .wikipedia
            .as_deref()
            .map(|title| title.replace(' ', "_")),
    })
}
