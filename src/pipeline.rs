// 🔄 Import Pipeline - fetch, join, derive, store
//
// One sequential pass. The first error aborts the run; rows already
// upserted stay in the database. One write per legislator, nothing else.

use crate::assembler::assemble_record;
use crate::config::Settings;
use crate::db::upsert_record;
use crate::error::Result;
use crate::loader::DocumentSource;
use crate::models::{Legislator, SocialMediaRecord};
use crate::social::SocialMediaIndex;
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use tracing::info;

/// Counters for one completed import pass (kept in memory only)
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub session: u32,
    pub legislators: usize,
    pub rows_written: usize,
    pub with_social_media: usize,
}

impl RunSummary {
    pub fn start(session: u32) -> Self {
        RunSummary {
            run_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            finished_at: None,
            session,
            legislators: 0,
            rows_written: 0,
            with_social_media: 0,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }
}

pub fn run<S: DocumentSource>(
    settings: &Settings,
    source: &S,
    conn: &Connection,
) -> Result<RunSummary> {
    let mut summary = RunSummary::start(settings.session);

    let legislators: Vec<Legislator> = source.load(&settings.legislators_document)?;
    info!(count = legislators.len(), "loaded legislators");

    let social_records: Vec<SocialMediaRecord> = source.load(&settings.social_media_document)?;
    let social = SocialMediaIndex::build(social_records);
    info!(entries = social.len(), "indexed social media accounts");

    summary.legislators = legislators.len();

    for legislator in &legislators {
        let record = assemble_record(legislator, &social, settings)?;
        upsert_record(conn, &record)?;

        summary.rows_written += 1;
        if social.contains(legislator.bioguide()) {
            summary.with_social_media += 1;
        }
    }

    summary.finish();

    info!(
        run_id = %summary.run_id,
        rows = summary.rows_written,
        with_social_media = summary.with_social_media,
        "import complete"
    );

    Ok(summary)
}
