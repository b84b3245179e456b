// 🗄️ Store Writer - SQLite upserts
//
// Every column of `data` is TEXT. Values are normalized to optional text
// right before the write and nowhere else; absent values become NULL.

use crate::error::Result;
use crate::models::OutputRecord;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params_from_iter, Connection, Row};
use tracing::debug;

/// Columns of the `data` table, in `OutputRecord` field order
pub const COLUMNS: [&str; 21] = [
    "id",
    "name",
    "sort_name",
    "given_name",
    "family_name",
    "honorific_suffix",
    "area",
    "group",
    "term",
    "chamber",
    "start_date",
    "end_date",
    "phone",
    "website",
    "gender",
    "birth_date",
    "image",
    "twitter",
    "facebook",
    "instagram",
    "wikipedia",
];

/// Composite uniqueness constraint of the `data` table
pub const UNIQUE_KEY: [&str; 4] = ["id", "term", "chamber", "start_date"];

// ============================================================================
// SCHEMA
// ============================================================================

fn quoted(column: &str) -> String {
    format!("\"{}\"", column)
}

pub fn setup_database(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "journal_mode", "WAL")?;

    let columns = COLUMNS
        .iter()
        .map(|c| {
            let not_null = UNIQUE_KEY.contains(c) || matches!(*c, "name" | "sort_name" | "area");
            format!("{} TEXT{}", quoted(c), if not_null { " NOT NULL" } else { "" })
        })
        .collect::<Vec<_>>()
        .join(",\n            ");
    let unique = UNIQUE_KEY.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ");

    conn.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS data (
            {},
            UNIQUE ({})
        )",
            columns, unique
        ),
        [],
    )?;

    Ok(())
}

// ============================================================================
// WRITES
// ============================================================================

/// Text form of every column, ready to bind
fn normalize(record: &OutputRecord) -> [Option<String>; 21] {
    [
        Some(record.id.clone()),
        Some(record.name.clone()),
        Some(record.sort_name.clone()),
        Some(record.given_name.clone()),
        Some(record.family_name.clone()),
        record.honorific_suffix.clone(),
        Some(record.area.clone()),
        record.group.clone(),
        Some(record.term.to_string()),
        Some(record.chamber.clone()),
        Some(record.start_date.to_string()),
        Some(record.end_date.to_string()),
        record.phone.clone(),
        record.website.clone(),
        record.gender.clone(),
        record.birth_date.map(|d| d.to_string()),
        Some(record.image.clone()),
        record.twitter.clone(),
        record.facebook.clone(),
        record.instagram.clone(),
        record.wikipedia.clone(),
    ]
}

/// Insert or replace one row matching the `(id, term, chamber, start_date)` key.
///
/// Runs outside any transaction; earlier writes survive a later failure.
pub fn upsert_record(conn: &Connection, record: &OutputRecord) -> Result<()> {
    let columns = COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ");
    let placeholders = (1..=COLUMNS.len())
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ");

    let values = normalize(record);
    conn.execute(
        &format!(
            "INSERT OR REPLACE INTO data ({}) VALUES ({})",
            columns, placeholders
        ),
        params_from_iter(values.iter()),
    )?;

    debug!(id = %record.id, chamber = %record.chamber, "row upserted");
    Ok(())
}

// ============================================================================
// READS
// ============================================================================

fn conversion_error(
    idx: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
}

fn date_column(row: &Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let text: String = row.get(idx)?;
    text.parse::<NaiveDate>().map_err(|e| conversion_error(idx, e))
}

fn optional_date_column(row: &Row, idx: usize) -> rusqlite::Result<Option<NaiveDate>> {
    let text: Option<String> = row.get(idx)?;
    text.map(|t| t.parse::<NaiveDate>().map_err(|e| conversion_error(idx, e)))
        .transpose()
}

fn record_from_row(row: &Row) -> rusqlite::Result<OutputRecord> {
    let term: String = row.get(8)?;

    Ok(OutputRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        sort_name: row.get(2)?,
        given_name: row.get(3)?,
        family_name: row.get(4)?,
        honorific_suffix: row.get(5)?,
        area: row.get(6)?,
        group: row.get(7)?,
        term: term.parse().map_err(|e| conversion_error(8, e))?,
        chamber: row.get(9)?,
        start_date: date_column(row, 10)?,
        end_date: date_column(row, 11)?,
        phone: row.get(12)?,
        website: row.get(13)?,
        gender: row.get(14)?,
        birth_date: optional_date_column(row, 15)?,
        image: row.get(16)?,
        twitter: row.get(17)?,
        facebook: row.get(18)?,
        instagram: row.get(19)?,
        wikipedia: row.get(20)?,
    })
}

/// All stored rows, ordered by id then chamber
pub fn get_all_records(conn: &Connection) -> Result<Vec<OutputRecord>> {
    let columns = COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ");
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM data ORDER BY id, chamber, start_date",
        columns
    ))?;

    let records = stmt
        .query_map([], record_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(records)
}

pub fn count_records(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM data", [], |row| row.get(0))?;

    Ok(count)
}
