// 📤 CSV Export - dump stored rows for downstream consumers

use crate::db::get_all_records;
use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::info;

/// Write every stored row to `path` as CSV with a header line.
///
/// Returns the number of rows written. Absent values become empty fields.
pub fn export_csv(conn: &Connection, path: &Path) -> Result<usize> {
    let records = get_all_records(conn)?;
    let mut writer = csv::Writer::from_path(path)?;

    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = records.len(), "exported CSV");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{setup_database, upsert_record, COLUMNS};
    use crate::models::OutputRecord;
    use tempfile::tempdir;

    fn record() -> OutputRecord {
        OutputRecord {
            id: "X000001".to_string(),
            name: "Jane Example".to_string(),
            sort_name: "Example, Jane".to_string(),
            given_name: "Jane".to_string(),
            family_name: "Example".to_string(),
            honorific_suffix: None,
            area: "Vermont".to_string(),
            group: Some("Independent".to_string()),
            term: 119,
            chamber: "Senate".to_string(),
            start_date: "2025-01-03".parse().unwrap(),
            end_date: "2031-01-03".parse().unwrap(),
            phone: None,
            website: None,
            gender: None,
            birth_date: None,
            image: "https://theunitedstates.io/images/congress/original/X000001.jpg".to_string(),
            twitter: Some("SenExample".to_string()),
            facebook: None,
            instagram: None,
            wikipedia: None,
        }
    }

    #[test]
    fn test_export_header_and_rows() {
        let conn = Connection::open_in_memory().unwrap();
        setup_database(&conn).unwrap();
        upsert_record(&conn, &record()).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("legislators.csv");
        let written = export_csv(&conn, &path).unwrap();

        assert_eq!(written, 1);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
        assert_eq!(headers, COLUMNS.to_vec());

        let rows: Vec<OutputRecord> = reader
            .deserialize::<OutputRecord>()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(rows, vec![record()]);
    }

    #[test]
    fn test_export_empty_table() {
        let conn = Connection::open_in_memory().unwrap();
        setup_database(&conn).unwrap();

        let dir = tempdir().unwrap();
        let written = export_csv(&conn, &dir.path().join("empty.csv")).unwrap();

        assert_eq!(written, 0);
    }
}
