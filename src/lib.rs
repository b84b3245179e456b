// Congress Legislators - Core Library
// Fetches the congress-legislators YAML datasets, joins them and stores one
// row per legislator's current term in SQLite.

pub mod config;
pub mod error;
pub mod models;
pub mod loader;
pub mod social;
pub mod lookup;
pub mod derive;
pub mod assembler;
pub mod db;
pub mod export;
pub mod pipeline;

// Re-export commonly used types
pub use config::{Settings, CURRENT_CONGRESS};
pub use error::{ImportError, Result};
pub use models::{
    Legislator, LegislatorIds, LegislatorName, Bio, Term,
    SocialMediaRecord, SocialMediaIds, SocialHandles, OutputRecord,
};
pub use loader::{DocumentSource, RemoteLoader, parse_document};
pub use social::SocialMediaIndex;
pub use lookup::{Chamber, state_name};
pub use derive::{ordinal, build_area, build_name, first_name, last_name, NameMode};
pub use assembler::assemble_record;
pub use db::{
    COLUMNS, UNIQUE_KEY,
    setup_database, upsert_record,
    get_all_records, count_records,
};
pub use export::export_csv;
pub use pipeline::{run, RunSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
