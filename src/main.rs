use anyhow::{Context, Result};
use rusqlite::Connection;
use std::env;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use congress_legislators::{count_records, export_csv, run, setup_database, RemoteLoader, Settings};

const USAGE: &str = "Usage: congress-legislators [export <csv-path>]";

#[derive(Debug, PartialEq)]
enum Command {
    Import,
    Export(PathBuf),
}

/// Map raw arguments (program name first) to a command
fn parse_command(args: &[String]) -> std::result::Result<Command, String> {
    match args.get(1..).unwrap_or_default() {
        [] => Ok(Command::Import),
        [cmd] if cmd == "export" => Err("export needs a CSV path".to_string()),
        [cmd, path] if cmd == "export" => Ok(Command::Export(PathBuf::from(path))),
        [cmd, ..] if cmd == "export" => Err("export takes exactly one path".to_string()),
        [other, ..] => Err(format!("unknown argument '{}'", other)),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let command = match parse_command(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("❌ {}", message);
            eprintln!("   {}", USAGE);
            std::process::exit(2);
        }
    };

    init_tracing()?;

    match command {
        Command::Import => run_import()?,
        Command::Export(path) => run_export(&path)?,
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn run_import() -> Result<()> {
    let settings = Settings::default();

    println!("🏛️  Congress Legislators - YAML → SQLite");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("\n🔧 Setting up database...");
    let conn = Connection::open(&settings.database_path)
        .with_context(|| format!("Failed to open {}", settings.database_path.display()))?;
    setup_database(&conn)?;
    println!("✓ Database ready at {}", settings.database_path.display());

    println!("\n🌐 Fetching and storing legislators...");
    let loader = RemoteLoader::new(&settings)?;
    let summary = run(&settings, &loader, &conn)?;

    let count = count_records(&conn)?;

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✓ Legislators read: {}", summary.legislators);
    println!("✓ Rows upserted: {}", summary.rows_written);
    println!("✓ With social media: {}", summary.with_social_media);
    println!("✓ Rows in database: {}", count);
    println!("✅ Run {} complete", summary.run_id);

    Ok(())
}

fn run_export(csv_path: &Path) -> Result<()> {
    let settings = Settings::default();

    if !settings.database_path.exists() {
        eprintln!("❌ Database not found!");
        eprintln!("   Run: congress-legislators");
        eprintln!("   to import legislators first.");
        std::process::exit(1);
    }

    let conn = Connection::open(&settings.database_path)?;
    let written = export_csv(&conn, csv_path)
        .with_context(|| format!("Failed to export {}", csv_path.display()))?;

    println!("✓ Exported {} rows to {}", written, csv_path.display());

    Ok(())
}
