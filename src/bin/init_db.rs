//! One-shot tool that creates the birthday tables if they are missing.

use anyhow::{anyhow, Result};
use birthday_bot::config::Config;
use birthday_bot::database::connection::{sqlite_file_path, DatabaseManager};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize basic logging for the migration
    env_logger::init();

    dotenvy::dotenv().ok();
    let database_url = Config::database_url_from_env();

    println!("📊 Database: {}", mask_url(&database_url));

    let db_manager = DatabaseManager::new(&database_url).await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    db_manager.run_migrations().await
        .map_err(|e| anyhow!("Failed to create tables: {}", e))?;

    println!("✅ База данных успешно создана!");
    Ok(())
}

fn mask_url(url: &str) -> String {
    // Only show the file name, not the full path
    match sqlite_file_path(url).and_then(|path| Path::new(path).file_name()) {
        Some(filename) => format!("sqlite:.../{}", filename.to_string_lossy()),
        None => url.to_string(),
    }
}
