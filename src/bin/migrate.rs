use anyhow::{Result, anyhow};
use group_schedule_bot::config::Config;
use group_schedule_bot::database::connection::{sqlite_file_path, DatabaseManager};
use group_schedule_bot::database::seed::{seed_demo_week, DEMO_GROUP};
use group_schedule_bot::schedule::WeekWindow;
use std::env;
use std::io;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize basic logging for the migration
    env_logger::init();
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("migrate");

    match command {
        "migrate" | "up" => run_migrations().await,
        "check" => check_database().await,
        "reset" => reset_database().await,
        "seed" => {
            let offset = match args.get(2) {
                Some(raw) => raw.parse().map_err(|_| anyhow!("Invalid week offset: {raw}"))?,
                None => 0,
            };
            seed_database(offset).await
        }
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

async fn connect() -> Result<DatabaseManager> {
    let database_url = Config::database_url_from_env();
    println!("📊 Database URL: {}", mask_url(&database_url));

    DatabaseManager::new(&database_url).await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))
}

async fn run_migrations() -> Result<()> {
    println!("🔧 Group Schedule Bot - Database Migration Tool");
    println!("================================================");

    let db_manager = connect().await?;

    println!("🚀 Running database migrations...");
    match db_manager.run_migrations().await {
        Ok(_) => {
            println!("✅ Migrations completed successfully!");
            println!("\n🎯 Your schedule database is ready!");
        }
        Err(e) => {
            eprintln!("❌ Migration failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn check_database() -> Result<()> {
    println!("🔍 Checking database connection and schema...");

    let db_manager = connect().await?;

    match check_tables(&db_manager).await {
        Ok(tables) => {
            println!("✅ Database connection successful!");
            println!("📋 Found tables:");
            for table in tables {
                println!("  • {table}");
            }
        }
        Err(e) => {
            println!("⚠️  Database check failed: {e}");
            println!("💡 Try running 'migrate up' to create the schema");
        }
    }

    Ok(())
}

async fn reset_database() -> Result<()> {
    println!("⚠️  WARNING: This will delete ALL data in the database!");
    println!("🤔 Are you sure you want to continue? (yes/no)");

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    if input.trim().to_lowercase() != "yes" {
        println!("❌ Reset cancelled.");
        return Ok(());
    }

    let database_url = Config::database_url_from_env();
    let Some(db_path) = sqlite_file_path(&database_url) else {
        return Err(anyhow!("Reset is only supported for file-backed SQLite databases"));
    };

    if db_path.exists() {
        std::fs::remove_file(db_path)?;
        println!("🗑️  Deleted database file: {}", db_path.display());
    }

    println!("🔄 Recreating database schema...");
    run_migrations().await?;

    println!("✅ Database reset completed!");

    Ok(())
}

async fn seed_database(offset: i32) -> Result<()> {
    let db_manager = connect().await?;
    db_manager.run_migrations().await?;

    let week = WeekWindow::current(offset)?;
    println!("🌱 Seeding {} for the week starting {}...", DEMO_GROUP, week.week_start);

    let summary = seed_demo_week(&db_manager.pool, week.week_start).await?;
    println!(
        "✅ Added {} lessons (group id {}, schedule id {})",
        summary.lessons, summary.group_id, summary.schedule_id
    );

    Ok(())
}

async fn check_tables(db_manager: &DatabaseManager) -> Result<Vec<String>> {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name"
    )
    .fetch_all(&db_manager.pool)
    .await?;

    Ok(rows.into_iter().map(|(name,)| name).collect())
}

fn mask_url(url: &str) -> String {
    // Don't show full paths in logs
    match sqlite_file_path(url).and_then(Path::file_name) {
        Some(filename) => format!("sqlite:.../{}", filename.to_string_lossy()),
        None => url.to_string(),
    }
}

fn print_help() {
    println!("📅 Group Schedule Bot - Database Migration Tool");
    println!();
    println!("USAGE:");
    println!("    migrate [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    migrate, up    Run database migrations (default)");
    println!("    check          Check database connection and schema");
    println!("    reset          Reset database (SQLite only) - DESTRUCTIVE!");
    println!("    seed [OFFSET]  Insert the demo group with a week of lessons");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    DATABASE_URL   Database connection string (default: sqlite:./data/schedule.db)");
    println!();
    println!("EXAMPLES:");
    println!("    migrate                    # Run migrations");
    println!("    migrate check              # Check database status");
    println!("    migrate seed 1             # Demo lessons for next week");
    println!("    migrate reset              # Reset database (careful!)");
    println!();
}
