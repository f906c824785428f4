//! # Menu Provisioning
//!
//! Populates a database with the reference menu.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p tiffin-db --bin seed
//!
//! # Specify database path
//! cargo run -p tiffin-db --bin seed -- --db ./data/tiffin.db
//! ```
//!
//! Idempotent: a database that already holds menu rows is left as-is.

use std::env;

use tiffin_db::{seed, Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./tiffin.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Tiffin Menu Provisioning");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./tiffin.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Tiffin Menu Provisioning");
    println!("========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let inserted = seed::seed(&db).await?;
    if inserted == 0 {
        println!("⚠ Menu already present, nothing written.");
        println!("  Delete the database file to reprovision.");
    } else {
        println!(
            "✓ Seeded {} items across {} categories",
            inserted,
            seed::REFERENCE_MENU.len()
        );
    }

    db.close().await;

    println!();
    println!("✓ Done");
    Ok(())
}
