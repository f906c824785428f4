//! # Tiffin Console
//!
//! The line-based front end. Owns nothing but rendering and input:
//! ordering goes through the composer's command interface, reporting
//! reads go through the ledger contract, and the admin view sits
//! behind an injected credential policy.
//!
//! ```text
//! main menu ──► browse menu     (Catalog reads)
//!           ──► place an order  (OrderComposer session)
//!           ──► recent orders   (Ledger reads)
//!           ──► admin panel     (AdminPolicy gate + today view + CRUD)
//! ```
//!
//! The database path comes from `--db <PATH>`, then the `TIFFIN_DB`
//! environment variable, then `./tiffin.db`.

mod admin;
mod input;
mod render;
mod session;

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tiffin_core::{Catalog, Ledger, StaticCredentials};
use tiffin_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Quiet by default so tables stay readable; RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let db_path = database_path();
    info!(path = %db_path, "Opening database");
    let db = Database::new(DbConfig::new(&db_path)).await?;

    let policy = StaticCredentials::reference();

    println!("==================================================");
    println!("        Tiffin Restaurant Ordering System");
    println!("==================================================");

    loop {
        println!("\n----- Main Menu -----");
        println!("1. Browse menu");
        println!("2. Place an order");
        println!("3. Recent orders");
        println!("4. Admin panel");
        println!("5. Exit");

        match input::prompt("Choice")?.as_str() {
            "1" => {
                if let Err(err) = browse_menu(&db).await {
                    eprintln!("Could not read the menu: {err}");
                }
            }
            "2" => {
                if let Err(err) = session::run_order(&db).await {
                    eprintln!("Order session ended: {err}");
                }
            }
            "3" => {
                if let Err(err) = recent_orders(&db).await {
                    eprintln!("Could not read orders: {err}");
                }
            }
            "4" => {
                if let Err(err) = admin::run(&db, &policy).await {
                    eprintln!("Admin view ended: {err}");
                }
            }
            "5" => break,
            _ => println!("Please choose 1-5."),
        }
    }

    db.close().await;
    println!("Goodbye!");
    Ok(())
}

/// Resolves the database path from argv, environment, or default.
fn database_path() -> String {
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if matches!(args[i].as_str(), "--db" | "-d") {
            if i + 1 < args.len() {
                return args[i + 1].clone();
            }
        }
        i += 1;
    }

    env::var("TIFFIN_DB").unwrap_or_else(|_| "./tiffin.db".to_string())
}

/// Shows the category list, then one chosen category's items.
async fn browse_menu(db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = db.catalog();
    let categories = catalog.categories().await?;
    render::category_list(&categories);

    let choice = input::prompt("Category to view (or blank to go back)")?;
    if choice.is_empty() {
        return Ok(());
    }

    match catalog.items(&choice).await {
        Ok(items) => render::item_table(&choice, &items),
        Err(err) => println!("{err}"),
    }

    Ok(())
}

/// The most recent orders plus all-time count and revenue.
async fn recent_orders(db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    let ledger = db.ledger();
    let entries = ledger.recent(20).await?;

    println!("\n----- Recent Orders -----");
    if entries.is_empty() {
        println!("No orders yet.");
    } else {
        render::ledger_table(&entries);
    }

    let count = ledger.count().await?;
    let revenue = ledger.revenue().await?;
    println!("\nOrders to date: {count}   Revenue to date: {revenue}");

    Ok(())
}
