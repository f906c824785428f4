//! The administrative view: credential gate, today's orders with the
//! revenue sum, and the catalog maintenance commands.
//!
//! The credential policy is injected by `main`; this module never
//! knows which usernames exist.

use std::error::Error;

use tracing::info;

use tiffin_core::validation::{validate_item_id, validate_item_name, validate_price};
use tiffin_core::{AdminPolicy, Ledger, Money};
use tiffin_db::{Database, StoreError};

use crate::{input, render};

/// Prompts for credentials and, if accepted, runs the admin menu.
pub async fn run(db: &Database, policy: &impl AdminPolicy) -> Result<(), Box<dyn Error>> {
    let username = input::prompt("Username")?;
    let password = input::prompt("Password")?;

    if !policy.verify(&username, &password) {
        println!("Invalid admin credentials. Access denied.");
        return Ok(());
    }
    info!(username, "Admin login accepted");

    loop {
        show_today(db).await?;

        println!("\n----- Admin -----");
        println!("1. Add menu item");
        println!("2. Update menu item");
        println!("3. Delete menu item");
        println!("4. Back to main menu");

        match input::prompt("Choice")?.as_str() {
            "1" => add_item(db).await?,
            "2" => update_item(db).await?,
            "3" => delete_item(db).await?,
            "4" => return Ok(()),
            _ => println!("Please choose 1-4."),
        }
    }
}

/// Today's ledger entries plus the day's revenue sum.
async fn show_today(db: &Database) -> Result<(), Box<dyn Error>> {
    let ledger = db.ledger();
    let entries = ledger.today().await?;
    let revenue = ledger.revenue_today().await?;

    println!("\n----- Today's Orders -----");
    if entries.is_empty() {
        println!("No orders found for today.");
    } else {
        render::ledger_table(&entries);
    }
    println!("Total revenue today: {revenue}");

    Ok(())
}

/// Reads and validates the name/price pair shared by add and update.
fn read_item_fields() -> Result<Option<(String, Money)>, Box<dyn Error>> {
    let name = input::prompt("Item name")?;
    if let Err(err) = validate_item_name(&name) {
        println!("{err}");
        return Ok(None);
    }

    let price = Money::from_rupees(input::prompt_i64("Price (whole rupees)")?);
    if let Err(err) = validate_price(price) {
        println!("{err}");
        return Ok(None);
    }

    Ok(Some((name, price)))
}

async fn add_item(db: &Database) -> Result<(), Box<dyn Error>> {
    let category = input::prompt("Category")?;
    let Some((name, price)) = read_item_fields()? else {
        return Ok(());
    };

    match db.catalog().add_item(&category, &name, price).await {
        Ok(item) => println!("Added {} as {} #{}", item.name, item.category, item.id),
        Err(StoreError::NotFound { .. }) => println!("Unknown category: {category}"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

async fn update_item(db: &Database) -> Result<(), Box<dyn Error>> {
    let category = input::prompt("Category")?;
    let id = input::prompt_i64("Item number")?;
    if let Err(err) = validate_item_id(id) {
        println!("{err}");
        return Ok(());
    }
    let Some((name, price)) = read_item_fields()? else {
        return Ok(());
    };

    match db.catalog().update_item(&category, id, &name, price).await {
        Ok(()) => println!("Updated {category} #{id}"),
        Err(StoreError::NotFound { .. }) => println!("No item {id} in category '{category}'"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

async fn delete_item(db: &Database) -> Result<(), Box<dyn Error>> {
    let category = input::prompt("Category")?;
    let id = input::prompt_i64("Item number")?;
    if let Err(err) = validate_item_id(id) {
        println!("{err}");
        return Ok(());
    }

    match db.catalog().delete_item(&category, id).await {
        Ok(()) => println!("Deleted {category} #{id}"),
        Err(StoreError::NotFound { .. }) => println!("No item {id} in category '{category}'"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
