//! The ordering session: drives the composer's command interface from
//! line input.
//!
//! Recoverable errors print their notice and re-prompt in the same
//! stage; only storage failures end the session.

use std::error::Error;

use tiffin_core::{OrderComposer, OrderError, Pricing, Stage};
use tiffin_db::Database;

use crate::{input, render};

/// Runs one ordering session from category selection to commit or
/// abandonment.
pub async fn run_order(db: &Database) -> Result<(), Box<dyn Error>> {
    let mut composer = OrderComposer::new(db.catalog(), db.ledger(), Pricing::standard());

    loop {
        match composer.stage().clone() {
            Stage::SelectingCategory => {
                let categories = composer.categories().await?;
                render::category_list(&categories);

                let choice = input::prompt("Category (or 'done' to checkout)")?;
                if choice.eq_ignore_ascii_case("done") {
                    if composer.checkout()?.is_none() {
                        println!("\nNo items in the order.");
                    }
                } else {
                    match composer.select_category(&choice).await {
                        Ok(items) => render::item_table(&choice, &items),
                        Err(err) if err.is_recoverable() => println!("{err}"),
                        Err(err) => return Err(err.into()),
                    }
                }
            }

            Stage::SelectingItem { .. } => {
                let id = input::prompt_i64("Item number (0 to go back)")?;
                if id == 0 {
                    composer.abandon_item()?;
                    continue;
                }
                match composer.select_item(id).await {
                    Ok(item) => println!("Selected: {} ({})", item.name, item.price),
                    Err(err) if err.is_recoverable() => println!("{err}"),
                    Err(err) => return Err(err.into()),
                }
            }

            Stage::EnteringQuantity { item } => {
                let quantity = input::prompt_i64(&format!("Quantity of {}", item.name))?;
                match composer.enter_quantity(quantity) {
                    Ok(line) => println!(
                        "Added {} x{} = {}",
                        line.name,
                        line.quantity,
                        line.line_total()
                    ),
                    Err(err) if err.is_recoverable() => println!("{err}"),
                    Err(err) => return Err(err.into()),
                }
            }

            Stage::Reviewing => {
                render::order_summary(&composer.summary());

                match input::prompt("Confirm order? (y/n)")?.as_str() {
                    "y" | "Y" => match composer.confirm().await {
                        Ok(receipt) => render::receipt(&receipt),
                        Err(err @ OrderError::LedgerWriteFailed(_)) => {
                            // The cart survived the failed write; the
                            // review re-displays and confirm can retry.
                            println!("{err}");
                        }
                        Err(err) => return Err(err.into()),
                    },
                    "n" | "N" => {
                        composer.cancel()?;
                        println!("Order cancelled.");
                    }
                    _ => println!("Please answer y or n."),
                }
            }

            Stage::Committed | Stage::Aborted => return Ok(()),
        }
    }
}
