//! Table and summary rendering for the console shell.
//!
//! Everything here is plain `println!` formatting; the numbers come
//! from the core and are never recomputed at the presentation layer.

use chrono::Local;

use tiffin_core::{LedgerEntry, MenuItem, OrderReceipt, OrderSummary, PriceBreakdown};

/// Prints the category list, one per line.
pub fn category_list(categories: &[String]) {
    println!("\n----- Categories -----");
    for category in categories {
        println!("  {category}");
    }
    println!();
}

/// Prints one category's items as an SL / name / price table.
pub fn item_table(category: &str, items: &[MenuItem]) {
    println!("\n----- {category} -----");
    println!("{:<4} {:<32} {:>10}", "SL", "Item", "Price");
    println!("{}", "-".repeat(48));
    for item in items {
        println!(
            "{:<4} {:<32} {:>10}",
            item.id,
            item.name,
            item.price.to_string()
        );
    }
    println!();
}

/// Prints the checkout breakdown: subtotal, both taxes, grand total.
pub fn breakdown(b: &PriceBreakdown) {
    println!("{}", "-".repeat(48));
    println!("{:<36} {:>11}", "Subtotal", b.subtotal.to_string());
    println!("{:<36} {:>11}", "CGST (2.5%)", format!("Rs. {:.2}", b.cgst));
    println!("{:<36} {:>11}", "SGST (2.5%)", format!("Rs. {:.2}", b.sgst));
    println!(
        "{:<36} {:>11}",
        "Grand Total",
        format!("Rs. {:.2}", b.grand_total)
    );
}

/// Prints the order under review: every line, then the breakdown.
pub fn order_summary(summary: &OrderSummary) {
    println!("\n----- Your Order -----");
    println!("{:<32} {:>4} {:>11}", "Item", "Qty", "Total");
    println!("{}", "-".repeat(48));
    for line in &summary.lines {
        println!(
            "{:<32} {:>4} {:>11}",
            line.name,
            line.quantity,
            line.line_total().to_string()
        );
    }
    breakdown(&summary.breakdown);
}

/// Prints the receipt after a successful commit.
pub fn receipt(receipt: &OrderReceipt) {
    println!("\n===== Order Placed =====");
    for record in &receipt.records {
        println!(
            "{:<32} {:>4} {:>11}",
            record.item_name,
            record.quantity,
            record.line_total.to_string()
        );
    }
    breakdown(&receipt.breakdown);
    println!("Thank you! Please pay at the counter.\n");
}

/// Prints ledger entries as an order-history table, newest first.
pub fn ledger_table(entries: &[LedgerEntry]) {
    println!(
        "{:<6} {:<28} {:>10} {:>4} {:>11}  {}",
        "Order", "Item", "Price", "Qty", "Total", "Time"
    );
    println!("{}", "-".repeat(82));
    for entry in entries {
        let local_time = entry.ordered_at.with_timezone(&Local);
        println!(
            "{:<6} {:<28} {:>10} {:>4} {:>11}  {}",
            entry.id,
            entry.item_name,
            entry.unit_price.to_string(),
            entry.quantity,
            entry.line_total.to_string(),
            local_time.format("%Y-%m-%d %H:%M")
        );
    }
}
