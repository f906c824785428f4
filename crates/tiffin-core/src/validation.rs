//! # Validation Module
//!
//! Input validation for the catalog administration surface.
//!
//! The ordering flow needs none of this: menu items arrive from the
//! catalog already well-formed and quantities are checked by the cart.
//! These rules guard the admin commands that create and change menu
//! items, before any SQL runs. The database constraints repeat the
//! same rules as a second net.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

/// Longest accepted menu item name.
pub const MAX_ITEM_NAME_LEN: usize = 200;

/// Validates a menu item name.
///
/// Must be non-empty after trimming and at most
/// [`MAX_ITEM_NAME_LEN`] characters.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (complimentary items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.rupees() < 0 {
        return Err(ValidationError::TooSmall {
            field: "price".to_string(),
            min: 0,
        });
    }

    Ok(())
}

/// Validates an item serial number. Serials start at 1.
pub fn validate_item_id(id: i64) -> ValidationResult<()> {
    if id < 1 {
        return Err(ValidationError::TooSmall {
            field: "item id".to_string(),
            min: 1,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Masala Dosa").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"x".repeat(201)).is_err());
        assert!(validate_item_name(&"x".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_rupees(80)).is_ok());
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_rupees(-1)).is_err());
    }

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id(1).is_ok());
        assert!(validate_item_id(0).is_err());
        assert!(validate_item_id(-5).is_err());
    }
}
