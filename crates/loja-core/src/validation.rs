//! # Validation Module
//!
//! Boundary validation for Loja requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (serde)                                        │
//! │  └── Required fields present, correct JSON types                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Names not blank, bounded length                                   │
//! │  └── Decimal amounts fit in cents                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints, append-only triggers on sales               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ledger itself accepts any quantity and value (including zero and
//! negatives); only shape is checked here.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer or product name and returns it unchanged.
///
/// Reports group on the exact stored string, so surrounding whitespace is
/// kept: `" Ana"` and `"Ana"` are two customers.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most [`MAX_NAME_LENGTH`] characters
///
/// ## Example
/// ```rust
/// use loja_core::validation::validate_name;
///
/// assert_eq!(validate_name("customerName", " Ana").unwrap(), " Ana");
/// assert!(validate_name("customerName", "   ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Converts a decimal amount into [`Money`].
///
/// Any sign is accepted; the amount only has to fit in i64 cents.
pub fn validate_amount(field: &str, amount: Decimal) -> ValidationResult<Money> {
    Money::from_decimal(amount).ok_or_else(|| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "amount does not fit in cents".to_string(),
    })
}

/// Converts a decimal unit price into [`Money`], rejecting negatives.
///
/// ## Example
/// ```rust
/// use loja_core::validation::validate_price;
/// use rust_decimal::Decimal;
///
/// assert!(validate_price(Decimal::new(1099, 2)).is_ok());
/// assert!(validate_price(Decimal::ZERO).is_ok());
/// assert!(validate_price(Decimal::new(-1, 0)).is_err());
/// ```
pub fn validate_price(price: Decimal) -> ValidationResult<Money> {
    let money = validate_amount("price", price)?;

    if money.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(money)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("name", "Café 500g").unwrap(), "Café 500g");
        assert_eq!(validate_name("name", "  padded  ").unwrap(), "  padded  ");

        assert!(matches!(
            validate_name("name", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_name("name", "\t \n"),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_name("name", &"A".repeat(MAX_NAME_LENGTH + 1)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_name_counts_characters_not_bytes() {
        let accented = "é".repeat(MAX_NAME_LENGTH);
        assert!(validate_name("name", &accented).is_ok());
    }

    #[test]
    fn test_validate_amount_accepts_any_sign() {
        assert_eq!(
            validate_amount("value", Decimal::new(-250, 2)).unwrap(),
            Money::from_cents(-250)
        );
        assert_eq!(validate_amount("value", Decimal::ZERO).unwrap(), Money::zero());
        assert!(validate_amount("value", Decimal::MAX).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price(Decimal::new(1099, 2)).unwrap().cents(), 1099);
        assert!(matches!(
            validate_price(Decimal::new(-1, 2)),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
