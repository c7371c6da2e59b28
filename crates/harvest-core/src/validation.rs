//! # Validation Module
//!
//! Checks applied to seller details and invoice layout before a tax invoice
//! is printed. Totals themselves are never validated: malformed numbers are
//! coerced, not rejected.
//!
//! ## Usage
//! ```rust
//! use harvest_core::validation::{validate_gstin, validate_invoice_width};
//!
//! validate_gstin("27AAPFU0939F1ZV").unwrap();
//! validate_invoice_width(48).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_INVOICE_WIDTH, MIN_INVOICE_WIDTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest seller name that still fits a header line.
const MAX_SELLER_NAME_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates the seller (business) name printed in the invoice header.
///
/// ## Rules
/// - Must not be empty
/// - At most 100 characters
pub fn validate_seller_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "seller name".to_string(),
        });
    }

    if name.chars().count() > MAX_SELLER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "seller name".to_string(),
            max: MAX_SELLER_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a GSTIN (15-character GST identification number).
///
/// ## Format
/// ```text
///   27  AAPFU0939F  1   Z   V
///   │   │           │   │   └── check character
///   │   │           │   └────── always 'Z'
///   │   │           └────────── entity number (1-9, A-Z)
///   │   └────────────────────── PAN (5 letters, 4 digits, 1 letter)
///   └────────────────────────── state code (2 digits)
/// ```
///
/// The check character itself is not verified.
///
/// ## Example
/// ```rust
/// use harvest_core::validation::validate_gstin;
///
/// assert!(validate_gstin("27AAPFU0939F1ZV").is_ok());
/// assert!(validate_gstin("27AAPFU0939F1XV").is_err());
/// assert!(validate_gstin("").is_err());
/// ```
pub fn validate_gstin(gstin: &str) -> ValidationResult<()> {
    let gstin = gstin.trim();

    if gstin.is_empty() {
        return Err(ValidationError::Required {
            field: "gstin".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "gstin".to_string(),
        reason: reason.to_string(),
    };

    let chars: Vec<char> = gstin.chars().collect();
    if chars.len() != 15 {
        return Err(invalid("must be exactly 15 characters"));
    }

    if !chars[..2].iter().all(|c| c.is_ascii_digit()) {
        return Err(invalid("must start with a 2-digit state code"));
    }

    let pan = &chars[2..12];
    let pan_ok = pan[..5].iter().all(|c| c.is_ascii_uppercase())
        && pan[5..9].iter().all(|c| c.is_ascii_digit())
        && pan[9].is_ascii_uppercase();
    if !pan_ok {
        return Err(invalid("characters 3-12 must be a PAN"));
    }

    if !(chars[12].is_ascii_uppercase() || ('1'..='9').contains(&chars[12])) {
        return Err(invalid("entity number must be 1-9 or A-Z"));
    }

    if chars[13] != 'Z' {
        return Err(invalid("character 14 must be 'Z'"));
    }

    if !chars[14].is_ascii_alphanumeric() {
        return Err(invalid("check character must be alphanumeric"));
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the printed invoice width in columns.
pub fn validate_invoice_width(width: usize) -> ValidationResult<()> {
    if !(MIN_INVOICE_WIDTH..=MAX_INVOICE_WIDTH).contains(&width) {
        return Err(ValidationError::OutOfRange {
            field: "invoice width".to_string(),
            min: MIN_INVOICE_WIDTH as i64,
            max: MAX_INVOICE_WIDTH as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_seller_name() {
        assert!(validate_seller_name("Green Valley Produce").is_ok());
        assert!(validate_seller_name("").is_err());
        assert!(validate_seller_name("   ").is_err());
        assert!(validate_seller_name(&"A".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_gstin() {
        assert!(validate_gstin("27AAPFU0939F1ZV").is_ok());
        assert!(validate_gstin(" 29ABCDE1234F2Z5 ").is_ok());

        assert!(matches!(
            validate_gstin(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_gstin("27AAPFU0939F1Z").is_err()); // too short
        assert!(validate_gstin("A7AAPFU0939F1ZV").is_err()); // state code
        assert!(validate_gstin("27AAPF10939F1ZV").is_err()); // PAN letters
        assert!(validate_gstin("27AAPFU0939F0ZV").is_err()); // entity 0
        assert!(validate_gstin("27AAPFU0939F1YV").is_err()); // missing Z
        assert!(validate_gstin("27aapfu0939f1zv").is_err()); // lowercase
    }

    #[test]
    fn test_validate_invoice_width() {
        assert!(validate_invoice_width(32).is_ok());
        assert!(validate_invoice_width(48).is_ok());
        assert!(validate_invoice_width(120).is_ok());
        assert!(validate_invoice_width(31).is_err());
        assert!(validate_invoice_width(121).is_err());
    }
}
