//! # Error Types
//!
//! Domain-specific error types for pharma-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pharma-core errors (this file)                                        │
//! │  └── CoreError        - Local validation failures                      │
//! │                                                                         │
//! │  pharma-store errors (separate crate)                                  │
//! │  └── StoreError       - Lookup/duplicate failures, wraps CoreError     │
//! │                                                                         │
//! │  Flow: CoreError → StoreError → dashboard shows user-facing message    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (quantity, index, status, ...)
//! 3. Errors are enum variants, never String
//! 4. No variant is fatal: every rejected operation leaves state untouched

use rust_decimal::Decimal;
use thiserror::Error;

use crate::promo::PromoStatus;
use crate::types::OrderStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// All of these are local validation failures. The engine attempts no
/// recovery; the caller decides whether to retry with corrected input or
/// report to the end user. Every mutating operation is all-or-nothing, so a
/// rejected call never leaves partial state behind.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A unit price is negative.
    #[error("Invalid unit price: {price} (must be non-negative)")]
    InvalidPrice { price: Decimal },

    /// A discount percentage falls outside [0, 100].
    #[error("Invalid discount: {percent}% (must be between 0 and 100)")]
    InvalidDiscount { percent: Decimal },

    /// A line-item quantity is below 1 or above the runaway-entry cap.
    ///
    /// ## When This Occurs
    /// - Quantity field left at 0 or edited to a negative value
    /// - Typo such as 1000 instead of 10 (cap is 999)
    #[error("Invalid quantity: {quantity} (must be between 1 and {max})")]
    InvalidQuantity { quantity: i64, max: i64 },

    /// A positional line-item index is past the end of the sequence.
    #[error("Line item index {index} out of range (order has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// An order was submitted with no line items.
    #[error("Cannot submit an empty order")]
    EmptyOrder,

    /// An order was submitted without a supplying company selected.
    #[error("Cannot submit an order without a company selected")]
    NoCompanySelected,

    /// The requested order status change is not in the transition table.
    ///
    /// ## When This Occurs
    /// - Approving an already-approved order
    /// - Marking a rejected order delivered
    /// - Any bulk transition over an invalid (from, to) pair
    #[error("Invalid status transition: {from:?} → {to:?}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// A coupon was redeemed while upcoming, expired, or out of capacity.
    #[error("Coupon {code} is not active (currently {status:?})")]
    CouponNotActive { code: String, status: PromoStatus },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidQuantity {
            quantity: 0,
            max: 999,
        };
        assert_eq!(
            err.to_string(),
            "Invalid quantity: 0 (must be between 1 and 999)"
        );

        let err = CoreError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "Line item index 5 out of range (order has 2 items)"
        );
    }

    #[test]
    fn test_transition_error_names_both_states() {
        let err = CoreError::InvalidTransition {
            from: OrderStatus::Rejected,
            to: OrderStatus::Delivered,
        };
        assert_eq!(
            err.to_string(),
            "Invalid status transition: Rejected → Delivered"
        );
    }
}
