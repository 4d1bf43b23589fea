//! # pharma-core: Pure Business Logic for PharmaDesk
//!
//! This crate is the **heart** of the PharmaDesk ordering system. It holds
//! the pricing and order-aggregation engine extracted from the dashboard's
//! page handlers, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      PharmaDesk Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Dashboard Frontend (excluded)                   │   │
//! │  │   Orders ── Warehouses ── Invoices ── Coupons ── Offers        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated TS bindings                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pharma-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ discount  │  │   order   │  │   promo   │  │   │
//! │  │   │  Product  │  │  resolve  │  │OrderDraft │  │  Coupon   │  │   │
//! │  │   │  Company  │  │ effective │  │transitions│  │  Offer    │  │   │
//! │  │   │   Order   │  │   price   │  │           │  │  status   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK READS • NO GLOBAL STATE • PURE FUNCTIONS   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               pharma-store (injected state layer)               │   │
//! │  │          Catalog, OrderStore, PromoStore, seed data             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Company, Order, Coupon, Offer, ...)
//! - [`money`] - Full-precision `Money` and validated `Percent`
//! - [`discount`] - Effective-discount resolution and pricing
//! - [`order`] - Order aggregation, submission, status transitions
//! - [`promo`] - Coupon/offer status, redemption, code generation
//! - [`validation`] - Shared input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output; `now` is always an
//!    explicit argument
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Full-Precision Money**: decimal arithmetic, rounded once at
//!    presentation
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use pharma_core::discount::Discount;
//! use pharma_core::money::{Money, Percent};
//! use pharma_core::order::OrderDraft;
//! use pharma_core::types::Product;
//! use rust_decimal::Decimal;
//!
//! let product = Product {
//!     id: "p1".into(),
//!     name: "Vitamin C 1000mg".into(),
//!     unit: "box".into(),
//!     price: Money::from_major(40),
//!     discount: Discount::Flat(Percent::new(Decimal::from(10)).unwrap()),
//!     company_id: "c1".into(),
//!     category_id: "cat2".into(),
//! };
//!
//! let mut draft = OrderDraft::new();
//! draft.add_item(&product, 2, None, Utc::now()).unwrap();
//!
//! // 40 × (1 − 10/100) × 2 = 72
//! assert_eq!(draft.total(), Money::from_major(72));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod order;
pub mod promo;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pharma_core::Money` instead of
// `use pharma_core::money::Money`

pub use discount::{company_discount, effective_price, resolve, Discount};
pub use error::{CoreError, CoreResult};
pub use money::{Money, Percent};
pub use order::{transition_all, OrderDraft};
pub use promo::{generate_code, window_status, PromoStatus};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Can be made configurable per pharmacy in future versions.
pub const MAX_ITEM_QUANTITY: i64 = 999;
