//! # pharma-store: Injected State Layer for PharmaDesk
//!
//! This crate replaces the legacy dashboard's module-level sample arrays
//! (a fake database living in page code) with explicit, injected stores.
//! The core engine never owns global state: callers construct a
//! [`Catalog`], [`OrderStore`], and [`PromoStore`] and pass them where
//! needed.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      PharmaDesk Data Flow                               │
//! │                                                                         │
//! │  Dashboard action (add to order, redeem coupon, bulk re-open)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  pharma-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌───────────────┐   │   │
//! │  │   │    Catalog    │   │  OrderStore   │   │  PromoStore   │   │   │
//! │  │   │  products     │   │  orders       │   │  coupons      │   │   │
//! │  │   │  companies    │   │  transitions  │   │  offers       │   │   │
//! │  │   │  categories   │   │  counts       │   │  redemption   │   │   │
//! │  │   └───────┬───────┘   └───────┬───────┘   └───────┬───────┘   │   │
//! │  │           └───────────────────┼───────────────────┘           │   │
//! │  │                               ▼                               │   │
//! │  │              pharma-core (pure business rules)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  In-memory on purpose: persistence is the embedding app's concern.     │
//! │  These types mark where a future transaction boundary would sit.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Products, companies, categories; filtering and offers
//! - [`orders`] - Submitted orders and status transitions
//! - [`promos`] - Coupons and offers, status-aware queries, redemption
//! - [`seed`] - Demo data builders
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod orders;
pub mod promos;
pub mod seed;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{StoreError, StoreResult};
pub use orders::OrderStore;
pub use promos::PromoStore;
