//! # Domain Types
//!
//! Core domain types for the pharmacy ordering engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Company      │   │    Category     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name / unit    │   │  name           │   │  name           │       │
//! │  │  price          │   │  discount_tier  │   └─────────────────┘       │
//! │  │  discount       │   │  custom_disc.   │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │    Coupon       │   │     Offer       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  items (seq)    │   │  code           │   │  title          │       │
//! │  │  total          │   │  validity       │   │  product_id     │       │
//! │  │  status         │   │  max/used       │   │  validity       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle Rules
//! - Products/Companies/Categories are seeded once and read-only here;
//!   editing them is a dashboard concern.
//! - `OrderItem`s snapshot product data when added: a historical order is
//!   never retroactively changed by a catalog edit.
//! - Orders are immutable after submission except for status transitions.
//! - Coupon/Offer status is recomputed on every read, never stored.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::discount::Discount;
use crate::error::CoreError;
use crate::money::{Money, Percent};

// =============================================================================
// Discount Tier
// =============================================================================

/// A named discount bracket applied uniformly instead of a per-product
/// numeric value.
///
/// The fixed brackets are the labels the purchasing screens offer in their
/// tier dropdowns; `Custom` defers to a company-supplied percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DiscountTier {
    #[serde(rename = "10%")]
    Ten,
    #[serde(rename = "20%")]
    Twenty,
    #[serde(rename = "30%")]
    Thirty,
    #[serde(rename = "40%")]
    Forty,
    #[serde(rename = "50%")]
    Fifty,
    #[serde(rename = "90%")]
    Ninety,
    #[serde(rename = "custom")]
    Custom,
}

impl DiscountTier {
    /// Returns the tier's fixed percentage, or `None` for `Custom`.
    pub fn percent(&self) -> Option<Percent> {
        let whole = match self {
            DiscountTier::Ten => 10,
            DiscountTier::Twenty => 20,
            DiscountTier::Thirty => 30,
            DiscountTier::Forty => 40,
            DiscountTier::Fifty => 50,
            DiscountTier::Ninety => 90,
            DiscountTier::Custom => return None,
        };
        // Brackets are hard-coded within [0, 100]; construction cannot fail.
        Percent::from_whole(whole).ok()
    }
}

/// Renders the original label strings ("20%", "custom").
impl fmt::Display for DiscountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountTier::Custom => write!(f, "custom"),
            other => {
                // percent() is Some for every non-Custom variant
                let pct = other.percent().unwrap_or_else(Percent::zero);
                write!(f, "{}", pct)
            }
        }
    }
}

/// Parses a tier label by its leading integer ("20%" → `Twenty`).
impl FromStr for DiscountTier {
    type Err = CoreError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("custom") {
            return Ok(DiscountTier::Custom);
        }

        let digits: String = label.chars().take_while(|c| c.is_ascii_digit()).collect();
        let value: u32 = digits.parse().map_err(|_| CoreError::InvalidDiscount {
            percent: rust_decimal::Decimal::ZERO,
        })?;

        match value {
            10 => Ok(DiscountTier::Ten),
            20 => Ok(DiscountTier::Twenty),
            30 => Ok(DiscountTier::Thirty),
            40 => Ok(DiscountTier::Forty),
            50 => Ok(DiscountTier::Fifty),
            90 => Ok(DiscountTier::Ninety),
            other => Err(CoreError::InvalidDiscount {
                percent: rust_decimal::Decimal::from(other),
            }),
        }
    }
}

// =============================================================================
// Catalog Records
// =============================================================================

/// A medication or supply item a pharmacy can order from a company.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in the catalog and on order lines.
    pub name: String,

    /// Dispensing unit label ("strip", "bottle", "box").
    pub unit: String,

    /// Unit price. Non-negative; enforced when the price enters a
    /// calculation.
    pub price: Money,

    /// The product's discount, as a single tagged value. At most one of
    /// flat/tier is ever authoritative because only one can be stored.
    pub discount: Discount,

    /// Owning company reference.
    pub company_id: String,

    /// Category reference.
    pub category_id: String,
}

/// A pharmaceutical company supplying products.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Company {
    pub id: String,
    pub name: String,

    /// Company-wide discount bracket, if negotiated.
    pub discount_tier: Option<DiscountTier>,

    /// Custom percentage overriding the tier. Also supplies the value for
    /// products whose own tier is `Custom`.
    pub custom_discount: Option<Percent>,
}

/// Pure classification, no behavior.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
}

// =============================================================================
// Orders
// =============================================================================

/// A line item inside an order.
///
/// Uses the snapshot pattern: name, unit, discount, and price are frozen at
/// the moment the product is added, so later catalog edits never rewrite
/// historical orders.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    /// Own identity (UUID v4). Removal of a neighbor changes this item's
    /// position, never its identity.
    pub id: String,

    /// Reference back to the source product.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Dispensing unit at time of adding (frozen).
    pub unit: String,

    /// Quantity ordered.
    pub quantity: i64,

    /// Resolved discount percentage at time of adding (frozen).
    pub discount: Percent,

    /// Discounted unit price at full precision (frozen).
    pub unit_price: Money,

    /// Line total: `unit_price × quantity`, full precision.
    pub line_total: Money,

    /// When the item was added to the draft. Supplied by the caller, like
    /// every other timestamp in this crate.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

/// The status of a submitted order.
///
/// Transitions are governed by the table in the `order` module; these
/// variants carry no behavior of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Submitted, awaiting the company's review.
    Pending,
    /// Accepted by the company.
    Approved,
    /// Declined by the company. Terminal.
    Rejected,
    /// Being prepared/shipped.
    InProgress,
    /// Received by the pharmacy. Re-openable by manual override.
    Delivered,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// A submitted purchase order from a pharmacy to a company.
///
/// Immutable after submission except for status transitions. The aggregate
/// total always equals the sum of line totals as of submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Supplying company reference.
    pub company_id: String,

    /// Company name at time of submission (frozen for display).
    pub company_name: String,

    /// Line items; insertion order is display order.
    pub items: Vec<OrderItem>,

    /// Sum of line totals, full precision.
    pub total: Money,

    /// When the order was submitted.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    pub status: OrderStatus,

    /// Optional free-text notes entered on the order form.
    pub notes: Option<String>,
}

// =============================================================================
// Coupons and Offers
// =============================================================================

/// A redeemable discount code with a validity window and a redemption cap.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coupon {
    /// Unique uppercase alphanumeric code.
    pub code: String,

    /// Discount granted on redemption.
    pub discount: Percent,

    /// Start of the validity window (inclusive).
    #[ts(as = "String")]
    pub valid_from: DateTime<Utc>,

    /// End of the validity window (inclusive).
    #[ts(as = "String")]
    pub valid_to: DateTime<Utc>,

    /// Redemption capacity.
    pub max_uses: u32,

    /// Redemptions so far. Invariant: `used_count <= max_uses`.
    pub used_count: u32,
}

impl Coupon {
    /// Creates a coupon valid from `now` for `valid_days` days, the way the
    /// dashboard's create-coupon form builds the window.
    pub fn new(
        code: impl Into<String>,
        discount: Percent,
        valid_days: i64,
        max_uses: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Coupon {
            code: code.into(),
            discount,
            valid_from: now,
            valid_to: now + Duration::days(valid_days),
            max_uses,
            used_count: 0,
        }
    }
}

/// A time-limited promotional discount on a single product.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Offer {
    pub id: String,

    /// Marketing title ("Summer sale").
    pub title: String,

    /// The discounted product.
    pub product_id: String,

    pub discount: Percent,

    #[ts(as = "String")]
    pub valid_from: DateTime<Utc>,

    #[ts(as = "String")]
    pub valid_to: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
