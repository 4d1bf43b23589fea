//! # Discount Resolver
//!
//! Computes the effective discount percentage and discounted price for a
//! product.
//!
//! ## Resolution Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Discount Resolution                                 │
//! │                                                                         │
//! │  Product.discount                                                       │
//! │       │                                                                 │
//! │       ├── Flat(p) ──────────────────────────────► p                    │
//! │       │                                                                 │
//! │       ├── Tier(10%..90%) ───────────────────────► tier percent         │
//! │       │                                                                 │
//! │       ├── Tier(Custom) ──► company.custom_discount, else 0             │
//! │       │                                                                 │
//! │       └── None ─────────────────────────────────► 0                    │
//! │                                                                         │
//! │  effective price = unit price × (1 − percent/100), full precision      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Flat-before-tier is a deliberate policy call: the legacy purchasing
//! screens disagreed on which value wins when both were present, and the
//! tagged [`Discount`] makes the question unrepresentable going forward.
//! Confirm with product owners before changing the order here.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::{Money, Percent};
use crate::types::{Company, DiscountTier, Product};
use crate::validation::validate_unit_price;

// =============================================================================
// Discount Variant
// =============================================================================

/// A product's discount as a single tagged value.
///
/// Replaces the legacy trio of optional fields (`discount`, `discountTier`,
/// `customDiscount`) whose precedence varied from screen to screen. Exactly
/// one variant is stored, so "which field wins" cannot arise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Discount {
    /// No discount configured.
    None,
    /// Explicit per-product percentage.
    Flat(Percent),
    /// Named bracket; `Custom` defers to the company.
    Tier(DiscountTier),
}

impl Default for Discount {
    fn default() -> Self {
        Discount::None
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolves the effective discount percentage for a product.
///
/// The company participates only when the product's tier is
/// [`DiscountTier::Custom`], supplying its `custom_discount`; a missing
/// override resolves to 0. A `Percent` is valid by construction, so
/// resolution itself cannot fail.
pub fn resolve(product: &Product, company: Option<&Company>) -> Percent {
    match product.discount {
        Discount::Flat(percent) => percent,
        Discount::Tier(tier) => tier.percent().unwrap_or_else(|| {
            company
                .and_then(|c| c.custom_discount)
                .unwrap_or_else(Percent::zero)
        }),
        Discount::None => Percent::zero(),
    }
}

/// Computes the discounted unit price for a product.
///
/// Returns the full-precision value; rounding to minor units happens at
/// presentation only, so aggregation never compounds rounding error.
///
/// ## Errors
/// Fails with [`crate::error::CoreError::InvalidPrice`] when the unit price
/// is negative.
///
/// ## Example
/// ```rust
/// use pharma_core::discount::{effective_price, Discount};
/// use pharma_core::money::{Money, Percent};
/// use pharma_core::types::Product;
/// use rust_decimal::Decimal;
///
/// let product = Product {
///     id: "p1".into(),
///     name: "Paracetamol 500mg".into(),
///     unit: "strip".into(),
///     price: Money::from_major(100),
///     discount: Discount::Flat(Percent::new(Decimal::from(20)).unwrap()),
///     company_id: "c1".into(),
///     category_id: "cat1".into(),
/// };
///
/// let price = effective_price(&product, None).unwrap();
/// assert_eq!(price, Money::from_major(80));
/// ```
pub fn effective_price(product: &Product, company: Option<&Company>) -> CoreResult<Money> {
    validate_unit_price(product.price)?;

    let percent = resolve(product, company);
    Ok(product.price.apply_discount(percent))
}

/// Resolves a company's own discount level: custom percentage first, then
/// tier, then 0.
///
/// This is display data (the invoice header's discount badge); it never
/// overrides a product-level discount during pricing.
pub fn company_discount(company: &Company) -> Percent {
    company
        .custom_discount
        .or_else(|| company.discount_tier.and_then(|t| t.percent()))
        .unwrap_or_else(Percent::zero)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(price: Money, discount: Discount) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Ibuprofen 400mg".to_string(),
            unit: "strip".to_string(),
            price,
            discount,
            company_id: "c1".to_string(),
            category_id: "cat1".to_string(),
        }
    }

    fn company(custom: Option<Percent>) -> Company {
        Company {
            id: "c1".to_string(),
            name: "United Pharma".to_string(),
            discount_tier: Some(DiscountTier::Fifty),
            custom_discount: custom,
        }
    }

    #[test]
    fn test_flat_discount_scenario() {
        // price 100, discount 20 → 80
        let p = product(
            Money::from_major(100),
            Discount::Flat(Percent::new(dec!(20)).unwrap()),
        );
        assert_eq!(effective_price(&p, None).unwrap(), Money::from_major(80));
    }

    #[test]
    fn test_tier_resolves_to_bracket_percent() {
        let p = product(Money::from_major(40), Discount::Tier(DiscountTier::Ten));
        assert_eq!(resolve(&p, None).value(), dec!(10));
        assert_eq!(effective_price(&p, None).unwrap(), Money::from_major(36));
    }

    #[test]
    fn test_no_discount_resolves_to_zero() {
        let p = product(Money::from_major(50), Discount::None);
        assert!(resolve(&p, None).is_zero());
        assert_eq!(effective_price(&p, None).unwrap(), Money::from_major(50));
    }

    #[test]
    fn test_custom_tier_uses_company_override() {
        let p = product(Money::from_major(100), Discount::Tier(DiscountTier::Custom));
        let c = company(Some(Percent::new(dec!(45)).unwrap()));
        assert_eq!(resolve(&p, Some(&c)).value(), dec!(45));
        assert_eq!(
            effective_price(&p, Some(&c)).unwrap(),
            Money::from_major(55)
        );
    }

    #[test]
    fn test_custom_tier_without_override_is_zero() {
        let p = product(Money::from_major(100), Discount::Tier(DiscountTier::Custom));
        // No company at all
        assert!(resolve(&p, None).is_zero());
        // Company present but no custom value: the company's own tier does
        // not leak into product pricing
        let c = company(None);
        assert!(resolve(&p, Some(&c)).is_zero());
    }

    #[test]
    fn test_flat_wins_over_company_override() {
        let p = product(
            Money::from_major(100),
            Discount::Flat(Percent::new(dec!(5)).unwrap()),
        );
        let c = company(Some(Percent::new(dec!(45)).unwrap()));
        assert_eq!(resolve(&p, Some(&c)).value(), dec!(5));
    }

    #[test]
    fn test_negative_price_rejected() {
        let p = product(Money::new(dec!(-1)), Discount::None);
        assert!(effective_price(&p, None).is_err());
    }

    #[test]
    fn test_effective_price_monotone_in_discount() {
        // Higher discount can never raise the price
        let base = Money::new(dec!(33.33));
        let mut last = base;
        for d in 0..=100 {
            let p = product(base, Discount::Flat(Percent::from_whole(d).unwrap()));
            let price = effective_price(&p, None).unwrap();
            assert!(price <= last, "price rose at discount {}", d);
            last = price;
        }
        assert!(last.is_zero());
    }

    #[test]
    fn test_full_precision_kept_until_presentation() {
        // 25.50 at 5% = 24.225; the engine must not round early
        let p = product(
            Money::new(dec!(25.50)),
            Discount::Flat(Percent::new(dec!(5)).unwrap()),
        );
        let price = effective_price(&p, None).unwrap();
        assert_eq!(price.amount(), dec!(24.2250));
        assert_eq!(price.rounded().amount(), dec!(24.22));
    }

    #[test]
    fn test_company_discount_prefers_custom() {
        let c = company(Some(Percent::new(dec!(45)).unwrap()));
        assert_eq!(company_discount(&c).value(), dec!(45));

        let c = company(None);
        assert_eq!(company_discount(&c).value(), dec!(50)); // falls back to tier

        let bare = Company {
            id: "c2".to_string(),
            name: "Integrated Care".to_string(),
            discount_tier: None,
            custom_discount: None,
        };
        assert!(company_discount(&bare).is_zero());
    }
}
