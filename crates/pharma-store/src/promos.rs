//! # Promo Store
//!
//! Holds coupons (keyed by code) and offers (keyed by id).
//!
//! Status is never stored: every listing takes a caller-supplied `now` and
//! derives status through the core validator, so a coupon that just ran
//! out of capacity shows as expired on the very next read.

use chrono::{DateTime, Utc};
use tracing::debug;

use pharma_core::{Coupon, Offer, PromoStatus};

use crate::error::{StoreError, StoreResult};

/// In-memory store of coupons and promotional offers.
#[derive(Debug, Clone, Default)]
pub struct PromoStore {
    coupons: Vec<Coupon>,
    offers: Vec<Offer>,
}

impl PromoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        PromoStore::default()
    }

    // -------------------------------------------------------------------------
    // Coupons
    // -------------------------------------------------------------------------

    /// Adds a coupon. Codes are unique; a collision is rejected.
    pub fn insert_coupon(&mut self, coupon: Coupon) -> StoreResult<()> {
        if self.coupons.iter().any(|c| c.code == coupon.code) {
            return Err(StoreError::Duplicate {
                entity: "coupon",
                id: coupon.code,
            });
        }

        debug!(code = %coupon.code, discount = %coupon.discount, "Inserting coupon");
        self.coupons.push(coupon);
        Ok(())
    }

    /// Gets a coupon by code.
    pub fn coupon(&self, code: &str) -> StoreResult<&Coupon> {
        self.coupons
            .iter()
            .find(|c| c.code == code)
            .ok_or_else(|| StoreError::NotFound {
                entity: "coupon",
                id: code.to_string(),
            })
    }

    /// All coupons, in insertion order.
    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    /// Coupons whose derived status at `now` matches `status`.
    pub fn coupons_with_status(&self, status: PromoStatus, now: DateTime<Utc>) -> Vec<&Coupon> {
        self.coupons
            .iter()
            .filter(|c| c.status(now) == status)
            .collect()
    }

    /// Redeems a coupon and persists the updated copy.
    ///
    /// The core's `redeem` is an immutable update; the store swaps the new
    /// coupon in only after it succeeds, so a rejected redemption changes
    /// nothing.
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] for an unknown code
    /// - [`pharma_core::CoreError::CouponNotActive`] (wrapped) when the
    ///   coupon is upcoming, expired, or out of capacity
    pub fn redeem(&mut self, code: &str, now: DateTime<Utc>) -> StoreResult<Coupon> {
        let slot = self
            .coupons
            .iter_mut()
            .find(|c| c.code == code)
            .ok_or_else(|| StoreError::NotFound {
                entity: "coupon",
                id: code.to_string(),
            })?;

        let updated = slot.redeem(now)?;
        *slot = updated.clone();

        debug!(code = %code, used = updated.used_count, remaining = updated.remaining_uses(), "Coupon redeemed");
        Ok(updated)
    }

    // -------------------------------------------------------------------------
    // Offers
    // -------------------------------------------------------------------------

    /// Adds an offer. Rejects duplicate ids.
    pub fn insert_offer(&mut self, offer: Offer) -> StoreResult<()> {
        if self.offers.iter().any(|o| o.id == offer.id) {
            return Err(StoreError::Duplicate {
                entity: "offer",
                id: offer.id,
            });
        }

        debug!(id = %offer.id, title = %offer.title, "Inserting offer");
        self.offers.push(offer);
        Ok(())
    }

    /// Gets an offer by id.
    pub fn offer(&self, id: &str) -> StoreResult<&Offer> {
        self.offers
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "offer",
                id: id.to_string(),
            })
    }

    /// All offers, in insertion order.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Offers whose derived status at `now` matches `status`.
    pub fn offers_with_status(&self, status: PromoStatus, now: DateTime<Utc>) -> Vec<&Offer> {
        self.offers
            .iter()
            .filter(|o| o.status(now) == status)
            .collect()
    }

    /// Offers active at `now` for a given product (the product page's
    /// promo banner).
    pub fn active_offers_for(&self, product_id: &str, now: DateTime<Utc>) -> Vec<&Offer> {
        self.offers
            .iter()
            .filter(|o| o.product_id == product_id && o.status(now) == PromoStatus::Active)
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
