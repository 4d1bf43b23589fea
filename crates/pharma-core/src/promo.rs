//! # Coupon/Offer Validator
//!
//! Derives the status of coupons and promotional offers relative to an
//! explicit reference time, tracks redemption capacity, and generates
//! coupon codes.
//!
//! ## Status Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Status Timeline                                     │
//! │                                                                         │
//! │        valid_from                    valid_to                           │
//! │  ──────────┼────────────────────────────┼──────────►  time             │
//! │  upcoming  │           active           │  expired                     │
//! │            │  (coupons: only while      │                              │
//! │            │   used_count < max_uses)   │                              │
//! │                                                                         │
//! │  Capacity exhaustion expires a coupon EARLY, even inside the window.   │
//! │  Status is recomputed on every read; nothing stores a stale field.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `now` is always a parameter. The engine never reads the clock, so the
//! same inputs always derive the same status.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Coupon, Offer};

// =============================================================================
// Promo Status
// =============================================================================

/// Derived status of a coupon or offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PromoStatus {
    /// The validity window has not opened yet.
    Upcoming,
    /// Inside the window (and, for coupons, capacity remains).
    Active,
    /// Past the window, or capacity exhausted.
    Expired,
}

/// Derives the window-only status: upcoming before `valid_from`, active
/// inside the inclusive window, expired after `valid_to`.
pub fn window_status(
    valid_from: DateTime<Utc>,
    valid_to: DateTime<Utc>,
    now: DateTime<Utc>,
) -> PromoStatus {
    if now < valid_from {
        PromoStatus::Upcoming
    } else if now > valid_to {
        PromoStatus::Expired
    } else {
        PromoStatus::Active
    }
}

// =============================================================================
// Coupon Behavior
// =============================================================================

impl Coupon {
    /// Derives the coupon's status at `now`.
    ///
    /// Capacity exhaustion (`used_count >= max_uses`) expires the coupon
    /// early even when `now` is strictly inside the validity window. An
    /// upcoming coupon stays upcoming regardless of capacity.
    pub fn status(&self, now: DateTime<Utc>) -> PromoStatus {
        match window_status(self.valid_from, self.valid_to, now) {
            PromoStatus::Active if self.used_count >= self.max_uses => PromoStatus::Expired,
            other => other,
        }
    }

    /// Remaining redemption capacity, floored at 0.
    pub fn remaining_uses(&self) -> u32 {
        self.max_uses.saturating_sub(self.used_count)
    }

    /// Redeems the coupon once, returning the updated copy.
    ///
    /// The update is immutable: `self` is untouched and the caller swaps in
    /// the returned coupon, so the change is always explicit.
    ///
    /// ## Errors
    /// [`CoreError::CouponNotActive`] when the status at `now` is anything
    /// but active.
    pub fn redeem(&self, now: DateTime<Utc>) -> CoreResult<Coupon> {
        let status = self.status(now);
        if status != PromoStatus::Active {
            return Err(CoreError::CouponNotActive {
                code: self.code.clone(),
                status,
            });
        }

        Ok(Coupon {
            used_count: self.used_count + 1,
            ..self.clone()
        })
    }
}

// =============================================================================
// Offer Behavior
// =============================================================================

impl Offer {
    /// Derives the offer's status at `now`. Offers have no redemption cap,
    /// so this is the window status alone.
    pub fn status(&self, now: DateTime<Utc>) -> PromoStatus {
        window_status(self.valid_from, self.valid_to, now)
    }

    /// The promoted price for the offer's product, given its original
    /// price. Shown in the offers table's "price after discount" column.
    pub fn discounted_price(&self, original: Money) -> Money {
        original.apply_discount(self.discount)
    }
}

// =============================================================================
// Code Generation
// =============================================================================

/// Coupon code alphabet: uppercase letters and digits, with the easily
/// confused glyphs 0/O and 1/I excluded.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Draws `length` characters uniformly at random from [`CODE_ALPHABET`].
///
/// Coupon codes are not a security boundary; a thread-local PRNG is
/// deliberately sufficient here.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Percent;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn coupon(max_uses: u32, used_count: u32) -> Coupon {
        Coupon {
            code: "SUMMER25".to_string(),
            discount: Percent::new(dec!(15)).unwrap(),
            valid_from: ts(2023, 7, 1),
            valid_to: ts(2023, 7, 31),
            max_uses,
            used_count,
        }
    }

    #[test]
    fn test_window_status() {
        let c = coupon(100, 0);
        assert_eq!(c.status(ts(2023, 6, 15)), PromoStatus::Upcoming);
        assert_eq!(c.status(ts(2023, 7, 15)), PromoStatus::Active);
        assert_eq!(c.status(ts(2023, 8, 15)), PromoStatus::Expired);
        // Inclusive on both bounds
        assert_eq!(c.status(c.valid_from), PromoStatus::Active);
        assert_eq!(c.status(c.valid_to), PromoStatus::Active);
    }

    #[test]
    fn test_status_is_idempotent_for_fixed_now() {
        let c = coupon(100, 42);
        let now = ts(2023, 7, 10);
        let first = c.status(now);
        for _ in 0..10 {
            assert_eq!(c.status(now), first);
        }
    }

    #[test]
    fn test_capacity_exhaustion_expires_early() {
        // Strictly inside the window, but out of capacity
        let c = coupon(100, 100);
        assert_eq!(c.status(ts(2023, 7, 15)), PromoStatus::Expired);

        // Capacity does not affect an upcoming coupon
        let c = coupon(100, 100);
        assert_eq!(c.status(ts(2023, 6, 1)), PromoStatus::Upcoming);
    }

    #[test]
    fn test_remaining_uses_floors_at_zero() {
        assert_eq!(coupon(100, 42).remaining_uses(), 58);
        assert_eq!(coupon(100, 100).remaining_uses(), 0);
        // used_count > max_uses should never happen, but never go negative
        assert_eq!(coupon(100, 150).remaining_uses(), 0);
    }

    #[test]
    fn test_redeem_single_use_coupon() {
        let now = ts(2023, 7, 15);
        let c = coupon(1, 0);

        let redeemed = c.redeem(now).unwrap();
        assert_eq!(redeemed.used_count, 1);
        // Immutable update: the original is untouched
        assert_eq!(c.used_count, 0);

        let err = redeemed.redeem(now).unwrap_err();
        assert!(matches!(
            err,
            CoreError::CouponNotActive {
                status: PromoStatus::Expired,
                ..
            }
        ));
    }

    #[test]
    fn test_redeem_outside_window_rejected() {
        let c = coupon(100, 0);
        assert!(c.redeem(ts(2023, 6, 1)).is_err());
        assert!(c.redeem(ts(2023, 9, 1)).is_err());
    }

    #[test]
    fn test_offer_status_and_discounted_price() {
        let offer = Offer {
            id: "o1".to_string(),
            title: "Summer sale".to_string(),
            product_id: "p1".to_string(),
            discount: Percent::new(dec!(20)).unwrap(),
            valid_from: ts(2023, 6, 1),
            valid_to: ts(2023, 6, 4),
        };

        assert_eq!(offer.status(ts(2023, 6, 2)), PromoStatus::Active);
        assert_eq!(offer.status(ts(2023, 6, 10)), PromoStatus::Expired);
        assert_eq!(
            offer.discounted_price(Money::from_major(25)).amount(),
            dec!(20)
        );
    }

    #[test]
    fn test_generate_code_alphabet_and_length() {
        for len in [0, 1, 8, 32] {
            let code = generate_code(len);
            assert_eq!(code.len(), len);
            assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
        }

        // Confusable glyphs never appear
        let code = generate_code(512);
        for banned in ['0', 'O', '1', 'I'] {
            assert!(!code.contains(banned), "{} in generated code", banned);
        }
    }
}
