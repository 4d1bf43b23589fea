//! # Demo Seed Data
//!
//! Builds the demo catalog, coupons, and offers the dashboard ships with.
//! Used by tests and by the dashboard shell while no real backend exists.
//!
//! The records mirror the pharmacy the sample screens were designed
//! around: three supplying companies, three categories, seven products
//! with a mix of flat, tiered, and absent discounts.

use chrono::{DateTime, TimeZone, Utc};

use pharma_core::{
    Category, Company, Coupon, Discount, DiscountTier, Money, Offer, Percent, Product,
};

use crate::catalog::Catalog;
use crate::promos::PromoStore;

/// Start of day, UTC.
fn day_start(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

/// End of day, UTC. Windows are inclusive of their last day.
fn day_end(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 23, 59, 59).unwrap()
}

fn flat(percent: u32) -> Discount {
    Discount::Flat(Percent::from_whole(percent).expect("seed discount within range"))
}

fn pct(percent: u32) -> Percent {
    Percent::from_whole(percent).expect("seed discount within range")
}

/// Builds the demo catalog: 3 companies, 3 categories, 7 products.
pub fn demo_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    let companies = [
        Company {
            id: "comp-united".to_string(),
            name: "United Pharma Co.".to_string(),
            discount_tier: Some(DiscountTier::Thirty),
            custom_discount: None,
        },
        Company {
            id: "comp-pharma-ind".to_string(),
            name: "Pharma Industries".to_string(),
            discount_tier: Some(DiscountTier::Fifty),
            custom_discount: Some(pct(45)),
        },
        Company {
            id: "comp-integrated".to_string(),
            name: "Integrated Healthcare".to_string(),
            discount_tier: Some(DiscountTier::Twenty),
            custom_discount: None,
        },
    ];

    let categories = [
        ("cat-analgesics", "Analgesics"),
        ("cat-vitamins", "Vitamins"),
        ("cat-antibiotics", "Antibiotics"),
    ];

    // (id, name, unit, price, discount, company, category)
    let products = [
        (
            "prod-paracetamol-500",
            "Paracetamol 500mg",
            "strip",
            25,
            flat(5),
            "comp-united",
            "cat-analgesics",
        ),
        (
            "prod-ibuprofen-400",
            "Ibuprofen 400mg",
            "strip",
            35,
            Discount::Tier(DiscountTier::Twenty),
            "comp-united",
            "cat-analgesics",
        ),
        (
            "prod-amoxicillin-500",
            "Amoxicillin 500mg",
            "strip",
            50,
            Discount::None,
            "comp-united",
            "cat-antibiotics",
        ),
        (
            "prod-vitamin-c-1000",
            "Vitamin C 1000mg",
            "box",
            40,
            flat(10),
            "comp-pharma-ind",
            "cat-vitamins",
        ),
        (
            "prod-zinc-caps",
            "Zinc Capsules",
            "box",
            55,
            Discount::Tier(DiscountTier::Forty),
            "comp-pharma-ind",
            "cat-vitamins",
        ),
        (
            "prod-cough-syrup",
            "Children's Cough Syrup",
            "bottle",
            30,
            Discount::None,
            "comp-integrated",
            "cat-antibiotics",
        ),
        (
            "prod-betadine",
            "Betadine Antiseptic",
            "bottle",
            20,
            Discount::Tier(DiscountTier::Ten),
            "comp-integrated",
            "cat-antibiotics",
        ),
    ];

    for company in companies {
        catalog
            .insert_company(company)
            .expect("seed company ids unique");
    }
    for (id, name) in categories {
        catalog
            .insert_category(Category {
                id: id.to_string(),
                name: name.to_string(),
            })
            .expect("seed category ids unique");
    }
    for (id, name, unit, price, discount, company_id, category_id) in products {
        catalog
            .insert_product(Product {
                id: id.to_string(),
                name: name.to_string(),
                unit: unit.to_string(),
                price: Money::from_major(price),
                discount,
                company_id: company_id.to_string(),
                category_id: category_id.to_string(),
            })
            .expect("seed product ids unique");
    }

    catalog
}

/// Builds the demo promo store: 3 coupons, 3 offers.
pub fn demo_promos() -> PromoStore {
    let mut store = PromoStore::new();

    let coupons = [
        Coupon {
            code: "SUMMER25".to_string(),
            discount: pct(20),
            valid_from: day_start(2023, 6, 1),
            valid_to: day_end(2023, 6, 30),
            max_uses: 100,
            used_count: 42,
        },
        Coupon {
            code: "WELCOME15".to_string(),
            discount: pct(15),
            valid_from: day_start(2023, 7, 1),
            valid_to: day_end(2023, 7, 31),
            max_uses: 200,
            used_count: 87,
        },
        Coupon {
            code: "FALL10".to_string(),
            discount: pct(10),
            valid_from: day_start(2023, 8, 15),
            valid_to: day_end(2023, 9, 15),
            max_uses: 150,
            used_count: 0,
        },
    ];

    let offers = [
        Offer {
            id: "offer-summer-sale".to_string(),
            title: "Summer Sale".to_string(),
            product_id: "prod-paracetamol-500".to_string(),
            discount: pct(20),
            valid_from: day_start(2023, 6, 1),
            valid_to: day_end(2023, 6, 4),
        },
        Offer {
            id: "offer-summer-discounts".to_string(),
            title: "Summer Discounts".to_string(),
            product_id: "prod-ibuprofen-400".to_string(),
            discount: pct(15),
            valid_from: day_start(2023, 7, 15),
            valid_to: day_end(2023, 7, 18),
        },
        Offer {
            id: "offer-back-to-school".to_string(),
            title: "Back to School".to_string(),
            product_id: "prod-amoxicillin-500".to_string(),
            discount: pct(10),
            valid_from: day_start(2023, 8, 20),
            valid_to: day_end(2023, 8, 23),
        },
    ];

    for coupon in coupons {
        store.insert_coupon(coupon).expect("seed coupon codes unique");
    }
    for offer in offers {
        store.insert_offer(offer).expect("seed offer ids unique");
    }

    store
}

// =============================================================================
// Unit Tests
// =============================================================================
