//! # Order Aggregator
//!
//! Accumulates line items into an in-progress order, computes totals, and
//! governs status transitions after submission.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Lifecycle                                    │
//! │                                                                         │
//! │  OrderDraft (working sequence)                                         │
//! │    add_item / remove_item / total                                      │
//! │       │                                                                 │
//! │       ▼ submit(company, now)                                           │
//! │                                                                         │
//! │  ┌─────────┐     ┌──────────┐     ┌─────────────┐     ┌───────────┐    │
//! │  │ pending ├────►│ approved ├────►│ in_progress ├────►│ delivered │    │
//! │  └────┬────┘     └──────────┘     └─────────────┘     └─────┬─────┘    │
//! │       │                                                     │          │
//! │       │          ┌──────────┐        manual re-open         │          │
//! │       └─────────►│ rejected │      (delivered → pending) ◄──┘          │
//! │                  └──────────┘                                          │
//! │                                                                         │
//! │  Every other edge is rejected with InvalidTransition.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The delivered → pending edge keeps the machine technically cyclic. That
//! is intentional: operators need a way to reverse a mistaken delivery
//! mark, so the override stays in the table rather than living in ad-hoc
//! admin tooling.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::discount::{effective_price, resolve};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Company, Order, OrderItem, OrderStatus, Product};
use crate::validation::validate_quantity;

// =============================================================================
// Order Draft
// =============================================================================

/// The working sequence of line items for an order being assembled.
///
/// ## Invariants
/// - Insertion order is display order; removal shifts positions but never
///   renumbers identities (each item keeps its own uuid).
/// - Duplicates are allowed: adding the same product twice creates two
///   independent entries, mirroring independent cart rows.
/// - Every snapshot is taken through the discount resolver at add time.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    items: Vec<OrderItem>,
    notes: Option<String>,
}

impl OrderDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        OrderDraft::default()
    }

    /// Adds a product to the draft, snapshotting its discounted price and
    /// stamping the item with `now`.
    ///
    /// The company is consulted only when the product's tier is custom
    /// (see the discount resolver).
    ///
    /// ## Errors
    /// - [`CoreError::InvalidQuantity`] when `quantity` is below 1 or above
    ///   the cap
    /// - [`CoreError::InvalidPrice`] when the product price is negative
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: i64,
        company: Option<&Company>,
        now: DateTime<Utc>,
    ) -> CoreResult<&OrderItem> {
        validate_quantity(quantity)?;

        let unit_price = effective_price(product, company)?;
        let discount = resolve(product, company);

        let item = OrderItem {
            id: Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit: product.unit.clone(),
            quantity,
            discount,
            unit_price,
            line_total: unit_price * quantity,
            added_at: now,
        };

        self.items.push(item);
        // Just pushed, so last() is always Some
        Ok(self.items.last().unwrap())
    }

    /// Removes a line item by position and returns it.
    ///
    /// ## Errors
    /// [`CoreError::IndexOutOfRange`] when `index` is past the end; the
    /// sequence is left untouched.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<OrderItem> {
        if index >= self.items.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        Ok(self.items.remove(index))
    }

    /// Current line items, in display order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the draft has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals at full precision. An empty draft totals zero;
    /// that is a value, not an error.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.line_total).sum()
    }

    /// Attaches free-text notes carried onto the submitted order.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = Some(notes.into());
    }

    /// Freezes the draft into a pending [`Order`] and clears the working
    /// sequence.
    ///
    /// ## Errors
    /// - [`CoreError::EmptyOrder`] when there are no line items
    /// - [`CoreError::NoCompanySelected`] when `company` is `None`
    ///
    /// On error the draft is left exactly as it was.
    pub fn submit(
        &mut self,
        company: Option<&Company>,
        now: DateTime<Utc>,
    ) -> CoreResult<Order> {
        if self.items.is_empty() {
            return Err(CoreError::EmptyOrder);
        }
        let company = company.ok_or(CoreError::NoCompanySelected)?;

        let items = std::mem::take(&mut self.items);
        let total = items.iter().map(|i| i.line_total).sum();

        Ok(Order {
            id: Uuid::new_v4().to_string(),
            company_id: company.id.clone(),
            company_name: company.name.clone(),
            items,
            total,
            created_at: now,
            status: OrderStatus::Pending,
            notes: self.notes.take(),
        })
    }
}

// =============================================================================
// Status Transitions
// =============================================================================

impl OrderStatus {
    /// Checks the transition table.
    ///
    /// ```text
    /// pending     → approved | rejected
    /// approved    → in_progress
    /// in_progress → delivered
    /// delivered   → pending        (manual re-open override)
    /// rejected    → (terminal)
    /// ```
    pub const fn can_transition(self, to: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, to),
            (Pending, Approved)
                | (Pending, Rejected)
                | (Approved, InProgress)
                | (InProgress, Delivered)
                | (Delivered, Pending)
        )
    }
}

impl Order {
    /// Moves the order to `to` if the transition table allows it.
    ///
    /// ## Errors
    /// [`CoreError::InvalidTransition`]; the status is left unchanged.
    pub fn transition(&mut self, to: OrderStatus) -> CoreResult<()> {
        if !self.status.can_transition(to) {
            return Err(CoreError::InvalidTransition {
                from: self.status,
                to,
            });
        }

        self.status = to;
        Ok(())
    }
}

/// Applies `from → to` to every order currently in `from`; other orders are
/// untouched. Returns how many orders moved.
///
/// Validity depends only on the `(from, to)` pair, so the pair is checked
/// once up front: an invalid transition fails the whole batch atomically
/// with no partial application.
pub fn transition_all(
    orders: &mut [Order],
    from: OrderStatus,
    to: OrderStatus,
) -> CoreResult<usize> {
    if !from.can_transition(to) {
        return Err(CoreError::InvalidTransition { from, to });
    }

    let mut moved = 0;
    for order in orders.iter_mut().filter(|o| o.status == from) {
        order.status = to;
        moved += 1;
    }

    Ok(moved)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::Discount;
    use crate::money::Percent;
    use rust_decimal_macros::dec;

    fn product(id: &str, price: i64, discount: Discount) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            unit: "box".to_string(),
            price: Money::from_major(price),
            discount,
            company_id: "c1".to_string(),
            category_id: "cat1".to_string(),
        }
    }

    fn company() -> Company {
        Company {
            id: "c1".to_string(),
            name: "United Pharma".to_string(),
            discount_tier: None,
            custom_discount: None,
        }
    }

    fn submitted_order(status: OrderStatus) -> Order {
        let mut draft = OrderDraft::new();
        draft
            .add_item(&product("1", 10, Discount::None), 1, None, Utc::now())
            .unwrap();
        let mut order = draft.submit(Some(&company()), Utc::now()).unwrap();
        order.status = status;
        order
    }

    #[test]
    fn test_add_items_and_total() {
        // (50, 0%, ×2) + (30, 10%, ×1) → 100 + 27 = 127
        let mut draft = OrderDraft::new();
        draft
            .add_item(&product("1", 50, Discount::None), 2, None, Utc::now())
            .unwrap();
        draft
            .add_item(
                &product("2", 30, Discount::Flat(Percent::new(dec!(10)).unwrap())),
                1,
                None,
                Utc::now(),
            )
            .unwrap();

        assert_eq!(draft.item_count(), 2);
        assert_eq!(draft.total().amount(), dec!(127));
    }

    #[test]
    fn test_empty_draft_totals_zero() {
        assert_eq!(OrderDraft::new().total(), Money::zero());
    }

    #[test]
    fn test_invalid_quantity_rejected() {
        let mut draft = OrderDraft::new();
        let p = product("1", 50, Discount::None);

        assert!(matches!(
            draft.add_item(&p, 0, None, Utc::now()),
            Err(CoreError::InvalidQuantity { quantity: 0, .. })
        ));
        assert!(draft.is_empty());
    }

    #[test]
    fn test_duplicates_stay_independent_entries() {
        let mut draft = OrderDraft::new();
        let p = product("1", 50, Discount::None);
        draft.add_item(&p, 2, None, Utc::now()).unwrap();
        draft.add_item(&p, 3, None, Utc::now()).unwrap();

        // No merge-by-product-id: two rows, distinct identities
        assert_eq!(draft.item_count(), 2);
        assert_ne!(draft.items()[0].id, draft.items()[1].id);
        assert_eq!(draft.total().amount(), dec!(250));
    }

    #[test]
    fn test_remove_item_out_of_range_leaves_sequence_unchanged() {
        let mut draft = OrderDraft::new();
        draft
            .add_item(&product("1", 50, Discount::None), 1, None, Utc::now())
            .unwrap();

        let err = draft.remove_item(5).unwrap_err();
        assert!(matches!(
            err,
            CoreError::IndexOutOfRange { index: 5, len: 1 }
        ));
        assert_eq!(draft.item_count(), 1);
    }

    #[test]
    fn test_remove_item_shifts_positions_not_identities() {
        let mut draft = OrderDraft::new();
        draft
            .add_item(&product("1", 10, Discount::None), 1, None, Utc::now())
            .unwrap();
        draft
            .add_item(&product("2", 20, Discount::None), 1, None, Utc::now())
            .unwrap();
        let second_id = draft.items()[1].id.clone();

        let removed = draft.remove_item(0).unwrap();
        assert_eq!(removed.product_id, "1");
        assert_eq!(draft.items()[0].id, second_id);
    }

    #[test]
    fn test_add_item_stamps_added_at_from_caller() {
        let mut draft = OrderDraft::new();
        let p = product("1", 50, Discount::None);

        let first = Utc::now() - chrono::Duration::hours(2);
        let second = Utc::now();
        draft.add_item(&p, 1, None, first).unwrap();
        draft.add_item(&p, 1, None, second).unwrap();

        // Each line item keeps the clock it was added under
        assert_eq!(draft.items()[0].added_at, first);
        assert_eq!(draft.items()[1].added_at, second);
    }

    #[test]
    fn test_snapshot_is_frozen_against_catalog_edits() {
        let mut draft = OrderDraft::new();
        let mut p = product("1", 50, Discount::None);
        draft.add_item(&p, 1, None, Utc::now()).unwrap();

        // Catalog edit after the fact
        p.price = Money::from_major(500);

        assert_eq!(draft.items()[0].unit_price.amount(), dec!(50));
        assert_eq!(draft.total().amount(), dec!(50));
    }

    #[test]
    fn test_submit_freezes_and_clears() {
        let mut draft = OrderDraft::new();
        draft
            .add_item(&product("1", 50, Discount::None), 2, None, Utc::now())
            .unwrap();
        draft.set_notes("urgent restock");

        let now = Utc::now();
        let order = draft.submit(Some(&company()), now).unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.created_at, now);
        assert_eq!(order.total.amount(), dec!(100));
        assert_eq!(order.company_name, "United Pharma");
        assert_eq!(order.notes.as_deref(), Some("urgent restock"));
        assert!(draft.is_empty());
    }

    #[test]
    fn test_submit_requires_items_and_company() {
        let mut draft = OrderDraft::new();
        assert!(matches!(
            draft.submit(Some(&company()), Utc::now()),
            Err(CoreError::EmptyOrder)
        ));

        draft
            .add_item(&product("1", 50, Discount::None), 1, None, Utc::now())
            .unwrap();
        assert!(matches!(
            draft.submit(None, Utc::now()),
            Err(CoreError::NoCompanySelected)
        ));
        // Failed submit leaves the draft intact
        assert_eq!(draft.item_count(), 1);
    }

    #[test]
    fn test_transition_table() {
        use OrderStatus::*;

        assert!(Pending.can_transition(Approved));
        assert!(Pending.can_transition(Rejected));
        assert!(Approved.can_transition(InProgress));
        assert!(InProgress.can_transition(Delivered));
        assert!(Delivered.can_transition(Pending)); // manual re-open

        assert!(!Pending.can_transition(Delivered));
        assert!(!Approved.can_transition(Pending));
        assert!(!Rejected.can_transition(Pending)); // rejected is terminal
        assert!(!Delivered.can_transition(Delivered));
    }

    #[test]
    fn test_single_transition_rejects_bad_edge() {
        let mut order = submitted_order(OrderStatus::Rejected);
        let err = order.transition(OrderStatus::Delivered).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
        assert_eq!(order.status, OrderStatus::Rejected);

        let mut order = submitted_order(OrderStatus::Pending);
        order.transition(OrderStatus::Approved).unwrap();
        assert_eq!(order.status, OrderStatus::Approved);
    }

    #[test]
    fn test_transition_all_reopens_delivered_only() {
        let mut orders = vec![
            submitted_order(OrderStatus::Delivered),
            submitted_order(OrderStatus::Approved),
            submitted_order(OrderStatus::Delivered),
            submitted_order(OrderStatus::Rejected),
        ];

        let moved =
            transition_all(&mut orders, OrderStatus::Delivered, OrderStatus::Pending).unwrap();

        assert_eq!(moved, 2);
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(orders[1].status, OrderStatus::Approved);
        assert_eq!(orders[2].status, OrderStatus::Pending);
        assert_eq!(orders[3].status, OrderStatus::Rejected);
    }

    #[test]
    fn test_transition_all_invalid_pair_touches_nothing() {
        let mut orders = vec![
            submitted_order(OrderStatus::Pending),
            submitted_order(OrderStatus::Pending),
        ];

        let err = transition_all(&mut orders, OrderStatus::Pending, OrderStatus::Delivered)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
        assert!(orders.iter().all(|o| o.status == OrderStatus::Pending));
    }
}
