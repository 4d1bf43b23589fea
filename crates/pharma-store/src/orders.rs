//! # Order Store
//!
//! Holds submitted orders and applies status transitions.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OrderDraft.submit() ──► OrderStore.insert()                           │
//! │                                │                                        │
//! │  Review screen ──► transition(id, approved | rejected)                 │
//! │  Bulk action   ──► transition_all(delivered, pending)                  │
//! │  Dashboard     ──► list_by_status / status_counts                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store owns no transition rules of its own: single and bulk updates
//! both go through the core's transition table, so an invalid edge is
//! rejected identically everywhere.

use std::collections::HashMap;

use tracing::debug;

use pharma_core::{transition_all, Order, OrderStatus};

use crate::error::{StoreError, StoreResult};

/// In-memory store of submitted orders.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        OrderStore::default()
    }

    /// Inserts a submitted order. Rejects duplicate ids.
    pub fn insert(&mut self, order: Order) -> StoreResult<()> {
        if self.orders.iter().any(|o| o.id == order.id) {
            return Err(StoreError::Duplicate {
                entity: "order",
                id: order.id,
            });
        }

        debug!(id = %order.id, company = %order.company_name, total = %order.total, "Inserting order");
        self.orders.push(order);
        Ok(())
    }

    /// Gets an order by id.
    pub fn get(&self, id: &str) -> StoreResult<&Order> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "order",
                id: id.to_string(),
            })
    }

    /// All orders, newest first (the sent-orders screen's display order).
    pub fn list(&self) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self.orders.iter().collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// Orders currently in `status`, newest first.
    pub fn list_by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.list()
            .into_iter()
            .filter(|o| o.status == status)
            .collect()
    }

    /// Per-status counts for the dashboard cards.
    pub fn status_counts(&self) -> HashMap<OrderStatus, usize> {
        let mut counts = HashMap::new();
        for order in &self.orders {
            *counts.entry(order.status).or_insert(0) += 1;
        }
        counts
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Checks whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Moves one order along the transition table.
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] for an unknown id
    /// - [`pharma_core::CoreError::InvalidTransition`] for a bad edge
    ///   (wrapped in [`StoreError::Core`]); the order is untouched
    pub fn transition(&mut self, id: &str, to: OrderStatus) -> StoreResult<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "order",
                id: id.to_string(),
            })?;

        let from = order.status;
        order.transition(to)?;
        debug!(id = %id, ?from, ?to, "Order status changed");
        Ok(())
    }

    /// Applies `from → to` to every stored order currently in `from`.
    /// Atomic: an invalid pair fails before any order is touched.
    /// Returns how many orders moved.
    pub fn transition_all(
        &mut self,
        from: OrderStatus,
        to: OrderStatus,
    ) -> StoreResult<usize> {
        let moved = transition_all(&mut self.orders, from, to)?;
        debug!(?from, ?to, moved, "Bulk order transition");
        Ok(moved)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
