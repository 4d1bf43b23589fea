//! # Store Error Types
//!
//! Error types for the injected state layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (pharma-core)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds lookup/duplicate failures             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Dashboard displays user-friendly message                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pharma_core::CoreError;
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in the store.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// An insert collided with an existing id or code.
    ///
    /// ## When This Occurs
    /// - Seeding the same record twice
    /// - Creating a coupon with an already-issued code
    #[error("Duplicate {entity}: '{id}' already exists")]
    Duplicate { entity: &'static str, id: String },

    /// A business-rule failure surfaced from the core engine.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::NotFound {
            entity: "product",
            id: "prod-missing".to_string(),
        };
        assert_eq!(err.to_string(), "product not found: prod-missing");

        let err = StoreError::Duplicate {
            entity: "coupon",
            id: "SUMMER25".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate coupon: 'SUMMER25' already exists");
    }

    #[test]
    fn test_core_error_passes_through() {
        let err: StoreError = CoreError::EmptyOrder.into();
        assert_eq!(err.to_string(), "Cannot submit an empty order");
    }
}
