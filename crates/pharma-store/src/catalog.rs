//! # Catalog Store
//!
//! In-memory catalog of products, companies, and categories.
//!
//! ## Key Operations
//! - Lookup by id
//! - Combined company/category/name filtering (the order screen's sidebar)
//! - Best-offers ranking by resolved discount (the "top offers" rail)
//!
//! Catalog records are seeded once and read-only afterwards; editing them
//! is a dashboard concern that would go through a different surface.

use tracing::debug;

use pharma_core::{resolve, Category, Company, Percent, Product};

use crate::error::{StoreError, StoreResult};

/// In-memory catalog the dashboard injects into pricing and ordering flows.
///
/// ## Usage
/// ```rust
/// let catalog = pharma_store::seed::demo_catalog();
///
/// // Sidebar filters combined in one query
/// let hits = catalog.filter_products(Some("comp-united"), None, "ibu");
/// assert_eq!(hits.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    companies: Vec<Company>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    // -------------------------------------------------------------------------
    // Seeding
    // -------------------------------------------------------------------------

    /// Adds a product. Rejects duplicate ids.
    pub fn insert_product(&mut self, product: Product) -> StoreResult<()> {
        if self.products.iter().any(|p| p.id == product.id) {
            return Err(StoreError::Duplicate {
                entity: "product",
                id: product.id,
            });
        }

        debug!(id = %product.id, name = %product.name, "Inserting product");
        self.products.push(product);
        Ok(())
    }

    /// Adds a company. Rejects duplicate ids.
    pub fn insert_company(&mut self, company: Company) -> StoreResult<()> {
        if self.companies.iter().any(|c| c.id == company.id) {
            return Err(StoreError::Duplicate {
                entity: "company",
                id: company.id,
            });
        }

        debug!(id = %company.id, name = %company.name, "Inserting company");
        self.companies.push(company);
        Ok(())
    }

    /// Adds a category. Rejects duplicate ids.
    pub fn insert_category(&mut self, category: Category) -> StoreResult<()> {
        if self.categories.iter().any(|c| c.id == category.id) {
            return Err(StoreError::Duplicate {
                entity: "category",
                id: category.id,
            });
        }

        self.categories.push(category);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Gets a product by id.
    pub fn product(&self, id: &str) -> StoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "product",
                id: id.to_string(),
            })
    }

    /// Gets a company by id.
    pub fn company(&self, id: &str) -> StoreResult<&Company> {
        self.companies
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "company",
                id: id.to_string(),
            })
    }

    /// Gets a category by id.
    pub fn category(&self, id: &str) -> StoreResult<&Category> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "category",
                id: id.to_string(),
            })
    }

    /// All products, in seed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All companies, in seed order.
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// All categories, in seed order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Filters products the way the order screen's sidebar does: optional
    /// company, optional category, case-insensitive name substring. Empty
    /// query matches everything.
    pub fn filter_products(
        &self,
        company_id: Option<&str>,
        category_id: Option<&str>,
        query: &str,
    ) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| company_id.map_or(true, |c| p.company_id == c))
            .filter(|p| category_id.map_or(true, |c| p.category_id == c))
            .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Discounted products ranked by resolved percentage, highest first,
    /// optionally narrowed to one company. Products without any discount
    /// are excluded.
    ///
    /// Custom-tier products resolve against their owning company, so a
    /// company-supplied override ranks correctly.
    pub fn best_offers(&self, company_id: Option<&str>) -> Vec<(&Product, Percent)> {
        let mut ranked: Vec<(&Product, Percent)> = self
            .products
            .iter()
            .filter(|p| company_id.map_or(true, |c| p.company_id == c))
            .map(|p| {
                let company = self.company(&p.company_id).ok();
                (p, resolve(p, company))
            })
            .filter(|(_, pct)| !pct.is_zero())
            .collect();

        ranked.sort_by(|a, b| b.1.value().cmp(&a.1.value()));
        ranked
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
