//! # Memory Backend
//!
//! An in-process `SalesBackend` holding products and sales in memory.
//! Used by the view tests and the `sales-demo` binary.
//!
//! ## create-sale Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create_sale(sale)                                                      │
//! │       │                                                                 │
//! │       ├── item product unknown?   → { success: false, "Product ..." }   │
//! │       ├── item quantity > stock?  → { success: false, "Insufficient" }  │
//! │       │                                                                 │
//! │       └── OK → stock -= quantity, assign id, append to history          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use inventory_core::{Product, Sale};
use tracing::{debug, info};

use super::{CreateSaleResult, SalesBackend};
use crate::error::{BackendError, BackendResult};

#[derive(Debug, Default)]
struct Store {
    products: Vec<Product>,
    sales: Vec<Sale>,
    next_sale_id: i64,
    create_calls: usize,
    fail_sales_load: bool,
    fail_products_load: bool,
    next_create_failure: Option<BackendError>,
}

/// In-memory catalog and sales history.
///
/// Cloning shares the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    store: Arc<Mutex<Store>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend with the given catalog.
    pub fn with_products(products: Vec<Product>) -> Self {
        let backend = Self::new();
        backend.store().products = products;
        backend
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        // A poisoned store only happens after a panic in a test; keep going.
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current catalog snapshot.
    pub fn products(&self) -> Vec<Product> {
        self.store().products.clone()
    }

    /// Current history snapshot.
    pub fn sales(&self) -> Vec<Sale> {
        self.store().sales.clone()
    }

    /// Number of `create-sale` calls received, successful or not.
    pub fn create_sale_calls(&self) -> usize {
        self.store().create_calls
    }

    /// Makes `get-sales` fail until switched off.
    pub fn set_fail_sales_load(&self, fail: bool) {
        self.store().fail_sales_load = fail;
    }

    /// Makes `get-products` fail until switched off.
    pub fn set_fail_products_load(&self, fail: bool) {
        self.store().fail_products_load = fail;
    }

    /// Replaces the catalog entry with the same id, or appends it.
    pub fn update_product(&self, product: Product) {
        let mut store = self.store();
        match store.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => store.products.push(product),
        }
    }

    /// Makes the next `create-sale` fail with a transport error.
    pub fn fail_next_create(&self, error: BackendError) {
        self.store().next_create_failure = Some(error);
    }
}

#[async_trait]
impl SalesBackend for MemoryBackend {
    async fn get_sales(&self) -> BackendResult<Vec<Sale>> {
        let store = self.store();
        if store.fail_sales_load {
            return Err(BackendError::transport("get-sales", "backend unavailable"));
        }
        Ok(store.sales.clone())
    }

    async fn get_products(&self) -> BackendResult<Vec<Product>> {
        let store = self.store();
        if store.fail_products_load {
            return Err(BackendError::transport("get-products", "backend unavailable"));
        }
        Ok(store.products.clone())
    }

    async fn create_sale(&self, sale: &Sale) -> BackendResult<CreateSaleResult> {
        // Behave like a real IPC hop: let other tasks run before answering.
        tokio::task::yield_now().await;

        let mut store = self.store();
        store.create_calls += 1;

        if let Some(error) = store.next_create_failure.take() {
            return Err(error);
        }

        for item in &sale.items {
            match store.products.iter().find(|p| p.id == item.product_id) {
                None => {
                    return Ok(CreateSaleResult::rejected(format!(
                        "Product {} not found",
                        item.product_id
                    )))
                }
                Some(product) if !product.can_sell(item.quantity) => {
                    debug!(product_id = product.id, stock = product.stock, requested = item.quantity, "Rejecting sale");
                    return Ok(CreateSaleResult::rejected(format!(
                        "Insufficient stock for {}",
                        product.name
                    )));
                }
                Some(_) => {}
            }
        }

        for item in &sale.items {
            if let Some(product) = store.products.iter_mut().find(|p| p.id == item.product_id) {
                product.stock -= item.quantity;
            }
        }

        store.next_sale_id += 1;
        let id = store.next_sale_id;
        store.sales.push(Sale {
            id: Some(id),
            ..sale.clone()
        });

        info!(sale_id = id, total = %sale.total, items = sale.items.len(), "Sale stored");
        Ok(CreateSaleResult::ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use inventory_core::{DiscountRate, Money, SaleQuote};

    fn catalog() -> Vec<Product> {
        vec![Product {
            id: 1,
            name: "Rice 5kg".to_string(),
            price: Money::from_cents(10_000),
            stock: 3,
        }]
    }

    fn sale_of(product_id: i64, qty: i64) -> Sale {
        SaleQuote::compute(Money::from_cents(10_000), qty, DiscountRate::zero(), Money::zero())
            .to_sale(product_id, "Ayesha", None, Utc::now())
    }

    #[tokio::test]
    async fn test_create_sale_decrements_stock() {
        let backend = MemoryBackend::with_products(catalog());

        let result = backend.create_sale(&sale_of(1, 2)).await.unwrap();
        assert!(result.success);
        assert_eq!(backend.products()[0].stock, 1);

        let sales = backend.get_sales().await.unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].id, Some(1));
    }

    #[tokio::test]
    async fn test_create_sale_rejects_over_stock() {
        let backend = MemoryBackend::with_products(catalog());

        let result = backend.create_sale(&sale_of(1, 4)).await.unwrap();
        assert_eq!(result, CreateSaleResult::rejected("Insufficient stock for Rice 5kg"));
        assert_eq!(backend.products()[0].stock, 3);
        assert!(backend.sales().is_empty());
        assert_eq!(backend.create_sale_calls(), 1);
    }

    #[tokio::test]
    async fn test_update_product_replaces_or_appends() {
        let backend = MemoryBackend::with_products(catalog());
        backend.update_product(Product {
            id: 1,
            name: "Rice 5kg".to_string(),
            price: Money::from_cents(12_000),
            stock: 7,
        });
        backend.update_product(Product {
            id: 2,
            name: "Salt 1kg".to_string(),
            price: Money::from_cents(800),
            stock: 4,
        });

        let products = backend.products();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price.cents(), 12_000);
        assert_eq!(products[0].stock, 7);
    }

    #[tokio::test]
    async fn test_unknown_product_rejected() {
        let backend = MemoryBackend::with_products(catalog());
        let result = backend.create_sale(&sale_of(9, 1)).await.unwrap();
        assert!(!result.success);
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let backend = MemoryBackend::with_products(catalog());
        backend.set_fail_products_load(true);
        assert!(backend.get_products().await.is_err());
        assert!(backend.get_sales().await.is_ok());

        backend.set_fail_products_load(false);
        backend.set_fail_sales_load(true);
        assert!(backend.get_products().await.is_ok());
        assert!(backend.get_sales().await.is_err());

        backend.fail_next_create(BackendError::transport("create-sale", "closed"));
        assert!(backend.create_sale(&sale_of(1, 1)).await.is_err());
        assert!(backend.create_sale(&sale_of(1, 1)).await.unwrap().success);
    }
}
