//! # Sales View
//!
//! The sales screen: history table, product catalog and the "New Sale"
//! modal.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Sales View Operations                                │
//! │                                                                         │
//! │  Template Action          SalesView               Backend / Dashboard   │
//! │  ───────────────          ─────────               ───────────────────   │
//! │                                                                         │
//! │  Mount ──────────────────► load() ──────────────► get-sales ┐ joined    │
//! │                                                   get-products ┘        │
//! │                                                                         │
//! │  Type in the form ───────► set_*() ─────────────► (recompute only)      │
//! │                                                                         │
//! │  Complete Sale ──────────► submit()                                     │
//! │                             ├── validate (no backend call on failure)   │
//! │                             ├── create-sale                             │
//! │                             └── success: reset, load(), reload_dashboard│
//! │                                                                         │
//! │  NOTE: the state lock is never held across a backend call.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::Utc;
use inventory_core::validation::{validate_sale_form, ValidationResult};
use inventory_core::{Product, Sale, SaleQuote};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::backend::SalesBackend;
use crate::config::SalesConfig;
use crate::dashboard::{DashboardListener, NoOpListener};
use crate::error::{Notice, SubmitError};
use crate::form::SaleForm;
use crate::render::{product_options, ProductOption, SaleRow};

/// Confirmation shown after a successful sale.
pub const SALE_COMPLETED: &str = "Sale completed successfully";

/// Everything the sales screen displays.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesState {
    pub sales: Vec<Sale>,
    pub products: Vec<Product>,
    pub form: SaleForm,
    /// Pending alert for the user.
    pub notice: Option<Notice>,
}

/// The sales screen view model.
///
/// Cloning yields another handle to the same screen.
#[derive(Clone)]
pub struct SalesView {
    backend: Arc<dyn SalesBackend>,
    dashboard: Arc<dyn DashboardListener>,
    config: SalesConfig,
    state: Arc<Mutex<SalesState>>,
}

impl SalesView {
    /// Creates an empty view; call [`load`](Self::load) to populate it.
    pub fn new(backend: Arc<dyn SalesBackend>, config: SalesConfig) -> Self {
        SalesView {
            backend,
            dashboard: Arc::new(NoOpListener),
            config,
            state: Arc::new(Mutex::new(SalesState::default())),
        }
    }

    /// Sets who gets told to reload after a sale.
    pub fn with_dashboard(mut self, dashboard: Arc<dyn DashboardListener>) -> Self {
        self.dashboard = dashboard;
        self
    }

    pub fn config(&self) -> &SalesConfig {
        &self.config
    }

    /// Executes a function with read access to the state.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SalesState) -> R,
    {
        let state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&state)
    }

    /// Executes a function with write access to the state.
    fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SalesState) -> R,
    {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut state)
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Loads sales history and catalog concurrently.
    ///
    /// A failed request is logged and leaves its list as it was.
    pub async fn load(&self) {
        tokio::join!(self.reload_sales(), self.reload_products());
    }

    pub async fn reload_sales(&self) {
        match self.backend.get_sales().await {
            Ok(sales) => {
                debug!(count = sales.len(), "Sales loaded");
                self.with_state_mut(|s| s.sales = sales);
            }
            Err(e) => error!(error = %e, "Error loading sales"),
        }
    }

    pub async fn reload_products(&self) {
        match self.backend.get_products().await {
            Ok(products) => {
                debug!(count = products.len(), "Products loaded");
                self.with_state_mut(|s| s.products = products);
            }
            Err(e) => error!(error = %e, "Error loading products"),
        }
    }

    // =========================================================================
    // Form
    // =========================================================================

    pub fn open_form(&self) {
        self.with_state_mut(|s| s.form.open = true);
    }

    /// Hides the modal; entered values stay.
    pub fn close_form(&self) {
        self.with_state_mut(|s| s.form.open = false);
    }

    pub fn set_customer_name(&self, name: &str) {
        self.with_state_mut(|s| s.form.set_customer_name(name));
    }

    pub fn set_phone_number(&self, phone: &str) {
        self.with_state_mut(|s| s.form.set_phone_number(phone));
    }

    /// Picker change; `None` is the placeholder.
    pub fn select_product(&self, product_id: Option<i64>) -> ValidationResult<()> {
        self.with_state_mut(|s| s.form.select_product(&s.products, product_id))
    }

    pub fn set_quantity_input(&self, text: &str) {
        self.with_state_mut(|s| s.form.set_quantity_input(text));
    }

    pub fn set_discount_input(&self, text: &str) {
        self.with_state_mut(|s| s.form.set_discount_input(text));
    }

    pub fn set_amount_paid(&self, text: &str) {
        self.with_state_mut(|s| s.form.set_amount_paid(text));
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Records the sale in the form.
    ///
    /// ## Outcomes
    /// - Validation failure: notice set, nothing else changes, backend untouched
    /// - Backend rejection or transport failure: notice set, form kept
    /// - Success: notice set, form reset and closed, lists reloaded,
    ///   dashboard told to reload
    ///
    /// Overlapping calls are not coalesced: each one that passes validation
    /// sends its own `create-sale`.
    pub async fn submit(&self) -> Result<(), SubmitError> {
        let sale = match self.with_state_mut(prepare_sale) {
            Ok(sale) => sale,
            Err(err) => {
                debug!(error = %err, "Sale form rejected");
                return Err(err);
            }
        };

        debug!(customer = %sale.customer_name, total = %sale.total, "create_sale");

        let outcome = match self.backend.create_sale(&sale).await {
            Ok(result) if result.success => Ok(()),
            Ok(result) => Err(SubmitError::Rejected {
                reason: result.error.unwrap_or_else(|| "Unknown error".to_string()),
            }),
            Err(e) => Err(SubmitError::Backend(e)),
        };

        match outcome {
            Ok(()) => {
                info!(customer = %sale.customer_name, total = %sale.total, amount_left = %sale.amount_left, "Sale completed");
                self.with_state_mut(|s| {
                    s.notice = Some(Notice::Info(SALE_COMPLETED.to_string()));
                    s.form.reset();
                });
                self.load().await;
                self.dashboard.reload_dashboard();
                Ok(())
            }
            Err(err) => {
                match &err {
                    SubmitError::Rejected { reason } => warn!(%reason, "Sale rejected by backend"),
                    other => error!(error = %other, "Error completing sale"),
                }
                self.with_state_mut(|s| s.notice = Some(Notice::from(&err)));
                Err(err)
            }
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// History rows in backend order.
    pub fn rows(&self) -> Vec<SaleRow> {
        self.with_state(|s| {
            s.sales
                .iter()
                .map(|sale| SaleRow::from_sale(sale, &self.config))
                .collect()
        })
    }

    pub fn product_options(&self) -> Vec<ProductOption> {
        self.with_state(|s| product_options(&s.products, &self.config))
    }

    pub fn form(&self) -> SaleForm {
        self.with_state(|s| s.form.clone())
    }

    pub fn quote(&self) -> Option<SaleQuote> {
        self.with_state(|s| s.form.quote())
    }

    /// The read-only Amount Left field ("30.00").
    pub fn amount_left_display(&self) -> String {
        self.with_state(|s| s.form.amount_left.to_string())
    }

    pub fn can_submit(&self) -> bool {
        self.with_state(|s| s.form.can_submit())
    }

    pub fn sales(&self) -> Vec<Sale> {
        self.with_state(|s| s.sales.clone())
    }

    pub fn products(&self) -> Vec<Product> {
        self.with_state(|s| s.products.clone())
    }

    pub fn notice(&self) -> Option<Notice> {
        self.with_state(|s| s.notice.clone())
    }

    /// Returns and clears the pending notice (the alert was dismissed).
    pub fn take_notice(&self) -> Option<Notice> {
        self.with_state_mut(|s| s.notice.take())
    }
}

/// Validates the form and builds the record; sets the notice on failure.
///
/// Stock is checked against the latest catalog entry for the selected
/// product, falling back to the snapshot taken at selection time. Pricing
/// always uses the snapshot, so the record matches the Amount Left shown.
fn prepare_sale(state: &mut SalesState) -> Result<Sale, SubmitError> {
    let form = &state.form;
    let current = form
        .selected_product
        .as_ref()
        .map(|selected| {
            state
                .products
                .iter()
                .find(|p| p.id == selected.id)
                .unwrap_or(selected)
        });

    let checked = validate_sale_form(&form.customer_name, current, form.quantity)
        .map(|current| {
            let priced = form.selected_product.as_ref().unwrap_or(current);
            SaleQuote::for_product(priced, form.quantity, form.discount, form.paid()).to_sale(
                priced.id,
                form.customer_name.trim(),
                Some(form.phone_number.as_str()),
                Utc::now(),
            )
        })
        .map_err(SubmitError::from);

    if let Err(err) = &checked {
        state.notice = Some(Notice::from(err));
    }
    checked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::dashboard::DashboardSignal;
    use crate::error::BackendError;
    use inventory_core::{CoreError, Money, PaymentStatus};

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                name: "Rice 5kg".to_string(),
                price: Money::from_cents(10_000),
                stock: 3,
            },
            Product {
                id: 2,
                name: "Cooking Oil 1L".to_string(),
                price: Money::from_cents(5_000),
                stock: 10,
            },
            Product {
                id: 3,
                name: "Tea 200g".to_string(),
                price: Money::from_cents(1_250),
                stock: 0,
            },
        ]
    }

    async fn mounted() -> (SalesView, MemoryBackend) {
        let backend = MemoryBackend::with_products(catalog());
        let view = SalesView::new(Arc::new(backend.clone()), SalesConfig::default());
        view.load().await;
        (view, backend)
    }

    fn fill(view: &SalesView, product: i64, qty: &str, discount: &str, paid: &str) {
        view.open_form();
        view.set_customer_name("Ayesha");
        view.set_phone_number("0300-1234567");
        view.select_product(Some(product)).unwrap();
        view.set_quantity_input(qty);
        view.set_discount_input(discount);
        view.set_amount_paid(paid);
    }

    #[tokio::test]
    async fn test_load_populates_lists() {
        let (view, _) = mounted().await;
        assert_eq!(view.products().len(), 3);
        assert!(view.sales().is_empty());
        assert_eq!(view.product_options().len(), 4);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_lists_empty() {
        let backend = MemoryBackend::with_products(catalog());
        backend.set_fail_sales_load(true);
        backend.set_fail_products_load(true);
        let view = SalesView::new(Arc::new(backend), SalesConfig::default());

        view.load().await;

        assert!(view.products().is_empty());
        assert!(view.sales().is_empty());
        assert_eq!(view.notice(), None);
    }

    #[tokio::test]
    async fn test_failed_load_only_affects_its_own_list() {
        let backend = MemoryBackend::with_products(catalog());
        let earlier = SaleQuote::compute(Money::from_cents(5_000), 1, Default::default(), Money::zero())
            .to_sale(2, "Walk-in", None, Utc::now());
        assert!(backend.create_sale(&earlier).await.unwrap().success);

        backend.set_fail_products_load(true);
        let view = SalesView::new(Arc::new(backend.clone()), SalesConfig::default());
        view.load().await;
        assert_eq!(view.sales().len(), 1);
        assert!(view.products().is_empty());

        backend.set_fail_products_load(false);
        backend.set_fail_sales_load(true);
        let view = SalesView::new(Arc::new(backend), SalesConfig::default());
        view.load().await;
        assert!(view.sales().is_empty());
        assert_eq!(view.products().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_list() {
        let (view, backend) = mounted().await;
        backend.set_fail_products_load(true);

        view.reload_products().await;

        assert_eq!(view.products().len(), 3);
    }

    #[tokio::test]
    async fn test_sale_priced_as_shown_after_catalog_reload() {
        let (view, backend) = mounted().await;
        fill(&view, 1, "2", "0", "150");
        assert_eq!(view.amount_left_display(), "50.00");

        // price changes in the backend and the catalog reloads mid-form
        backend.update_product(Product {
            id: 1,
            name: "Rice 5kg".to_string(),
            price: Money::from_cents(12_000),
            stock: 3,
        });
        view.reload_products().await;
        assert_eq!(view.products()[0].price.cents(), 12_000);

        view.submit().await.unwrap();

        let sale = &backend.sales()[0];
        assert_eq!(sale.items[0].price.cents(), 10_000);
        assert_eq!(sale.total.cents(), 20_000);
        assert_eq!(sale.amount_left.cents(), 5_000);
    }

    #[tokio::test]
    async fn test_stock_checked_against_reloaded_catalog() {
        let (view, backend) = mounted().await;
        fill(&view, 1, "3", "0", "");

        backend.update_product(Product {
            id: 1,
            name: "Rice 5kg".to_string(),
            price: Money::from_cents(10_000),
            stock: 2,
        });
        view.reload_products().await;

        let err = view.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::Validation(CoreError::InsufficientStock { available: 2, .. })));
        assert_eq!(backend.create_sale_calls(), 0);
    }

    #[tokio::test]
    async fn test_long_quantity_input_is_blocked() {
        let (view, backend) = mounted().await;
        fill(&view, 1, "1000000000000000", "0", "");

        let err = view.submit().await.unwrap_err();

        assert_eq!(err.user_message(), "Quantity exceeds available stock");
        assert_eq!(backend.create_sale_calls(), 0);
    }

    #[tokio::test]
    async fn test_partial_sale_scenario() {
        let (view, backend) = mounted().await;
        let dashboard = Arc::new(DashboardSignal::new(4));
        let mut reloads = dashboard.subscribe();
        let view = view.with_dashboard(dashboard.clone());

        fill(&view, 1, "2", "10", "150");
        let quote = view.quote().unwrap();
        assert_eq!(quote.subtotal.cents(), 20_000);
        assert_eq!(quote.discount_amount.cents(), 2_000);
        assert_eq!(quote.total.cents(), 18_000);
        assert_eq!(view.amount_left_display(), "30.00");

        view.submit().await.unwrap();

        assert_eq!(view.notice(), Some(Notice::Info(SALE_COMPLETED.to_string())));
        assert_eq!(view.form(), SaleForm::default());

        let rows = view.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total, "Rs 180.00");
        assert_eq!(rows[0].discount_detail.as_deref(), Some("Discount: 10% (Rs 20.00)"));
        assert_eq!(rows[0].status, PaymentStatus::Partial);

        // stock reloaded after the backend decrement
        assert_eq!(view.products()[0].stock, 1);
        assert_eq!(backend.sales()[0].items[0].quantity, 2);
        assert!(reloads.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_paid_sale_scenario() {
        let (view, _) = mounted().await;
        fill(&view, 2, "1", "0", "50");
        assert_eq!(view.amount_left_display(), "0.00");

        view.submit().await.unwrap();

        let rows = view.rows();
        assert_eq!(rows[0].total, "Rs 50.00");
        assert_eq!(rows[0].discount_detail, None);
        assert_eq!(rows[0].badge(), "Paid");
    }

    #[tokio::test]
    async fn test_over_stock_blocked_without_backend_call() {
        let (view, backend) = mounted().await;
        fill(&view, 1, "5", "0", "");
        let before = view.form();

        let err = view.submit().await.unwrap_err();

        assert!(matches!(err, SubmitError::Validation(CoreError::InsufficientStock { .. })));
        assert_eq!(backend.create_sale_calls(), 0);
        assert_eq!(view.form(), before);
        assert_eq!(
            view.notice(),
            Some(Notice::Error("Quantity exceeds available stock".to_string()))
        );
    }

    #[tokio::test]
    async fn test_missing_fields_blocked_without_backend_call() {
        let (view, backend) = mounted().await;

        view.open_form();
        assert!(view.submit().await.is_err());

        view.set_customer_name("   ");
        view.select_product(Some(1)).unwrap();
        assert!(view.submit().await.is_err());

        view.set_customer_name("Ayesha");
        view.select_product(None).unwrap();
        assert!(view.submit().await.is_err());

        view.select_product(Some(1)).unwrap();
        view.with_state_mut(|s| s.form.set_quantity(0));
        let err = view.submit().await.unwrap_err();

        assert_eq!(err.user_message(), "Please fill all required fields");
        assert_eq!(backend.create_sale_calls(), 0);
        assert!(view.form().open);
    }

    #[tokio::test]
    async fn test_backend_rejection_preserves_form() {
        let (view, backend) = mounted().await;
        fill(&view, 1, "3", "0", "100");

        // stock changes behind the view's back
        let other = SaleQuote::compute(Money::from_cents(10_000), 2, Default::default(), Money::zero())
            .to_sale(1, "Walk-in", None, Utc::now());
        assert!(backend.create_sale(&other).await.unwrap().success);

        let before = view.form();
        let err = view.submit().await.unwrap_err();

        assert_eq!(err.user_message(), "Error completing sale: Insufficient stock for Rice 5kg");
        assert_eq!(view.form(), before);
        assert!(view.notice().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_transport_failure_preserves_form() {
        let (view, backend) = mounted().await;
        let dashboard = Arc::new(DashboardSignal::new(4));
        let mut reloads = dashboard.subscribe();
        let view = view.with_dashboard(dashboard.clone());
        fill(&view, 2, "1", "0", "");
        backend.fail_next_create(BackendError::transport("create-sale", "bridge closed"));

        let before = view.form();
        let err = view.submit().await.unwrap_err();

        assert_eq!(err.user_message(), "Error completing sale");
        assert_eq!(view.form(), before);
        assert!(reloads.try_recv().is_err());

        // retry without re-entering anything
        view.submit().await.unwrap();
        assert_eq!(backend.sales().len(), 1);
    }

    #[tokio::test]
    async fn test_overlapping_submits_both_reach_backend() {
        let (view, backend) = mounted().await;
        fill(&view, 2, "1", "0", "50");

        let (first, second) = tokio::join!(view.submit(), view.submit());

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(backend.create_sale_calls(), 2);
        assert_eq!(backend.sales().len(), 2);
        assert_eq!(backend.products()[1].stock, 8);
    }

    #[tokio::test]
    async fn test_zero_stock_product_not_selectable() {
        let (view, _) = mounted().await;
        assert!(view.select_product(Some(3)).is_err());
        assert!(view.form().selected_product.is_none());
        assert!(view.product_options()[3].disabled);
    }

    #[tokio::test]
    async fn test_close_form_keeps_values_and_notice_dismissal() {
        let (view, _) = mounted().await;
        fill(&view, 1, "2", "0", "");
        view.close_form();

        let form = view.form();
        assert!(!form.open);
        assert_eq!(form.customer_name, "Ayesha");
        assert_eq!(form.quantity, 2);

        view.set_customer_name("");
        assert!(view.submit().await.is_err());
        assert!(view.take_notice().is_some());
        assert_eq!(view.notice(), None);
    }
}
