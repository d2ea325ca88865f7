//! # Sales Demo
//!
//! Runs the sales screen against an in-memory backend: loads the catalog,
//! records one partially paid sale and logs the resulting table.
//!
//! ```text
//! RUST_LOG=debug cargo run -p inventory-sales --bin sales-demo
//! ```

use std::sync::Arc;

use inventory_core::{Money, Product};
use inventory_sales::{
    init_tracing, DashboardSignal, MemoryBackend, SalesConfig, SalesView, SubmitError,
};
use tracing::{info, warn};

fn seed_catalog() -> Vec<Product> {
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

#[tokio::main]
async fn main() -> Result<(), SubmitError> {
    init_tracing();

    let config = SalesConfig::from_env();
    let dashboard = Arc::new(DashboardSignal::new(config.dashboard_capacity));
    let mut reloads = dashboard.subscribe();

    let backend = MemoryBackend::with_products(seed_catalog());
    let view = SalesView::new(Arc::new(backend), config).with_dashboard(dashboard.clone());
    view.load().await;

    for option in view.product_options() {
        info!(disabled = option.disabled, "{}", option.label);
    }

    view.open_form();
    view.set_customer_name("Ayesha");
    view.set_phone_number("0300-1234567");
    if let Err(e) = view.select_product(Some(1)) {
        warn!(error = %e, "Product not selectable");
    }
    view.set_quantity_input("2");
    view.set_discount_input("10");
    view.set_amount_paid("150");
    info!(amount_left = %view.amount_left_display(), "Form filled");

    view.submit().await?;

    if let Some(notice) = view.take_notice() {
        info!(error = notice.is_error(), "{}", notice.message());
    }
    if let Ok(event) = reloads.try_recv() {
        info!(requested_at = %event.requested_at, "Dashboard reload requested");
    }

    for row in view.rows() {
        info!(
            date = %row.date,
            customer = %row.customer,
            phone = row.phone.as_deref().unwrap_or("-"),
            total = %row.total,
            discount = row.discount_detail.as_deref().unwrap_or("-"),
            status = row.badge(),
            "Sale"
        );
    }

    Ok(())
}
