//! # inventory-sales: The Sales Screen
//!
//! View model for the "Sales" screen of the inventory desktop app: the sales
//! history table, the "New Sale" modal and the calls it makes to the
//! backend.
//!
//! ## Module Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          inventory-sales                                │
//! │                                                                         │
//! │  view ───────► SalesView: load, form actions, submit, rows              │
//! │    │                                                                    │
//! │    ├── form ──────► SaleForm: modal fields + derived Amount Left        │
//! │    ├── render ────► SaleRow, ProductOption (pre-formatted text)         │
//! │    ├── backend ───► SalesBackend (get-sales, get-products, create-sale) │
//! │    │                 ├── InvokeBackend over a CommandChannel            │
//! │    │                 └── MemoryBackend (in process)                     │
//! │    ├── dashboard ─► DashboardListener (reload-dashboard)                │
//! │    ├── config ────► SalesConfig (currency, date format)                 │
//! │    └── error ─────► BackendError, SubmitError, Notice                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use inventory_core::{Money, Product};
//! use inventory_sales::{MemoryBackend, SalesConfig, SalesView};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let backend = MemoryBackend::with_products(vec![Product {
//!     id: 1,
//!     name: "Rice 5kg".to_string(),
//!     price: Money::from_cents(10_000),
//!     stock: 3,
//! }]);
//! let view = SalesView::new(Arc::new(backend), SalesConfig::default());
//! view.load().await;
//!
//! view.open_form();
//! view.set_customer_name("Ayesha");
//! view.select_product(Some(1)).unwrap();
//! view.set_quantity_input("2");
//! view.set_amount_paid("150");
//! assert_eq!(view.amount_left_display(), "50.00");
//!
//! view.submit().await.unwrap();
//! assert_eq!(view.rows()[0].badge(), "Partial");
//! # });
//! ```

pub mod backend;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod render;
pub mod view;

pub use backend::{CommandChannel, CreateSaleResult, InvokeBackend, MemoryBackend, SalesBackend};
pub use config::SalesConfig;
pub use dashboard::{DashboardEvent, DashboardListener, DashboardSignal, NoOpListener};
pub use error::{BackendError, BackendResult, Notice, SubmitError};
pub use form::SaleForm;
pub use render::{ProductOption, SaleRow};
pub use view::{SalesState, SalesView};

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=inventory_sales=trace` - Trace the sales screen only
/// - Default: INFO, DEBUG for the inventory crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,inventory_core=debug,inventory_sales=debug"));

    // Ignore the error when a subscriber is already installed (tests, embedding hosts).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .try_init();
}
