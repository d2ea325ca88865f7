//! # Backend Client
//!
//! Typed access to the three backend commands the sales screen uses.
//!
//! ## Command Organization
//! ```text
//! backend/
//! ├── mod.rs      ◄─── SalesBackend trait, command names, response types
//! ├── invoke.rs   ◄─── InvokeBackend over a generic command channel
//! └── memory.rs   ◄─── MemoryBackend for tests and the demo
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SalesView                                                              │
//! │  ─────────                                                              │
//! │  backend.create_sale(&sale).await                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  InvokeBackend                                                          │
//! │  ─────────────                                                          │
//! │  serde_json::to_value(sale)                                             │
//! │  channel.invoke("create-sale", Some(payload))                           │
//! │         │                                                               │
//! │         │ (host bridge)                                                 │
//! │         ▼                                                               │
//! │  { "success": false, "error": "Insufficient stock" }                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CreateSaleResult { success: false, error: Some(..) }                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod invoke;
mod memory;

pub use invoke::{CommandChannel, InvokeBackend};
pub use memory::MemoryBackend;

use async_trait::async_trait;
use inventory_core::{Product, Sale};
use serde::{Deserialize, Serialize};

use crate::error::BackendResult;

/// Command names understood by the backend.
pub mod commands {
    pub const GET_SALES: &str = "get-sales";
    pub const GET_PRODUCTS: &str = "get-products";
    pub const CREATE_SALE: &str = "create-sale";
}

/// Outcome of `create-sale`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleResult {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreateSaleResult {
    pub fn ok() -> Self {
        CreateSaleResult {
            success: true,
            error: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        CreateSaleResult {
            success: false,
            error: Some(reason.into()),
        }
    }
}

/// One method per backend command.
#[async_trait]
pub trait SalesBackend: Send + Sync {
    /// Sales history, in the backend's order.
    async fn get_sales(&self) -> BackendResult<Vec<Sale>>;

    /// The product catalog.
    async fn get_products(&self) -> BackendResult<Vec<Product>>;

    /// Persists a sale and decrements stock.
    async fn create_sale(&self, sale: &Sale) -> BackendResult<CreateSaleResult>;
}
