//! # Invoke Backend
//!
//! `SalesBackend` over the desktop host's generic `invoke(command, payload)`
//! bridge. All command-name strings and JSON (de)serialization live here.

use async_trait::async_trait;
use inventory_core::{Product, Sale};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::{commands, CreateSaleResult, SalesBackend};
use crate::error::{BackendError, BackendResult};

/// The host bridge: a named command with an optional JSON payload.
#[async_trait]
pub trait CommandChannel: Send + Sync {
    async fn invoke(&self, command: &str, payload: Option<Value>) -> BackendResult<Value>;
}

/// Typed client over a [`CommandChannel`].
#[derive(Debug, Clone)]
pub struct InvokeBackend<C> {
    channel: C,
}

impl<C: CommandChannel> InvokeBackend<C> {
    pub fn new(channel: C) -> Self {
        InvokeBackend { channel }
    }

    /// Returns a reference to the underlying channel.
    pub fn channel(&self) -> &C {
        &self.channel
    }

    async fn call<T: DeserializeOwned>(
        &self,
        command: &str,
        payload: Option<Value>,
    ) -> BackendResult<T> {
        debug!(command, "invoke");
        let response = self.channel.invoke(command, payload).await?;
        serde_json::from_value(response).map_err(|e| BackendError::Decode {
            command: command.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl<C: CommandChannel> SalesBackend for InvokeBackend<C> {
    async fn get_sales(&self) -> BackendResult<Vec<Sale>> {
        self.call(commands::GET_SALES, None).await
    }

    async fn get_products(&self) -> BackendResult<Vec<Product>> {
        self.call(commands::GET_PRODUCTS, None).await
    }

    async fn create_sale(&self, sale: &Sale) -> BackendResult<CreateSaleResult> {
        let payload = serde_json::to_value(sale).map_err(|e| BackendError::Encode {
            command: commands::CREATE_SALE.to_string(),
            message: e.to_string(),
        })?;
        self.call(commands::CREATE_SALE, Some(payload)).await
    }
}
