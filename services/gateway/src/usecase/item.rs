use axum::http::Method;

use crate::domain::port::ResourcePort;
use crate::domain::types::Forwarded;
use crate::error::GatewayError;

pub struct ForwardItemsInput {
    pub method: Method,
    pub id: Option<i32>,
    pub body: Option<serde_json::Value>,
}

/// Relays an authenticated `/items` request to the resource service.
pub struct ForwardItemsUseCase<R: ResourcePort> {
    pub resources: R,
}

impl<R: ResourcePort> ForwardItemsUseCase<R> {
    pub async fn execute(
        &self,
        username: &str,
        input: ForwardItemsInput,
    ) -> Result<Forwarded, GatewayError> {
        let method = input.method.clone();
        let forwarded = self
            .resources
            .forward_items(input.method, input.id, input.body)
            .await?;
        tracing::debug!(
            username = %username,
            %method,
            item_id = ?input.id,
            status = forwarded.status.as_u16(),
            "item request forwarded"
        );
        Ok(forwarded)
    }
}
