use anyhow::Context as _;
use axum::http::{Method, StatusCode};
use reqwest::{Client, Url};

use crate::domain::port::ResourcePort;
use crate::domain::types::{Forwarded, UserRecord};
use crate::error::GatewayError;
use crate::infra::endpoint;

/// `ResourcePort` over the resource service's HTTP API.
#[derive(Clone)]
pub struct HttpResourceClient {
    client: Client,
    base_url: Url,
}

impl HttpResourceClient {
    pub fn new(client: Client, base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid resource service url: {base_url}"))?;
        Ok(Self { client, base_url })
    }
}

impl ResourcePort for HttpResourceClient {
    async fn find_user(&self, username: &str) -> Result<Option<UserRecord>, GatewayError> {
        let url = endpoint(&self.base_url, &["users", username])?;
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("fetch user from resource service")?;

        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let user = resp
                    .json::<UserRecord>()
                    .await
                    .context("decode user from resource service")?;
                Ok(Some(user))
            }
            status => {
                Err(anyhow::anyhow!("resource service answered {status} for user lookup").into())
            }
        }
    }

    async fn forward_items(
        &self,
        method: Method,
        id: Option<i32>,
        body: Option<serde_json::Value>,
    ) -> Result<Forwarded, GatewayError> {
        let id = id.map(|id| id.to_string());
        let url = match &id {
            Some(id) => endpoint(&self.base_url, &["items", id])?,
            None => endpoint(&self.base_url, &["items"])?,
        };

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let resp = request
            .send()
            .await
            .context("forward item request to resource service")?;

        let status = resp.status();
        let body = resp
            .json::<serde_json::Value>()
            .await
            .context("decode resource service item response")?;
        Ok(Forwarded { status, body })
    }
}
