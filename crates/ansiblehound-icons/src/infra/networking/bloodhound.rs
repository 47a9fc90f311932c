// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::interfaces::IconPublishing;
use crate::core::models::{CustomNodesPayload, Delivery, IconDefinition};
use crate::infra::networking::http::HTTPClient;
use anyhow::Context;
use std::sync::Arc;

pub static CUSTOM_NODES_ENDPOINT: &str = "/api/v2/custom-nodes";

pub struct BloodHoundClient {
    base_url: String,
    token: String,
    http_client: Arc<HTTPClient>,
}

impl BloodHoundClient {
    pub fn new(base_url: String, token: String, http_client: Arc<HTTPClient>) -> Self {
        Self {
            base_url,
            token,
            http_client,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CUSTOM_NODES_ENDPOINT)
    }

    /// Any HTTP status yields a [`Delivery`]; only transport failures are errors.
    pub async fn post_custom_nodes(&self, payload: &CustomNodesPayload<'_>) -> anyhow::Result<Delivery> {
        let endpoint = self.endpoint();

        let response = self
            .http_client
            .post(&endpoint)
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("[ansiblehound.bloodhound] cannot reach {}", endpoint))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("[ansiblehound.bloodhound] failed to read response body")?;

        log::info!("[ansiblehound.bloodhound] {} answered with HTTP status {}", endpoint, status);
        Ok(Delivery::new(status, body))
    }
}

impl IconPublishing for BloodHoundClient {
    async fn publish(&self, definition: &IconDefinition) -> anyhow::Result<Delivery> {
        let payload = CustomNodesPayload::from(definition);
        self.post_custom_nodes(&payload).await
    }
}
