// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use reqwest::header;
use std::time::Duration;

pub type HTTPClient = reqwest::Client;

#[derive(Clone, Debug, Default)]
pub struct HttpSettings {
    /// Accept any server certificate, including self-signed or expired ones
    pub insecure_skip_verify: bool,
    /// Per-request timeout; requests may wait forever when absent
    pub timeout: Option<Duration>,
}

pub fn build_http_client(settings: &HttpSettings) -> anyhow::Result<HTTPClient> {
    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let mut headers = header::HeaderMap::new();
    headers.insert(header::USER_AGENT, header::HeaderValue::from_str(&user_agent)?);

    let mut builder = HTTPClient::builder().default_headers(headers);

    if settings.insecure_skip_verify {
        log::warn!("[ansiblehound.http] TLS certificate verification is disabled");
        builder = builder.danger_accept_invalid_certs(true);
    }

    if let Some(timeout) = settings.timeout {
        log::info!("[ansiblehound.http] requests will time out after {:?}", timeout);
        builder = builder.timeout(timeout);
    }

    let client = builder.build()?;
    Ok(client)
}
