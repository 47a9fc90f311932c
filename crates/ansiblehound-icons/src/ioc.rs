// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::infra::networking::IconPublisher;
use crate::infra::networking::bloodhound::BloodHoundClient;
use crate::infra::networking::http::build_http_client;
use crate::infra::reporting::console::ConsoleReporter;
use crate::pusher::{DefinitionPusher, PushTask};
use std::sync::Arc;

pub fn create_pusher(task: PushTask, turnoff_colors: bool) -> anyhow::Result<DefinitionPusher> {
    let http_client = Arc::new(build_http_client(&task.http_settings)?);
    let bloodhound_client = BloodHoundClient::new(task.base_url, task.token, http_client);
    let endpoint = bloodhound_client.endpoint();

    let icon_publisher = IconPublisher::BloodHound(bloodhound_client);
    let console_reporter = ConsoleReporter::new(!turnoff_colors);

    let pusher = DefinitionPusher::new(icon_publisher, console_reporter, task.failure_policy, endpoint);
    Ok(pusher)
}
