// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::catalog::ICON_CATALOG;
use crate::core::interfaces::IconPublishing;
use crate::core::models::{Delivery, FailurePolicy, IconDefinition, PushResults};
use crate::infra::networking::IconPublisher;
use crate::infra::networking::http::HttpSettings;
use crate::infra::reporting::console::ConsoleReporter;
use anyhow::bail;

#[derive(Debug)]
pub struct PushTask {
    pub base_url: String,
    pub token: String,
    pub http_settings: HttpSettings,
    pub failure_policy: FailurePolicy,
}

pub struct DefinitionPusher {
    icon_publisher: IconPublisher,
    console_reporter: ConsoleReporter,
    failure_policy: FailurePolicy,
    endpoint: String,
}

impl DefinitionPusher {
    pub fn new(
        icon_publisher: IconPublisher,
        console_reporter: ConsoleReporter,
        failure_policy: FailurePolicy,
        endpoint: String,
    ) -> Self {
        Self {
            icon_publisher,
            console_reporter,
            failure_policy,
            endpoint,
        }
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        let results = self.run(&ICON_CATALOG).await?;
        let statistics = &results.statistics;

        if statistics.failed > 0 {
            bail!(
                "ansiblehound.pusher : {} out of {} icon definitions could not be delivered",
                statistics.failed,
                statistics.total
            )
        }

        Ok(())
    }

    /// Sends every definition in order. HTTP statuses never interrupt the run, while transport
    /// failures do only under [`FailurePolicy::FailFast`].
    pub async fn run(&self, catalog: &[IconDefinition]) -> anyhow::Result<PushResults> {
        self.console_reporter.report_pusher_started(&self.endpoint, catalog.len());

        let mut outcomes = Vec::with_capacity(catalog.len());

        for definition in catalog {
            match self.send_one(definition).await {
                Ok(delivery) => outcomes.push((*definition, Some(delivery))),
                Err(incoming) => {
                    self.console_reporter.report_failure(definition, &incoming);

                    if self.failure_policy == FailurePolicy::FailFast {
                        log::info!("[ansiblehound.pusher] skipping remaining definitions after {}", definition);
                        return Err(incoming.context(format!(
                            "ansiblehound.pusher : aborted while sending icon for {}",
                            definition
                        )));
                    }

                    outcomes.push((*definition, None));
                },
            }
        }

        let results = PushResults::from(outcomes);
        self.console_reporter.report_pusher_outcomes(&results);
        Ok(results)
    }

    pub async fn send_one(&self, definition: &IconDefinition) -> anyhow::Result<Delivery> {
        log::info!("[ansiblehound.pusher] sending icon definition for {}", definition);

        let delivery = self.icon_publisher.publish(definition).await?;

        if !delivery.is_accepted() {
            log::info!(
                "[ansiblehound.pusher] {} not accepted (HTTP status = {})",
                definition,
                delivery.status
            );
        }

        self.console_reporter.report_delivery(definition, &delivery);
        Ok(delivery)
    }
}
