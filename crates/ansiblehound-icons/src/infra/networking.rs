// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::interfaces::IconPublishing;
use crate::core::models::{Delivery, IconDefinition};
use crate::infra::networking::bloodhound::BloodHoundClient;
#[cfg(test)]
use std::sync::{Arc, Mutex};

pub mod bloodhound;
pub mod http;

pub enum IconPublisher {
    BloodHound(BloodHoundClient),
    #[cfg(test)]
    Fake(FakeIconPublisher),
}

impl IconPublishing for IconPublisher {
    async fn publish(&self, definition: &IconDefinition) -> anyhow::Result<Delivery> {
        match self {
            IconPublisher::BloodHound(delegate) => delegate.publish(definition).await,
            #[cfg(test)]
            IconPublisher::Fake(delegate) => delegate.publish(definition).await,
        }
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct FakeIconPublisher {
    rejected: Vec<&'static str>,
    unreachable: Vec<&'static str>,
    attempts: Arc<Mutex<Vec<&'static str>>>,
}

#[cfg(test)]
impl FakeIconPublisher {
    pub fn rejecting(rejected: Vec<&'static str>) -> Self {
        Self {
            rejected,
            ..Default::default()
        }
    }

    pub fn unreachable_for(unreachable: Vec<&'static str>) -> Self {
        Self {
            unreachable,
            ..Default::default()
        }
    }

    pub fn attempts(&self) -> Arc<Mutex<Vec<&'static str>>> {
        self.attempts.clone()
    }
}

#[cfg(test)]
impl IconPublishing for FakeIconPublisher {
    async fn publish(&self, definition: &IconDefinition) -> anyhow::Result<Delivery> {
        self.attempts.lock().unwrap().push(definition.type_name);

        if self.unreachable.contains(&definition.type_name) {
            anyhow::bail!("connection refused");
        }

        if self.rejected.contains(&definition.type_name) {
            return Ok(Delivery::new(500, "internal error".to_string()));
        }

        Ok(Delivery::new(201, "{}".to_string()))
    }
}
