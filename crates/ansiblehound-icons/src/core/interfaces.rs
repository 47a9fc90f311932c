// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::{Delivery, IconDefinition};

pub trait IconPublishing {
    async fn publish(&self, definition: &IconDefinition) -> anyhow::Result<Delivery>;
}
