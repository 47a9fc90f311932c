// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

pub static FONT_AWESOME_ICON_KIND: &str = "font-awesome";

/// Visual representation of one custom node kind.
///
/// Icon names and colors are passed through to BloodHound without any local validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconDefinition {
    pub type_name: &'static str,
    pub icon_name: &'static str,
    pub color: &'static str,
}

impl IconDefinition {
    pub const fn new(type_name: &'static str, icon_name: &'static str, color: &'static str) -> Self {
        Self {
            type_name,
            icon_name,
            color,
        }
    }
}

impl Display for IconDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}

#[derive(Debug, Serialize)]
pub struct NodeIcon<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub name: &'a str,
    pub color: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CustomNodeDisplay<'a> {
    pub icon: NodeIcon<'a>,
}

/// Request body accepted by the custom nodes endpoint
#[derive(Debug, Serialize)]
pub struct CustomNodesPayload<'a> {
    pub custom_types: BTreeMap<&'a str, CustomNodeDisplay<'a>>,
}

impl<'a> From<&'a IconDefinition> for CustomNodesPayload<'a> {
    fn from(definition: &'a IconDefinition) -> Self {
        let display = CustomNodeDisplay {
            icon: NodeIcon {
                kind: FONT_AWESOME_ICON_KIND,
                name: definition.icon_name,
                color: definition.color,
            },
        };

        Self {
            custom_types: BTreeMap::from([(definition.type_name, display)]),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    pub status: u16,
    pub body: String,
}

impl Delivery {
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }

    pub fn is_accepted(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    ContinueOnError,
    FailFast,
}

pub type PushOutcome = (IconDefinition, Option<Delivery>);

#[derive(Debug, Default, PartialEq, Eq)]
pub struct PushStatistics {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub struct PushResults {
    pub statistics: PushStatistics,
    pub outcomes: Vec<PushOutcome>,
}

impl From<Vec<PushOutcome>> for PushResults {
    fn from(outcomes: Vec<PushOutcome>) -> Self {
        let mut statistics = PushStatistics {
            total: outcomes.len(),
            ..Default::default()
        };

        for (_, maybe_delivery) in &outcomes {
            match maybe_delivery {
                Some(delivery) if delivery.is_accepted() => statistics.accepted += 1,
                Some(_) => statistics.rejected += 1,
                None => statistics.failed += 1,
            }
        }

        Self { statistics, outcomes }
    }
}
