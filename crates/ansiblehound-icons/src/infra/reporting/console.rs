// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::{Delivery, IconDefinition, PushResults};
use comfy_table::Table;
use console::{StyledObject, style};

#[derive(Default)]
pub struct ConsoleReporter {
    use_colors: bool,
}

impl ConsoleReporter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn report_pusher_started(&self, endpoint: &str, total_definitions: usize) {
        println!();
        println!(
            "Registering {} custom node icons at {} ...",
            self.cyan(total_definitions),
            self.cyan(endpoint)
        );
        println!();
    }

    pub fn report_delivery(&self, definition: &IconDefinition, delivery: &Delivery) {
        let status = match delivery.is_accepted() {
            true => self.cyan(delivery.status),
            false => self.red(delivery.status),
        };

        println!("🔹 Sent icon for: {}", self.cyan(definition.type_name));
        println!("Status Code: {}", status);
        println!("Response Body: {}", delivery.body);
        println!("---");
    }

    pub fn report_failure(&self, definition: &IconDefinition, error: &anyhow::Error) {
        eprintln!(
            "🔸 Failed to send icon for: {} ({})",
            self.red(definition.type_name),
            self.red(format!("{:#}", error))
        );
        println!("---");
    }

    pub fn report_pusher_outcomes(&self, results: &PushResults) {
        let statistics = &results.statistics;
        println!();
        println!("Statistics : ");
        println!();
        println!("• total icon definitions : {}", self.cyan(statistics.total));
        println!("• accepted by BloodHound : {}", self.cyan(statistics.accepted));
        println!("• rejected by BloodHound : {}", self.highlight_count(statistics.rejected));
        println!("• not delivered : {}", self.highlight_count(statistics.failed));
        println!();

        let mut table = Table::new();
        table.set_header(vec!["Custom type", "Icon", "Color", "Outcome"]);
        results.outcomes.iter().for_each(|(definition, maybe_delivery)| {
            let row = vec![
                definition.type_name.to_string(),
                definition.icon_name.to_string(),
                definition.color.to_string(),
                describe_outcome(maybe_delivery.as_ref()),
            ];

            table.add_row(row);
        });

        println!("{table}");
        println!();
    }

    fn highlight_count(&self, count: usize) -> StyledObject<usize> {
        match count {
            0 => self.cyan(count),
            _ => self.red(count),
        }
    }

    fn cyan<T>(&self, what: T) -> StyledObject<T> {
        match self.use_colors {
            true => style(what).cyan(),
            false => style(what),
        }
    }

    fn red<T>(&self, what: T) -> StyledObject<T> {
        match self.use_colors {
            true => style(what).red(),
            false => style(what),
        }
    }
}

fn describe_outcome(maybe_delivery: Option<&Delivery>) -> String {
    match maybe_delivery {
        Some(delivery) if delivery.is_accepted() => format!("accepted (HTTP {})", delivery.status),
        Some(delivery) => format!("rejected (HTTP {})", delivery.status),
        None => "not delivered".to_string(),
    }
}
