// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

pub mod catalog;
pub mod interfaces;
pub mod models;
