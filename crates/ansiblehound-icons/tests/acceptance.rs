// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use httpmock::{Mock, MockServer};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::json;

static TEST_TOKEN: &str = "ey.test.token";

static EXPECTED_DEFINITIONS: [(&str, &str, &str); 12] = [
    ("ATAnsibleInstance", "sitemap", "#E43131"),
    ("ATOrganization", "building", "#F59C36"),
    ("ATInventory", "network-wired", "#FF78F2"),
    ("ATUser", "user", "#7ADEE9"),
    ("ATJob", "gears", "#7CAAFF"),
    ("ATJobTemplate", "code", "#493EB0"),
    ("ATProject", "folder-open", "#EC7589"),
    ("ATCredential", "key", "#94E16A"),
    ("ATCredentialType", "gear", "#94E16A"),
    ("ATHost", "desktop", "#E9E350"),
    ("ATTeam", "people-group", "#724752"),
    ("ATGroup", "object-group", "#159b7c"),
];

fn sut() -> Command {
    Command::cargo_bin("ansiblehound-icons").expect("Should be able to create a command")
}

fn mock_custom_nodes_endpoint<'a>(mock_server: &'a MockServer, failing_type: Option<&str>) -> Vec<Mock<'a>> {
    EXPECTED_DEFINITIONS
        .iter()
        .map(|(type_name, icon_name, color)| {
            let status = match failing_type {
                Some(failing) if failing == *type_name => 500,
                _ => 201,
            };

            let expected_payload = json!({
                "custom_types": {
                    (*type_name): {
                        "icon": {
                            "type": "font-awesome",
                            "name": icon_name,
                            "color": color
                        }
                    }
                }
            });

            mock_server.mock(|when, then| {
                when.method("POST")
                    .path("/api/v2/custom-nodes")
                    .header("authorization", format!("Bearer {}", TEST_TOKEN))
                    .header("content-type", "application/json")
                    .json_body(expected_payload);

                then.status(status)
                    .header("content-type", "application/json; charset=UTF-8")
                    .body(format!(r#"{{"data":{{"kind":"{}"}}}}"#, type_name));
            })
        })
        .collect()
}

#[test]
fn should_show_usage_when_no_arguments_given() {
    let execution = sut().assert();

    execution.code(1).stderr(contains("Usage"));
}

#[test]
fn should_show_usage_without_sending_when_token_missing() {
    let mock_server = MockServer::start();
    let mocks = mock_custom_nodes_endpoint(&mock_server, None);

    let execution = sut().args([mock_server.base_url().as_str()]).assert();

    execution.code(1).stderr(contains("Usage"));
    mocks.iter().for_each(|mocked| mocked.assert_calls(0));
}

#[test]
fn should_reject_unexpected_extra_arguments() {
    let execution = sut()
        .args(["http://127.0.0.1:8080", TEST_TOKEN, "unexpected"])
        .assert();

    execution.code(1).stderr(contains("Usage"));
}

#[test]
fn should_reject_malformed_bloodhound_url() {
    let execution = sut().args(["not a url", TEST_TOKEN, "--no-colors"]).assert();

    execution.code(1).stderr(contains("invalid BloodHound URL"));
}

#[test]
fn should_register_every_icon_in_catalog_order() {
    let mock_server = MockServer::start();
    let mocks = mock_custom_nodes_endpoint(&mock_server, None);

    let execution = sut()
        .args([mock_server.base_url().as_str(), TEST_TOKEN, "--no-colors"])
        .assert()
        .success();

    mocks.iter().for_each(|mocked| mocked.assert_calls(1));

    let output = String::from_utf8_lossy(&execution.get_output().stdout).to_string();
    let positions = EXPECTED_DEFINITIONS
        .iter()
        .map(|(type_name, _, _)| {
            let progress_line = format!("Sent icon for: {}\n", type_name);
            output.find(&progress_line).expect("Progress line should be printed")
        })
        .collect::<Vec<_>>();

    let mut sorted_positions = positions.clone();
    sorted_positions.sort();

    assert_eq!(positions, sorted_positions);
    assert_eq!(output.matches("Status Code: 201").count(), 12);
}

#[test]
fn should_keep_registering_icons_after_server_error() {
    let mock_server = MockServer::start();
    let mocks = mock_custom_nodes_endpoint(&mock_server, Some("ATOrganization"));

    let execution = sut()
        .args([mock_server.base_url().as_str(), TEST_TOKEN, "--no-colors"])
        .assert();

    execution
        .success()
        .stdout(contains("Status Code: 500"))
        .stdout(contains(r#"Response Body: {"data":{"kind":"ATGroup"}}"#));

    mocks.iter().for_each(|mocked| mocked.assert_calls(1));
}

#[test]
fn should_fail_when_bloodhound_not_reachable() {
    let execution = sut()
        .args(["http://127.0.0.1:1", TEST_TOKEN, "--no-colors"])
        .assert();

    execution
        .code(1)
        .stderr(contains("Failed to send icon for: ATGroup"))
        .stderr(contains("12 out of 12 icon definitions could not be delivered"));
}

#[test]
fn should_abort_after_first_unreachable_request_when_failing_fast() {
    let execution = sut()
        .args(["http://127.0.0.1:1", TEST_TOKEN, "--no-colors", "--fail-fast"])
        .assert();

    execution
        .code(1)
        .stderr(contains("aborted while sending icon for ATAnsibleInstance"))
        .stderr(contains("ATOrganization").not());
}

#[test]
fn should_reject_token_unusable_as_header_without_sending() {
    let mock_server = MockServer::start();
    let mocks = mock_custom_nodes_endpoint(&mock_server, None);

    let execution = sut()
        .args([mock_server.base_url().as_str(), "bad\ntoken", "--no-colors"])
        .assert();

    execution.code(1).stderr(contains("invalid token"));
    mocks.iter().for_each(|mocked| mocked.assert_calls(0));
}
