// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::IconDefinition;

/// Custom node kinds emitted by the AnsibleHound collector, in registration order
pub static ICON_CATALOG: [IconDefinition; 12] = [
    IconDefinition::new("ATAnsibleInstance", "sitemap", "#E43131"),
    IconDefinition::new("ATOrganization", "building", "#F59C36"),
    IconDefinition::new("ATInventory", "network-wired", "#FF78F2"),
    IconDefinition::new("ATUser", "user", "#7ADEE9"),
    IconDefinition::new("ATJob", "gears", "#7CAAFF"),
    IconDefinition::new("ATJobTemplate", "code", "#493EB0"),
    IconDefinition::new("ATProject", "folder-open", "#EC7589"),
    IconDefinition::new("ATCredential", "key", "#94E16A"),
    IconDefinition::new("ATCredentialType", "gear", "#94E16A"),
    IconDefinition::new("ATHost", "desktop", "#E9E350"),
    IconDefinition::new("ATTeam", "people-group", "#724752"),
    IconDefinition::new("ATGroup", "object-group", "#159b7c"),
];

#[cfg(test)]
mod tests {
    use crate::core::catalog::ICON_CATALOG;
    use assertor::EqualityAssertion;
    use std::collections::HashSet;

    #[test]
    fn should_keep_type_names_unique() {
        let type_names = ICON_CATALOG
            .iter()
            .map(|definition| definition.type_name)
            .collect::<HashSet<_>>();

        assertor::assert_that!(type_names.len()).is_equal_to(ICON_CATALOG.len());
    }

    #[test]
    fn should_list_ansible_kinds_in_registration_order() {
        let type_names = ICON_CATALOG
            .iter()
            .map(|definition| definition.type_name)
            .collect::<Vec<_>>();

        let expected = [
            "ATAnsibleInstance",
            "ATOrganization",
            "ATInventory",
            "ATUser",
            "ATJob",
            "ATJobTemplate",
            "ATProject",
            "ATCredential",
            "ATCredentialType",
            "ATHost",
            "ATTeam",
            "ATGroup",
        ];

        assertor::assert_that!(type_names).is_equal_to(expected.to_vec());
    }
}
