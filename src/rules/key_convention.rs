//! Key naming convention check.
//!
//! Generated member names follow from their neutral value (`Saved file {0}`
//! → `Saved_file__0_`). A member whose name no longer matches its value is
//! a stale key: the value changed and the key kept the old derivation. The
//! suggested name in the payload feeds the rename fix.

use crate::core::data::{EntryContext, SourceLocation};
use crate::core::resources::ResxDocument;
use crate::core::semantics::AccessorType;
use crate::issues::KeyConventionIssue;
use crate::rules::helpers::member_col;
use crate::utils::key_from_value;

pub fn check_key_convention(
    accessor: &AccessorType,
    table: &ResxDocument,
) -> Vec<KeyConventionIssue> {
    let mut issues = Vec::new();
    for member in &accessor.members {
        let Some(entry) = table.get(&member.name) else {
            continue;
        };
        let expected = key_from_value(&entry.value);
        if expected.is_empty() || expected == member.name {
            continue;
        }
        issues.push(KeyConventionIssue {
            context: EntryContext::new(
                SourceLocation::new(
                    accessor.designer_rel.clone(),
                    member.line,
                    member_col(&member.source_line, &member.name),
                ),
                member.name.clone(),
                entry.value.clone(),
            )
            .with_source_line(member.source_line.clone()),
            suggested: expected,
        });
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::semantics::AccessorMember;
    use crate::rules::duplicate_value::check_duplicate_values;
    use std::path::PathBuf;

    fn accessor(members: &[&str]) -> AccessorType {
        AccessorType {
            name: "Resources".to_string(),
            namespace: "MyApp.Properties".to_string(),
            designer_path: PathBuf::from("Properties/Resources.Designer.cs"),
            designer_rel: "./Properties/Resources.Designer.cs".to_string(),
            resx_path: PathBuf::from("Properties/Resources.resx"),
            members: members
                .iter()
                .enumerate()
                .map(|(i, name)| AccessorMember {
                    name: name.to_string(),
                    line: 10 + i * 7,
                    source_line: format!("        public static string {name} {{"),
                })
                .collect(),
        }
    }

    fn table(entries: &[(&str, &str)]) -> ResxDocument {
        let data: String = entries
            .iter()
            .map(|(k, v)| format!("  <data name=\"{k}\"><value>{v}</value></data>\n"))
            .collect();
        ResxDocument::parse(
            PathBuf::from("Resources.resx"),
            format!("<root>\n{data}</root>\n"),
        )
        .unwrap()
    }

    #[test]
    fn matching_names_pass() {
        let accessor = accessor(&["Saved_file__0_", "OK"]);
        let table = table(&[("Saved_file__0_", "Saved file {0}"), ("OK", "OK")]);
        assert!(check_key_convention(&accessor, &table).is_empty());
    }

    #[test]
    fn stale_name_fires_with_suggestion() {
        let accessor = accessor(&["Saved_file__0_"]);
        let table = table(&[("Saved_file__0_", "File saved")]);

        let issues = check_key_convention(&accessor, &table);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].context.key, "Saved_file__0_");
        assert_eq!(issues[0].suggested, "File_saved");
    }

    #[test]
    fn member_without_entry_is_skipped() {
        let accessor = accessor(&["Orphan"]);
        let table = table(&[]);
        assert!(check_key_convention(&accessor, &table).is_empty());
    }

    #[test]
    fn empty_value_has_no_convention() {
        let accessor = accessor(&["Key"]);
        let table = table(&[("Key", "")]);
        assert!(check_key_convention(&accessor, &table).is_empty());
    }

    #[test]
    fn duplicate_fixture_yields_two_plus_two() {
        // Two entries whose long-derived names got stale when both values
        // were replaced by "Value": each entry gets one convention and one
        // duplicate diagnostic, all four on the generated file.
        let accessor = accessor(&["Lorem_ipsum_dolor", "Sed_do_eiusmod"]);
        let table = table(&[("Lorem_ipsum_dolor", "Value"), ("Sed_do_eiusmod", "Value")]);

        let convention = check_key_convention(&accessor, &table);
        let duplicates = check_duplicate_values(&accessor, &table);
        assert_eq!(convention.len(), 2);
        assert_eq!(duplicates.len(), 2);
        for issue in &convention {
            assert_eq!(issue.suggested, "Value");
            assert_eq!(
                issue.context.location.file_path,
                "./Properties/Resources.Designer.cs"
            );
        }
        for issue in &duplicates {
            assert_eq!(
                issue.context.location.file_path,
                "./Properties/Resources.Designer.cs"
            );
        }
    }
}
