//! Duplicate neutral-value detection.
//!
//! Two keys sharing the same default-culture value are ambiguous for
//! translators: the variants cannot be told apart in translation tooling.
//! Fires once per affected entry, reported at the generated member's
//! declaration.

use std::collections::HashMap;

use crate::core::data::{EntryContext, SourceLocation};
use crate::core::resources::ResxDocument;
use crate::core::semantics::AccessorType;
use crate::issues::DuplicateValueIssue;
use crate::rules::helpers::member_col;

pub fn check_duplicate_values(
    accessor: &AccessorType,
    table: &ResxDocument,
) -> Vec<DuplicateValueIssue> {
    let mut by_value: HashMap<&str, Vec<&str>> = HashMap::new();
    for member in &accessor.members {
        if let Some(entry) = table.get(&member.name)
            && !entry.value.is_empty()
        {
            by_value.entry(&entry.value).or_default().push(&member.name);
        }
    }

    let mut issues = Vec::new();
    for member in &accessor.members {
        let Some(entry) = table.get(&member.name) else {
            continue;
        };
        let Some(keys) = by_value.get(entry.value.as_str()) else {
            continue;
        };
        if keys.len() < 2 {
            continue;
        }
        let duplicates: Vec<String> = keys
            .iter()
            .filter(|k| **k != member.name)
            .map(|k| k.to_string())
            .collect();
        issues.push(DuplicateValueIssue {
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
            duplicates,
        });
    }
    issues
}
