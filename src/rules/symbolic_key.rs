//! Symbolic key reference enforcement.
//!
//! A key passed as a string literal survives resource renames silently
//! wrong; `nameof` references do not. Fires for literals, member accesses
//! that do not resolve to the accessor in scope, and `ToString()` calls —
//! even when the key itself is valid. Dynamic keys are skipped.

use crate::core::classify::{CallSite, CallSiteKind, KeyArgument};
use crate::core::data::Span;
use crate::core::semantics::ProjectIndex;
use crate::core::context::AnalysisContext;
use crate::issues::{LiteralKeyIssue, Rule};

pub fn check_literal_keys(ctx: &AnalysisContext) -> Vec<LiteralKeyIssue> {
    let mut issues = Vec::new();
    for file in &ctx.files {
        for site in &file.call_sites {
            let Some(found) = literal_key(site, &ctx.index) else {
                continue;
            };
            if file.is_suppressed(found.span.start, Rule::LiteralKey) {
                continue;
            }
            issues.push(LiteralKeyIssue {
                context: file.source_context(found.span.start),
                key: found.key,
                accessor: site.accessor.clone(),
                replacement: found.replacement,
                span: found.span,
            });
        }
    }
    issues
}

struct LiteralKey {
    key: Option<String>,
    replacement: Option<String>,
    span: Span,
}

fn literal_key(site: &CallSite, index: &ProjectIndex) -> Option<LiteralKey> {
    // A raw member access is its own rule's business.
    if matches!(site.kind, CallSiteKind::ResourceMemberAccess { .. }) {
        return None;
    }
    match &site.key {
        KeyArgument::Literal { value, span } => {
            let replacement = index
                .accessor_named(&site.accessor)
                .filter(|a| a.has_member(value))
                .map(|a| format!("nameof({}.{})", a.display_name(), value));
            Some(LiteralKey {
                key: Some(value.clone()),
                replacement,
                span: *span,
            })
        }
        KeyArgument::NonSymbolic { span, .. } => Some(LiteralKey {
            key: None,
            replacement: None,
            span: *span,
        }),
        KeyArgument::NameOf { .. }
        | KeyArgument::AccessorMember { .. }
        | KeyArgument::Dynamic => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify::classify;
    use crate::core::semantics::{AccessorMember, AccessorType, WrapperMethod};
    use crate::core::syntax::scan_file;
    use std::path::PathBuf;

    fn index() -> ProjectIndex {
        let mut index = ProjectIndex::new(&["Translator.Translate".to_string()]);
        index.add_accessor(AccessorType {
            name: "Resources".to_string(),
            namespace: "MyApp.Properties".to_string(),
            designer_path: PathBuf::from("Properties/Resources.Designer.cs"),
            designer_rel: "./Properties/Resources.Designer.cs".to_string(),
            resx_path: PathBuf::from("Properties/Resources.resx"),
            members: vec![AccessorMember {
                name: "Key".to_string(),
                line: 10,
                source_line: String::new(),
            }],
        });
        index.add_wrapper(WrapperMethod {
            class_name: "Translate".to_string(),
            method_name: "Key".to_string(),
            accessor: "Resources".to_string(),
            returns_translation: false,
        });
        index
    }

    fn literal_keys(source: &str) -> Vec<LiteralKey> {
        let index = index();
        scan_file(source)
            .candidates
            .iter()
            .filter_map(|c| classify(c, &index, source))
            .filter_map(|site| literal_key(&site, &index))
            .collect()
    }

    #[test]
    fn literal_with_matching_member_gets_replacement() {
        let found =
            literal_keys(r#"var x = Translator.Translate(Resources.ResourceManager, "Key");"#);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].key.as_deref(), Some("Key"));
        assert_eq!(
            found[0].replacement.as_deref(),
            Some("nameof(Resources.Key)")
        );
    }

    #[test]
    fn literal_without_member_fires_without_replacement() {
        let found =
            literal_keys(r#"var x = Translator.Translate(Resources.ResourceManager, "Missing");"#);
        assert_eq!(found.len(), 1);
        assert!(found[0].replacement.is_none());
    }

    #[test]
    fn nameof_reference_passes() {
        assert!(
            literal_keys(
                "var x = Translator.Translate(Resources.ResourceManager, nameof(Resources.Key));"
            )
            .is_empty()
        );
    }

    #[test]
    fn accessor_member_key_is_not_this_rules_business() {
        // `Resources.Key` as the key argument is flagged by raw-resource.
        let source = "var x = Translator.Translate(Resources.ResourceManager, Resources.Key);";
        let index = index();
        let found: Vec<LiteralKey> = scan_file(source)
            .candidates
            .iter()
            .filter_map(|c| classify(c, &index, source))
            .filter(|site| matches!(site.kind, CallSiteKind::GenericTranslate { .. }))
            .filter_map(|site| literal_key(&site, &index))
            .collect();
        assert!(found.is_empty());
    }

    #[test]
    fn stringified_key_fires_without_fix() {
        let found = literal_keys("var x = Translate.Key(someEnum.ToString());");
        assert_eq!(found.len(), 1);
        assert!(found[0].key.is_none());
        assert!(found[0].replacement.is_none());
    }

    #[test]
    fn foreign_member_access_fires() {
        let found = literal_keys("var x = Translate.Key(Constants.SaveKey);");
        assert_eq!(found.len(), 1);
        assert!(found[0].key.is_none());
    }

    #[test]
    fn dynamic_key_is_skipped() {
        assert!(literal_keys("var x = Translate.Key(key);").is_empty());
    }
}
