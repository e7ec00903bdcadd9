//! Build the `ProjectIndex` from project sources.
//!
//! This is the collection phase: designer files contribute accessor types
//! (the generated member surface is the key universe), and wrapper classes
//! are detected by shape — a static method taking a string key with an
//! optional second parameter, declared in a class that forwards to an
//! accessor's `ResourceManager`.

use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;

use crate::config::Config;
use crate::core::context::SourceFile;
use crate::core::data::LineIndex;
use crate::core::semantics::{AccessorMember, AccessorType, ProjectIndex, WrapperMethod};
use crate::core::syntax::expr::{find_matching_paren, read_path};
use crate::core::syntax::lexer::{Token, TokenKind, scan_tokens};

/// Collect accessors and wrappers from all project files.
pub fn collect_index(files: &[SourceFile], config: &Config) -> ProjectIndex {
    let mut index = ProjectIndex::new(&config.translate_methods);

    for file in files {
        if file.is_designer()
            && let Some(accessor) = parse_designer(file)
        {
            index.add_accessor(accessor);
        }
    }

    let accessor_names: HashSet<String> =
        index.accessors.iter().map(|a| a.name.clone()).collect();
    let single_accessor = (accessor_names.len() == 1)
        .then(|| accessor_names.iter().next().cloned())
        .flatten();

    for file in files {
        if file.is_designer() {
            continue;
        }
        for candidate in scan_wrapper_candidates(&file.text, &accessor_names) {
            let forced = config
                .wrapper_classes
                .iter()
                .any(|c| c == &candidate.class_name);
            let accessor = candidate
                .accessor
                .clone()
                .or_else(|| forced.then(|| single_accessor.clone()).flatten());
            if let Some(accessor) = accessor {
                index.add_wrapper(WrapperMethod {
                    class_name: candidate.class_name,
                    method_name: candidate.method_name,
                    accessor,
                    returns_translation: candidate.returns_translation,
                });
            }
        }
    }

    index
}

/// Parse a `*.Designer.cs` file into an accessor type. Returns `None` when
/// the file is some other kind of designer output (no resource manager).
fn parse_designer(file: &SourceFile) -> Option<AccessorType> {
    if !file.text.contains("System.Resources.ResourceManager") {
        return None;
    }

    let scanned = scan_tokens(&file.text);
    let tokens = &scanned.tokens;
    let line_index = LineIndex::new(&file.text);

    let mut namespace = String::new();
    let mut name = None;
    let mut members = Vec::new();

    let mut i = 0usize;
    while i < tokens.len() {
        if tokens[i].is_ident(&file.text, "namespace") && namespace.is_empty() {
            if let Some((segments, _, next)) = read_path(tokens, &file.text, i + 1) {
                namespace = segments.join(".");
                i = next;
                continue;
            }
        }
        if tokens[i].is_ident(&file.text, "class")
            && name.is_none()
            && let Some(next) = tokens.get(i + 1)
            && next.kind == TokenKind::Ident
        {
            name = Some(next.ident_text(&file.text).to_string());
            i += 2;
            continue;
        }
        if is_string_property(tokens, &file.text, i) {
            let token = tokens[i + 2];
            let (line, _) = line_index.location(&file.text, token.span.start);
            members.push(AccessorMember {
                name: token.ident_text(&file.text).to_string(),
                line,
                source_line: line_index.line_text(&file.text, line).to_string(),
            });
            i += 4;
            continue;
        }
        i += 1;
    }

    let name = name?;
    let resx_path = sibling_resx(&file.path, &name);

    Some(AccessorType {
        name,
        namespace,
        designer_path: file.path.clone(),
        designer_rel: file.rel_path.clone(),
        resx_path,
        members,
    })
}

/// `static string Name {` — a generated resource property declaration.
fn is_string_property(tokens: &[Token], source: &str, i: usize) -> bool {
    tokens.len() > i + 3
        && tokens[i].is_ident(source, "static")
        && tokens[i + 1].is_ident(source, "string")
        && tokens[i + 2].kind == TokenKind::Ident
        && tokens[i + 3].is_punct('{')
}

/// `Resources.Designer.cs` → sibling `Resources.resx`.
fn sibling_resx(designer_path: &Path, type_name: &str) -> std::path::PathBuf {
    let file_name = designer_path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(".Designer.cs"))
        .unwrap_or(type_name);
    designer_path.with_file_name(format!("{file_name}.resx"))
}

struct WrapperCandidate {
    class_name: String,
    method_name: String,
    returns_translation: bool,
    /// Accessor the declaring class forwards to, when detectable.
    accessor: Option<String>,
}

/// One pass over a file: find wrapper-shaped static methods and which
/// accessor each declaring class references.
fn scan_wrapper_candidates(
    source: &str,
    accessor_names: &HashSet<String>,
) -> Vec<WrapperCandidate> {
    let scanned = scan_tokens(source);
    let tokens = &scanned.tokens;

    // (class name, brace depth at which the class body opened)
    let mut class_stack: Vec<(String, usize)> = Vec::new();
    let mut pending_class: Option<String> = None;
    let mut depth = 0usize;

    // class name → (method name, returns_translation)
    let mut methods: Vec<(String, String, bool)> = Vec::new();
    // class name → accessor it references
    let mut class_accessor: HashMap<String, String> = HashMap::new();

    let mut i = 0usize;
    while i < tokens.len() {
        let token = tokens[i];
        match token.kind {
            TokenKind::Punct('{') => {
                depth += 1;
                if let Some(name) = pending_class.take() {
                    class_stack.push((name, depth));
                }
            }
            TokenKind::Punct('}') => {
                if class_stack.last().is_some_and(|(_, d)| *d == depth) {
                    class_stack.pop();
                }
                depth = depth.saturating_sub(1);
            }
            TokenKind::Ident => {
                let text = token.ident_text(source);
                if text == "class"
                    && let Some(next) = tokens.get(i + 1)
                    && next.kind == TokenKind::Ident
                {
                    pending_class = Some(next.ident_text(source).to_string());
                    i += 2;
                    continue;
                }
                if accessor_names.contains(text)
                    && tokens.get(i + 1).is_some_and(|t| t.is_punct('.'))
                    && tokens
                        .get(i + 2)
                        .is_some_and(|t| t.is_ident(source, "ResourceManager"))
                    && let Some((class, _)) = class_stack.last()
                {
                    class_accessor
                        .entry(class.clone())
                        .or_insert_with(|| text.to_string());
                }
                if text == "static"
                    && let Some(method) = wrapper_method_at(tokens, source, i)
                    && let Some((class, _)) = class_stack.last()
                {
                    methods.push((class.clone(), method.0, method.1));
                }
            }
            _ => {}
        }
        i += 1;
    }

    methods
        .into_iter()
        .map(|(class, method, returns_translation)| WrapperCandidate {
            accessor: class_accessor.get(&class).cloned(),
            class_name: class,
            method_name: method,
            returns_translation,
        })
        .collect()
}

/// `static string Name(string key)` or
/// `static ITranslation Name(string key, Enum opt = default)` at `i`.
/// Returns (method name, returns_translation).
fn wrapper_method_at(tokens: &[Token], source: &str, i: usize) -> Option<(String, bool)> {
    let ret = tokens.get(i + 1)?;
    let name = tokens.get(i + 2)?;
    if ret.kind != TokenKind::Ident || name.kind != TokenKind::Ident {
        return None;
    }
    let returns_translation = match ret.ident_text(source) {
        "string" => false,
        "ITranslation" => true,
        _ => return None,
    };
    if !tokens.get(i + 3)?.is_punct('(') {
        return None;
    }
    if !tokens.get(i + 4)?.is_ident(source, "string") || tokens.get(i + 5)?.kind != TokenKind::Ident
    {
        return None;
    }
    let close = find_matching_paren(tokens, i + 3)?;
    match tokens.get(i + 6) {
        Some(t) if t.is_punct(')') => {}
        Some(t) if t.is_punct(',') => {
            // A second parameter must be optional for call-compatible
            // replacement.
            let has_default = tokens[i + 6..close].iter().any(|t| t.is_punct('='));
            if !has_default {
                return None;
            }
        }
        _ => return None,
    }
    Some((name.ident_text(source).to_string(), returns_translation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::SourceFile;
    use std::path::PathBuf;

    const DESIGNER: &str = r#"
namespace MyApp.Properties {
    using System;

    [global::System.CodeDom.Compiler.GeneratedCodeAttribute("System.Resources.Tools.StronglyTypedResourceBuilder", "15.0.0.0")]
    public class Resources {

        private static global::System.Resources.ResourceManager resourceMan;

        public static global::System.Resources.ResourceManager ResourceManager {
            get {
                return resourceMan;
            }
        }

        public static global::System.Globalization.CultureInfo Culture {
            get {
                return resourceCulture;
            }
        }

        public static string Key {
            get {
                return ResourceManager.GetString("Key", resourceCulture);
            }
        }

        public static string Saved_file__0_ {
            get {
                return ResourceManager.GetString("Saved_file__0_", resourceCulture);
            }
        }
    }
}
"#;

    const WRAPPER: &str = r#"
namespace MyApp.Properties
{
    using Gu.Localization;

    public static class Translate
    {
        public static string Key(string key, ErrorHandling errorHandling = ErrorHandling.ReturnErrorInfoPreserveNeutral)
        {
            return TranslationFor(key, errorHandling).Translated;
        }

        public static ITranslation TranslationFor(string key, ErrorHandling errorHandling = ErrorHandling.ReturnErrorInfoPreserveNeutral)
        {
            return Gu.Localization.Translation.GetOrCreate(Resources.ResourceManager, key, errorHandling);
        }
    }
}
"#;

    fn file(path: &str, text: &str) -> SourceFile {
        SourceFile {
            path: PathBuf::from(path),
            rel_path: path.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn parses_designer_members() {
        let designer = file("Properties/Resources.Designer.cs", DESIGNER);
        let accessor = parse_designer(&designer).unwrap();

        assert_eq!(accessor.name, "Resources");
        assert_eq!(accessor.namespace, "MyApp.Properties");
        let names: Vec<&str> = accessor.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Key", "Saved_file__0_"]);
        assert_eq!(
            accessor.resx_path,
            PathBuf::from("Properties/Resources.resx")
        );
    }

    #[test]
    fn non_resource_designer_is_ignored() {
        let designer = file(
            "Form1.Designer.cs",
            "namespace MyApp { partial class Form1 { } }",
        );
        assert!(parse_designer(&designer).is_none());
    }

    #[test]
    fn collects_wrappers_with_accessor_association() {
        let config = Config::default();
        let files = vec![
            file("Properties/Resources.Designer.cs", DESIGNER),
            file("Properties/Translate.cs", WRAPPER),
        ];
        let index = collect_index(&files, &config);

        assert_eq!(index.accessors.len(), 1);
        assert_eq!(index.wrappers.len(), 2);

        let to_string = index.wrapper_for("Resources", false).unwrap();
        assert_eq!(to_string.display_call(), "Translate.Key");
        let to_translation = index.wrapper_for("Resources", true).unwrap();
        assert_eq!(to_translation.display_call(), "Translate.TranslationFor");
    }

    #[test]
    fn plain_static_string_method_is_not_a_wrapper() {
        let config = Config::default();
        let files = vec![
            file("Properties/Resources.Designer.cs", DESIGNER),
            file(
                "Utils.cs",
                "namespace MyApp { public static class Utils { public static string Upper(string s) { return s.ToUpper(); } } }",
            ),
        ];
        let index = collect_index(&files, &config);
        assert!(index.wrappers.is_empty());
    }
}
