//! Project symbol index.
//!
//! The classifier does not talk to a compiler; it consults a `ProjectIndex`
//! built up front from the generated accessor surface and the project's
//! wrapper classes. Tests build the index by hand, which is exactly the
//! "fake symbol table" seam the rules are written against.

pub mod collect;

use std::path::PathBuf;

pub use collect::collect_index;

/// A member of a generated accessor type (one resource key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorMember {
    pub name: String,
    /// 1-based declaration line in the designer file.
    pub line: usize,
    /// Declaration line text, for report excerpts.
    pub source_line: String,
}

/// A generated resource-accessor type parsed from a `*.Designer.cs` file.
///
/// Member names are the authoritative key universe: call-site validation
/// trusts this surface, not the resx file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorType {
    /// Type name, e.g. `Resources`.
    pub name: String,
    /// Declaring namespace, e.g. `MyApp.Properties`. Empty when unknown.
    pub namespace: String,
    pub designer_path: PathBuf,
    /// Root-relative designer path for display in diagnostics.
    pub designer_rel: String,
    /// Expected sibling default-culture table (may not exist on disk).
    pub resx_path: PathBuf,
    pub members: Vec<AccessorMember>,
}

impl AccessorType {
    pub fn has_member(&self, key: &str) -> bool {
        self.members.iter().any(|m| m.name == key)
    }

    pub fn member(&self, key: &str) -> Option<&AccessorMember> {
        self.members.iter().find(|m| m.name == key)
    }

    /// Minimally qualified display name, used in fix payloads.
    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// Whether a dotted qualifier refers to this type: the last segment must
    /// be the type name and any preceding segments must be a suffix of the
    /// namespace (`Resources`, `Properties.Resources`,
    /// `MyApp.Properties.Resources`).
    pub fn matches_qualifier(&self, segments: &[String]) -> bool {
        let Some((last, qualifiers)) = segments.split_last() else {
            return false;
        };
        if last != &self.name {
            return false;
        }
        if qualifiers.is_empty() {
            return true;
        }
        let namespace: Vec<&str> = self.namespace.split('.').filter(|s| !s.is_empty()).collect();
        if qualifiers.len() > namespace.len() {
            return false;
        }
        namespace[namespace.len() - qualifiers.len()..]
            .iter()
            .zip(qualifiers)
            .all(|(a, b)| a == b)
    }
}

/// A project-defined translate wrapper method (`Translate.Key`-style):
/// static, first parameter a string key, optional second parameter, forwards
/// to a resource manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperMethod {
    pub class_name: String,
    pub method_name: String,
    /// Name of the accessor type the wrapper forwards to.
    pub accessor: String,
    /// True when the wrapper returns a translation object rather than a
    /// plain string (`Translation.GetOrCreate` counterpart).
    pub returns_translation: bool,
}

impl WrapperMethod {
    /// Minimally qualified call text, e.g. `Translate.Key`.
    pub fn display_call(&self) -> String {
        format!("{}.{}", self.class_name, self.method_name)
    }
}

/// Symbol index for one project.
#[derive(Debug, Clone, Default)]
pub struct ProjectIndex {
    pub accessors: Vec<AccessorType>,
    pub wrappers: Vec<WrapperMethod>,
    /// Generic translate methods as dotted paths, e.g.
    /// `[["Translator", "Translate"], ["Translation", "GetOrCreate"]]`.
    translate_methods: Vec<Vec<String>>,
}

impl ProjectIndex {
    pub fn new(translate_methods: &[String]) -> Self {
        Self {
            accessors: Vec::new(),
            wrappers: Vec::new(),
            translate_methods: translate_methods
                .iter()
                .map(|m| m.split('.').map(str::to_string).collect())
                .filter(|segments: &Vec<String>| segments.len() >= 2)
                .collect(),
        }
    }

    pub fn add_accessor(&mut self, accessor: AccessorType) {
        self.accessors.push(accessor);
    }

    pub fn add_wrapper(&mut self, wrapper: WrapperMethod) {
        self.wrappers.push(wrapper);
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }

    /// Resolve a full dotted qualifier to an accessor type.
    pub fn resolve_accessor(&self, segments: &[String]) -> Option<&AccessorType> {
        self.accessors
            .iter()
            .find(|a| a.matches_qualifier(segments))
    }

    pub fn accessor_named(&self, name: &str) -> Option<&AccessorType> {
        self.accessors.iter().find(|a| a.name == name)
    }

    /// Resolve the longest leading sub-path of `segments` that names an
    /// accessor type. Returns the accessor and the number of segments
    /// consumed, so `Properties.Resources.Key` yields `(Resources, 2)`.
    pub fn resolve_accessor_prefix(&self, segments: &[String]) -> Option<(&AccessorType, usize)> {
        for take in (1..=segments.len()).rev() {
            if let Some(accessor) = self.resolve_accessor(&segments[..take]) {
                return Some((accessor, take));
            }
        }
        None
    }

    /// Whether a callee path is one of the configured generic translate
    /// methods (suffix match, so fully qualified calls resolve too).
    pub fn is_generic_translate(&self, path: &[String]) -> bool {
        self.translate_methods
            .iter()
            .any(|m| path.len() >= m.len() && path[path.len() - m.len()..] == m[..])
    }

    /// Resolve a callee path to a wrapper method (suffix match on
    /// `Class.Method`).
    pub fn resolve_wrapper(&self, path: &[String]) -> Option<&WrapperMethod> {
        if path.len() < 2 {
            return None;
        }
        let method = &path[path.len() - 1];
        let class = &path[path.len() - 2];
        self.wrappers
            .iter()
            .find(|w| &w.class_name == class && &w.method_name == method)
    }

    /// Find a wrapper for an accessor by return shape — the replacement
    /// suggested by the prefer-wrapper rules.
    pub fn wrapper_for(&self, accessor: &str, returns_translation: bool) -> Option<&WrapperMethod> {
        self.wrappers
            .iter()
            .find(|w| w.accessor == accessor && w.returns_translation == returns_translation)
    }
}
