//! Default-table and culture-variant discovery.
//!
//! Culture variants share the default table's base name with a culture
//! infix: `Resources.resx` → `Resources.sv.resx`, `Resources.sv-SE.resx`.
//! Enumeration re-reads the directory on every call; the `VariantCache`
//! memoizes within one analysis pass (compute-if-absent, idempotent — two
//! racing computations produce equal lists, so last-write-wins is fine).

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use crate::core::semantics::AccessorType;

/// Locate the default-culture table backing an accessor type, if it exists
/// on disk.
pub fn find_default_resx(accessor: &AccessorType) -> Option<PathBuf> {
    accessor
        .resx_path
        .is_file()
        .then(|| accessor.resx_path.clone())
}

/// List the culture-variant tables next to a default table, sorted.
pub fn enumerate_culture_variants(default_resx: &Path) -> Vec<PathBuf> {
    let Some(dir) = default_resx.parent() else {
        return Vec::new();
    };
    let Some(stem) = default_resx
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(".resx"))
    else {
        return Vec::new();
    };

    let prefix = format!("{stem}.");
    let mut variants: Vec<PathBuf> = fs::read_dir(dir)
        .into_iter()
        .flatten()
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_suffix(".resx"))
                .and_then(|n| n.strip_prefix(&prefix))
                .is_some_and(|culture| !culture.is_empty())
        })
        .collect();
    variants.sort();
    variants
}

/// Per-pass memo for culture-variant enumeration.
#[derive(Debug, Default)]
pub struct VariantCache {
    inner: RwLock<HashMap<PathBuf, Arc<Vec<PathBuf>>>>,
}

impl VariantCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variants(&self, default_resx: &Path) -> Arc<Vec<PathBuf>> {
        if let Some(cached) = self.inner.read().expect("variant cache poisoned").get(default_resx) {
            return Arc::clone(cached);
        }
        let computed = Arc::new(enumerate_culture_variants(default_resx));
        let mut map = self.inner.write().expect("variant cache poisoned");
        Arc::clone(map.entry(default_resx.to_path_buf()).or_insert(computed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::semantics::AccessorType;
    use std::fs::File;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn finds_existing_default_table() {
        let dir = tempfile::tempdir().unwrap();
        let resx = dir.path().join("Resources.resx");
        touch(&resx);

        let accessor = AccessorType {
            name: "Resources".to_string(),
            namespace: String::new(),
            designer_path: dir.path().join("Resources.Designer.cs"),
            designer_rel: "./Resources.Designer.cs".to_string(),
            resx_path: resx.clone(),
            members: Vec::new(),
        };
        assert_eq!(find_default_resx(&accessor), Some(resx));

        let missing = AccessorType {
            resx_path: dir.path().join("Other.resx"),
            ..accessor
        };
        assert_eq!(find_default_resx(&missing), None);
    }

    #[test]
    fn enumerates_culture_variants_only() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("Resources.resx");
        touch(&default);
        touch(&dir.path().join("Resources.sv.resx"));
        touch(&dir.path().join("Resources.sv-SE.resx"));
        touch(&dir.path().join("Other.sv.resx"));
        touch(&dir.path().join("Resources.Designer.cs"));

        let variants = enumerate_culture_variants(&default);
        let names: Vec<&str> = variants
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Resources.sv-SE.resx", "Resources.sv.resx"]);
    }

    #[test]
    fn enumeration_is_restartable() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("Resources.resx");
        touch(&default);
        assert!(enumerate_culture_variants(&default).is_empty());

        touch(&dir.path().join("Resources.de.resx"));
        assert_eq!(enumerate_culture_variants(&default).len(), 1);
    }

    #[test]
    fn cache_memoizes_within_a_pass() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("Resources.resx");
        touch(&default);
        touch(&dir.path().join("Resources.de.resx"));

        let cache = VariantCache::new();
        let first = cache.variants(&default);
        assert_eq!(first.len(), 1);

        // A later file-system change is not observed through the cache.
        touch(&dir.path().join("Resources.fr.resx"));
        let second = cache.variants(&default);
        assert_eq!(second.len(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
