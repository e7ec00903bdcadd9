//! Project loading and per-file analysis state.
//!
//! `AnalysisContext::load` is the host-adapter entry point: walk the tree,
//! read every C# file, build the symbol index, then scan and classify all
//! files in parallel. Everything downstream (rules, fixes, reporting) works
//! off the loaded context without touching the file system again, except
//! for resource tables.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::{Config, TEST_FILE_PATTERNS};
use crate::core::cancel::CancelToken;
use crate::core::classify::{CallSite, classify};
use crate::core::data::{SourceContext, SourceLocation};
use crate::core::resources::VariantCache;
use crate::core::semantics::{ProjectIndex, collect_index};
use crate::core::syntax::{FileScan, scan_file};
use crate::issues::{ParseErrorIssue, Rule};

/// One project file, read once.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the project root, `./`-prefixed for display.
    pub rel_path: String,
    pub text: String,
}

impl SourceFile {
    pub fn is_designer(&self) -> bool {
        self.rel_path.ends_with(".Designer.cs")
    }

    /// Generated code produces no call-site or literal diagnostics; the
    /// table rules report against it instead.
    pub fn is_generated(&self) -> bool {
        self.is_designer()
            || self.text.contains("<auto-generated")
            || self.text.contains("GeneratedCodeAttribute")
    }
}

/// A source file with its scan results and classified call sites.
#[derive(Debug)]
pub struct AnalyzedFile {
    pub file: SourceFile,
    pub scan: FileScan,
    pub call_sites: Vec<CallSite>,
}

impl AnalyzedFile {
    /// Build a report context for a byte offset in this file.
    pub fn source_context(&self, offset: usize) -> SourceContext {
        let (line, col) = self.scan.line_index.location(&self.file.text, offset);
        SourceContext::new(
            SourceLocation::new(self.file.rel_path.clone(), line, col),
            self.scan.line_index.line_text(&self.file.text, line),
        )
    }

    /// Whether a rule is suppressed on the line containing `offset`.
    pub fn is_suppressed(&self, offset: usize, rule: Rule) -> bool {
        let (line, _) = self.scan.line_index.location(&self.file.text, offset);
        self.scan.suppressions.is_suppressed(line, rule.as_str())
    }
}

/// Loaded project state shared by all rules.
pub struct AnalysisContext {
    pub root: PathBuf,
    pub config: Config,
    pub files: Vec<AnalyzedFile>,
    pub index: ProjectIndex,
    pub parse_errors: Vec<ParseErrorIssue>,
    pub variants: VariantCache,
}

impl AnalysisContext {
    pub fn load(root: &Path, config: Config, cancel: &CancelToken) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Invalid project root: {}", root.display()))?;
        let source_root = root.join(config.source_root.trim_start_matches("./"));

        let filter = FileFilter::new(&config)?;
        let mut sources = Vec::new();
        let mut parse_errors = Vec::new();

        for entry in WalkDir::new(&source_root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            cancel.check()?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("cs")
            {
                continue;
            }
            let rel = path
                .strip_prefix(&source_root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");
            if !filter.keep(&rel) {
                continue;
            }
            match fs::read_to_string(path) {
                Ok(text) => sources.push(SourceFile {
                    path: path.to_path_buf(),
                    rel_path: format!("./{rel}"),
                    text,
                }),
                Err(err) => parse_errors.push(ParseErrorIssue {
                    file_path: format!("./{rel}"),
                    error: err.to_string(),
                }),
            }
        }

        cancel.check()?;
        let index = collect_index(&sources, &config);

        cancel.check()?;
        let files: Vec<AnalyzedFile> = sources
            .into_par_iter()
            .map(|file| {
                if cancel.is_cancelled() || file.is_generated() {
                    return AnalyzedFile {
                        scan: scan_file(""),
                        call_sites: Vec::new(),
                        file,
                    };
                }
                let scan = scan_file(&file.text);
                let call_sites = scan
                    .candidates
                    .iter()
                    .filter_map(|c| classify(c, &index, &file.text))
                    .collect();
                AnalyzedFile {
                    file,
                    scan,
                    call_sites,
                }
            })
            .collect();
        cancel.check()?;

        Ok(Self {
            root,
            config,
            files,
            index,
            parse_errors,
            variants: VariantCache::new(),
        })
    }

    /// Number of source files loaded.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of resource tables behind the indexed accessors that exist on
    /// disk.
    pub fn table_count(&self) -> usize {
        self.index
            .accessors
            .iter()
            .filter(|a| a.resx_path.is_file())
            .count()
    }
}

struct FileFilter {
    ignores: Vec<Pattern>,
    includes: Vec<String>,
    include_globs: Vec<Pattern>,
    test_patterns: Vec<Pattern>,
}

impl FileFilter {
    fn new(config: &Config) -> Result<Self> {
        let ignores = config
            .ignores
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()
            .context("invalid ignore pattern")?;
        let mut includes = Vec::new();
        let mut include_globs = Vec::new();
        for pattern in &config.includes {
            if pattern.contains('*') || pattern.contains('?') {
                include_globs.push(Pattern::new(pattern).context("invalid include pattern")?);
            } else {
                includes.push(pattern.trim_end_matches('/').to_string());
            }
        }
        let test_patterns = if config.ignore_test_files {
            TEST_FILE_PATTERNS
                .iter()
                .map(|p| Pattern::new(p).expect("builtin test pattern"))
                .collect()
        } else {
            Vec::new()
        };
        Ok(Self {
            ignores,
            includes,
            include_globs,
            test_patterns,
        })
    }

    fn keep(&self, rel: &str) -> bool {
        if self.ignores.iter().any(|p| p.matches(rel)) {
            return false;
        }
        if self.test_patterns.iter().any(|p| p.matches(rel)) {
            return false;
        }
        if self.includes.is_empty() && self.include_globs.is_empty() {
            return true;
        }
        self.includes
            .iter()
            .any(|dir| rel == dir || rel.starts_with(&format!("{dir}/")))
            || self.include_globs.iter().any(|p| p.matches(rel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(root: &Path, rel: &str, text: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn loads_files_and_skips_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "src/Foo.cs", "class Foo { }");
        write(dir.path(), "bin/Gen.cs", "class Gen { }");
        write(dir.path(), "src/FooTests.cs", "class FooTests { }");
        write(dir.path(), "notes.txt", "not code");

        let ctx =
            AnalysisContext::load(dir.path(), Config::default(), &CancelToken::new()).unwrap();
        let paths: Vec<&str> = ctx.files.iter().map(|f| f.file.rel_path.as_str()).collect();
        assert_eq!(paths, vec!["./src/Foo.cs"]);
    }

    #[test]
    fn includes_restrict_the_walk() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "src/Foo.cs", "class Foo { }");
        write(dir.path(), "tools/Bar.cs", "class Bar { }");

        let config = Config {
            includes: vec!["src".to_string()],
            ..Default::default()
        };
        let ctx = AnalysisContext::load(dir.path(), config, &CancelToken::new()).unwrap();
        assert_eq!(ctx.file_count(), 1);
        assert_eq!(ctx.files[0].file.rel_path, "./src/Foo.cs");
    }

    #[test]
    fn generated_files_produce_no_call_sites() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "Properties/Resources.Designer.cs",
            r#"
namespace MyApp.Properties {
    public class Resources {
        private static global::System.Resources.ResourceManager resourceMan;
        public static string Key {
            get {
                return ResourceManager.GetString("Key", resourceCulture);
            }
        }
    }
}
"#,
        );

        let ctx =
            AnalysisContext::load(dir.path(), Config::default(), &CancelToken::new()).unwrap();
        assert_eq!(ctx.file_count(), 1);
        assert!(ctx.files[0].call_sites.is_empty());
        assert_eq!(ctx.index.accessors.len(), 1);
    }

    #[test]
    fn cancelled_load_bails() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "src/Foo.cs", "class Foo { }");
        let cancel = CancelToken::new();
        cancel.cancel();
        assert!(AnalysisContext::load(dir.path(), Config::default(), &cancel).is_err());
    }
}
