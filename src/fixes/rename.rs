//! Resource rename propagation.
//!
//! Renaming a key must touch, as one logical operation: the generated
//! member declaration, every reference in program text, the default table's
//! `name` attribute, and every culture variant. The operation is staged —
//! all files are read, parsed and rewritten in memory before the first
//! write — so a malformed table aborts with nothing applied. A missing
//! default table is the one accepted asymmetry: the program-side rename
//! still proceeds and the table side is reported as skipped.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::core::cancel::CancelToken;
use crate::core::context::AnalysisContext;
use crate::core::resources::{ResxDocument, enumerate_culture_variants, find_default_resx};
use crate::core::semantics::AccessorType;
use crate::core::syntax::expr::literal_content;
use crate::core::syntax::lexer::{TokenKind, scan_tokens};
use crate::fixes::edits::{TextEdit, apply_edits};
use crate::utils::is_valid_identifier;

/// A source file rewritten by the rename, staged in memory.
#[derive(Debug)]
pub struct PlannedSourceEdit {
    pub path: PathBuf,
    pub rel_path: String,
    pub new_text: String,
    pub edit_count: usize,
}

/// A fully staged rename, ready to apply.
#[derive(Debug)]
pub struct RenamePlan {
    pub accessor: String,
    pub old: String,
    pub new: String,
    pub sources: Vec<PlannedSourceEdit>,
    /// Default table plus culture variants, already renamed in memory.
    pub tables: Vec<ResxDocument>,
    /// True when no default table exists on disk — the rename then only
    /// touches program text.
    pub table_missing: bool,
    /// Reference edits outside the designer file.
    pub reference_count: usize,
}

/// Stage a rename of `old` to `new` on the named accessor.
///
/// Fails without staging anything when the key is unknown, the new name is
/// invalid or already taken, or any table on disk fails to parse.
pub fn plan_rename(
    ctx: &AnalysisContext,
    accessor_name: &str,
    old: &str,
    new: &str,
    cancel: &CancelToken,
) -> Result<RenamePlan> {
    let accessor = ctx
        .index
        .accessor_named(accessor_name)
        .with_context(|| format!("unknown resource accessor: {accessor_name}"))?;
    if !accessor.has_member(old) {
        bail!("{accessor_name} has no resource key {old}");
    }
    if old == new {
        bail!("old and new key are the same");
    }
    if !is_valid_identifier(new) {
        bail!("{new} is not a valid resource key name");
    }
    if accessor.has_member(new) {
        bail!("{accessor_name} already has a member {new}");
    }

    let mut sources = Vec::new();
    let mut reference_count = 0usize;
    for file in &ctx.files {
        cancel.check()?;
        let is_designer = file.file.path == accessor.designer_path;
        let edits = rename_edits(&file.file.text, accessor, old, new, is_designer);
        if edits.is_empty() {
            continue;
        }
        let (new_text, applied, _) = apply_edits(&file.file.text, &edits);
        if !is_designer {
            reference_count += applied;
        }
        sources.push(PlannedSourceEdit {
            path: file.file.path.clone(),
            rel_path: file.file.rel_path.clone(),
            new_text,
            edit_count: applied,
        });
    }

    let mut tables = Vec::new();
    let mut table_missing = false;
    match find_default_resx(accessor) {
        Some(path) => {
            cancel.check()?;
            let mut default = ResxDocument::load(&path)?;
            default.rename_key(old, new)?;
            tables.push(default);
            for variant in enumerate_culture_variants(&path) {
                cancel.check()?;
                let mut doc = ResxDocument::load(&variant)?;
                // A variant missing the key is fine: culture tables are a
                // subset of the default key universe.
                doc.rename_key(old, new)?;
                tables.push(doc);
            }
        }
        None => table_missing = true,
    }

    Ok(RenamePlan {
        accessor: accessor.name.clone(),
        old: old.to_string(),
        new: new.to_string(),
        sources,
        tables,
        table_missing,
        reference_count,
    })
}

impl RenamePlan {
    /// Write all staged edits. One file at a time, program text first.
    pub fn apply(&self, cancel: &CancelToken) -> Result<()> {
        cancel.check()?;
        for source in &self.sources {
            std::fs::write(&source.path, &source.new_text)
                .with_context(|| format!("Failed to write file: {}", source.path.display()))?;
        }
        for table in &self.tables {
            table.save()?;
        }
        Ok(())
    }

    pub fn file_count(&self) -> usize {
        self.sources.len() + self.tables.len()
    }
}

/// All rename edits for one file: member references everywhere; in the
/// designer also the property declaration and the lookup-key literal.
fn rename_edits(
    source: &str,
    accessor: &AccessorType,
    old: &str,
    new: &str,
    is_designer: bool,
) -> Vec<TextEdit> {
    let scanned = scan_tokens(source);
    let tokens = &scanned.tokens;
    let mut edits = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Ident if token.ident_text(source) == old => {
                let qualified = qualifier_chain(tokens, source, i)
                    .is_some_and(|chain| accessor.matches_qualifier(&chain));
                let declaration = is_designer
                    && i > 0
                    && tokens[i - 1].is_ident(source, "string");
                if qualified || declaration {
                    edits.push(TextEdit {
                        span: token.span,
                        replacement: new.to_string(),
                    });
                }
            }
            TokenKind::Str(_) if is_designer => {
                if literal_content(token, source).as_deref() == Some(old) {
                    edits.push(TextEdit {
                        span: token.span,
                        replacement: format!("\"{new}\""),
                    });
                }
            }
            _ => {}
        }
    }

    edits
}

/// The dotted qualifier chain immediately before token `i`, outermost
/// first: for `MyApp.Properties.Resources.Old` at `Old`, returns
/// `[MyApp, Properties, Resources]`. `None` when the token is not
/// member-accessed.
fn qualifier_chain(
    tokens: &[crate::core::syntax::lexer::Token],
    source: &str,
    i: usize,
) -> Option<Vec<String>> {
    let mut chain = Vec::new();
    let mut j = i;
    while j >= 2 && tokens[j - 1].is_punct('.') && tokens[j - 2].kind == TokenKind::Ident {
        chain.push(tokens[j - 2].ident_text(source).to_string());
        j -= 2;
    }
    if chain.is_empty() {
        return None;
    }
    chain.reverse();
    Some(chain)
}
