use anyhow::Result;
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{CommandSummary, helper::finish};

use crate::core::cancel::CancelToken;
use crate::core::context::AnalysisContext;
use crate::issues::Issue;
use crate::rules::{
    check_culture_orphans, check_duplicate_values, check_format_literals, check_key_convention,
    check_literal_keys, check_missing_keys, check_prefer_wrapper, check_raw_resource,
    helpers::load_default_tables,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    MissingKey,
    LiteralKey,
    PreferWrapper,
    RawResource,
    DuplicateValue,
    KeyConvention,
    CultureOrphan,
    FormatLiteral,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::MissingKey,
            CheckRule::LiteralKey,
            CheckRule::PreferWrapper,
            CheckRule::RawResource,
            CheckRule::DuplicateValue,
            CheckRule::KeyConvention,
            CheckRule::CultureOrphan,
            CheckRule::FormatLiteral,
        ]
    }

    fn needs_tables(&self) -> bool {
        matches!(self, CheckRule::DuplicateValue | CheckRule::KeyConvention)
    }
}

pub fn check(
    cmd: CheckCommand,
    ctx: &AnalysisContext,
    cancel: &CancelToken,
) -> Result<super::CommandResult> {
    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    // Table rules share one load of the default tables; malformed tables
    // surface as parse errors exactly once.
    let tables = if checks.iter().any(CheckRule::needs_tables) {
        let loaded = load_default_tables(ctx, cancel)?;
        for (_, table) in &loaded {
            if let Err(parse_error) = table {
                all_issues.push(Issue::ParseError(parse_error.clone()));
            }
        }
        loaded
    } else {
        Vec::new()
    };

    for rule in checks {
        cancel.check()?;
        match rule {
            CheckRule::MissingKey => {
                all_issues.extend(check_missing_keys(ctx).into_iter().map(Issue::MissingKey));
            }
            CheckRule::LiteralKey => {
                all_issues.extend(check_literal_keys(ctx).into_iter().map(Issue::LiteralKey));
            }
            CheckRule::PreferWrapper => {
                all_issues.extend(
                    check_prefer_wrapper(ctx)
                        .into_iter()
                        .map(Issue::PreferWrapper),
                );
            }
            CheckRule::RawResource => {
                all_issues.extend(check_raw_resource(ctx).into_iter().map(Issue::RawResource));
            }
            CheckRule::DuplicateValue => {
                for (accessor, table) in &tables {
                    if let Ok(table) = table {
                        all_issues.extend(
                            check_duplicate_values(accessor, table)
                                .into_iter()
                                .map(Issue::DuplicateValue),
                        );
                    }
                }
            }
            CheckRule::KeyConvention => {
                for (accessor, table) in &tables {
                    if let Ok(table) = table {
                        all_issues.extend(
                            check_key_convention(accessor, table)
                                .into_iter()
                                .map(Issue::KeyConvention),
                        );
                    }
                }
            }
            CheckRule::CultureOrphan => {
                let (issues, parse_errors) = check_culture_orphans(ctx);
                all_issues.extend(issues.into_iter().map(Issue::CultureOrphan));
                all_issues.extend(parse_errors.into_iter().map(Issue::ParseError));
            }
            CheckRule::FormatLiteral => {
                all_issues.extend(
                    check_format_literals(ctx)
                        .into_iter()
                        .map(Issue::FormatLiteral),
                );
            }
        }
    }

    all_issues.extend(ctx.parse_errors.iter().cloned().map(Issue::ParseError));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.file_count(),
        ctx.table_count(),
        true,
    ))
}
