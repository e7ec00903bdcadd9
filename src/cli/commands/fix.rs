use anyhow::Result;
use clap::ValueEnum;

use super::super::args::FixCommand;
use super::{CommandSummary, FixSummary, helper::finish};

use crate::core::cancel::CancelToken;
use crate::core::context::AnalysisContext;
use crate::fixes::interpolation::InterpolationFix;
use crate::fixes::symbolic_key::SymbolicKeyFix;
use crate::fixes::wrapper_call::WrapperCallFix;
use crate::fixes::{FileEdit, Fix, execute_edits};
use crate::rules::{
    check_format_literals, check_literal_keys, check_prefer_wrapper, check_raw_resource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FixRule {
    LiteralKey,
    FormatLiteral,
    PreferWrapper,
    RawResource,
}

impl FixRule {
    pub fn all() -> Vec<FixRule> {
        vec![
            FixRule::LiteralKey,
            FixRule::FormatLiteral,
            FixRule::PreferWrapper,
            FixRule::RawResource,
        ]
    }
}

pub fn fix(
    cmd: FixCommand,
    ctx: &AnalysisContext,
    cancel: &CancelToken,
) -> Result<super::CommandResult> {
    let rules = if cmd.rules.is_empty() {
        FixRule::all()
    } else {
        cmd.rules.clone()
    };

    let mut edits: Vec<FileEdit> = Vec::new();
    let mut processed = 0usize;

    for rule in rules {
        cancel.check()?;
        match rule {
            FixRule::LiteralKey => {
                let issues = check_literal_keys(ctx);
                processed += issues.len();
                edits.extend(SymbolicKeyFix::to_edits(&issues));
            }
            FixRule::FormatLiteral => {
                let issues = check_format_literals(ctx);
                processed += issues.len();
                edits.extend(InterpolationFix::to_edits(&issues));
            }
            FixRule::PreferWrapper => {
                let issues = check_prefer_wrapper(ctx);
                processed += issues.len();
                edits.extend(<WrapperCallFix as Fix<_>>::to_edits(&issues));
            }
            FixRule::RawResource => {
                let issues = check_raw_resource(ctx);
                processed += issues.len();
                edits.extend(<WrapperCallFix as Fix<_>>::to_edits(&issues));
            }
        }
    }

    let stats = execute_edits(ctx, edits, processed, cmd.apply, cancel)?;

    Ok(finish(
        CommandSummary::Fix(FixSummary {
            stats,
            is_apply: cmd.apply,
        }),
        Vec::new(),
        ctx.file_count(),
        ctx.table_count(),
        false,
    ))
}
