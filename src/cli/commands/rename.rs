use anyhow::{Result, bail};

use super::super::args::RenameCommand;
use super::{CommandSummary, RenameSummary, helper::finish};

use crate::core::cancel::CancelToken;
use crate::core::context::AnalysisContext;
use crate::fixes::plan_rename;

pub fn rename(
    cmd: RenameCommand,
    ctx: &AnalysisContext,
    cancel: &CancelToken,
) -> Result<super::CommandResult> {
    let accessor = match &cmd.resources {
        Some(name) => name.clone(),
        None => match ctx.index.accessors.as_slice() {
            [] => bail!("no resource accessor found in this project"),
            [single] => single.name.clone(),
            many => bail!(
                "several resource accessors found ({}); pass --resources",
                many.iter()
                    .map(|a| a.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        },
    };

    let plan = plan_rename(ctx, &accessor, &cmd.old, &cmd.new, cancel)?;
    if cmd.apply {
        plan.apply(cancel)?;
    }

    let summary = RenameSummary {
        old: plan.old.clone(),
        new: plan.new.clone(),
        reference_count: plan.reference_count,
        table_count: plan.tables.len(),
        table_missing: plan.table_missing,
        file_count: plan.file_count(),
        is_apply: cmd.apply,
    };

    Ok(finish(
        CommandSummary::Rename(summary),
        Vec::new(),
        ctx.file_count(),
        ctx.table_count(),
        false,
    ))
}
