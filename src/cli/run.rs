//! Command dispatch.

use std::{fs, path::Path, path::PathBuf};

use anyhow::Result;

use super::{
    args::{Arguments, Command, CommonArgs},
    commands::{CommandResult, CommandSummary, InitSummary, check::check, fix::fix, rename::rename},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json, load_config};
use crate::core::cancel::CancelToken;
use crate::core::context::AnalysisContext;

pub fn run(Arguments { command }: Arguments, cancel: &CancelToken) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => {
            let ctx = load_context(&cmd.common, cancel)?;
            check(cmd, &ctx, cancel)
        }
        Some(Command::Fix(cmd)) => {
            let ctx = load_context(&cmd.common, cancel)?;
            fix(cmd, &ctx, cancel)
        }
        Some(Command::Rename(cmd)) => {
            let ctx = load_context(&cmd.common, cancel)?;
            rename(cmd, &ctx, cancel)
        }
        Some(Command::Init) => {
            init()?;
            Ok(CommandResult {
                summary: CommandSummary::Init(InitSummary { created: true }),
                error_count: 0,
                exit_on_errors: true,
                issues: Vec::new(),
                parse_error_count: 0,
                source_files_checked: 0,
                table_files_checked: 0,
            })
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn load_context(common: &CommonArgs, cancel: &CancelToken) -> Result<AnalysisContext> {
    let root = common
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let loaded = load_config(&root)?;
    AnalysisContext::load(&root, loaded.config, cancel)
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
