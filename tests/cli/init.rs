use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn init_creates_default_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .resxlintrc.json"));

    let config = test.read_file(".resxlintrc.json");
    assert!(config.contains("translateMethods"));
    assert!(config.contains("Translator.Translate"));
    Ok(())
}

#[test]
fn init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".resxlintrc.json", "{}")?;

    let output = test.run(&["init"]);
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let out = stdout(&output);
    assert!(out.contains("check"));
    assert!(out.contains("fix"));
    assert!(out.contains("rename"));
    assert!(out.contains("init"));
    Ok(())
}

#[test]
fn no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[]);
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}
