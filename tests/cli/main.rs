//! End-to-end CLI tests.
//!
//! Each test builds a throwaway project in a temp directory and drives the
//! compiled binary against it.

use std::fs;
use std::process::{Command, Output};

use anyhow::Result;
use tempfile::TempDir;

mod check;
mod fix;
mod init;
mod rename;

pub const DESIGNER: &str = r#"
namespace TestApp.Properties {
    using System;

    [global::System.CodeDom.Compiler.GeneratedCodeAttribute("System.Resources.Tools.StronglyTypedResourceBuilder", "15.0.0.0")]
    public class Resources {

        private static global::System.Resources.ResourceManager resourceMan;

        private static global::System.Globalization.CultureInfo resourceCulture;

        public static global::System.Resources.ResourceManager ResourceManager {
            get {
                return resourceMan;
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

pub const WRAPPER: &str = r#"
namespace TestApp.Properties
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

pub fn resx(entries: &[(&str, &str)]) -> String {
    let data: String = entries
        .iter()
        .map(|(k, v)| {
            format!("  <data name=\"{k}\" xml:space=\"preserve\">\n    <value>{v}</value>\n  </data>\n")
        })
        .collect();
    format!("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<root>\n{data}</root>\n")
}

pub struct CliTest {
    dir: TempDir,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// A project with one accessor (`Key`, `Saved_file__0_`), a default
    /// table, one culture variant and a wrapper class.
    pub fn with_project() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("Properties/Resources.Designer.cs", DESIGNER)?;
        test.write_file(
            "Properties/Resources.resx",
            &resx(&[("Key", "Key"), ("Saved_file__0_", "Saved file {0}")]),
        )?;
        test.write_file(
            "Properties/Resources.sv.resx",
            &resx(&[("Key", "Värde")]),
        )?;
        test.write_file("Properties/Translate.cs", WRAPPER)?;
        Ok(test)
    }

    pub fn write_file(&self, rel: &str, content: &str) -> Result<()> {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_resxlint"));
        cmd.current_dir(self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("failed to run resxlint")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
