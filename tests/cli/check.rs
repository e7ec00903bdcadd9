use anyhow::Result;

use crate::{CliTest, resx, stdout};

#[test]
fn clean_project_passes() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/Foo.cs",
        r#"
namespace TestApp {
    public class Foo {
        public Foo() {
            var a = Translate.Key(nameof(Resources.Key));
        }
    }
}
"#,
    )?;

    let output = test.run(&["check"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("no issues found"));
    Ok(())
}

#[test]
fn missing_key_is_an_error() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/Foo.cs",
        r#"
namespace TestApp {
    public class Foo {
        public Foo() {
            var a = Translator.Translate(Resources.ResourceManager, "Missing");
        }
    }
}
"#,
    )?;

    let output = test.run(&["check"]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("missing-key"));
    assert!(out.contains("\"Missing\""));
    assert!(out.contains("src/Foo.cs:5:"));
    Ok(())
}

#[test]
fn literal_key_is_a_warning_only() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/Foo.cs",
        r#"
namespace TestApp {
    public class Foo {
        public Foo() {
            var a = Translate.Key("Key");
        }
    }
}
"#,
    )?;

    let output = test.run(&["check"]);
    // Warnings do not fail the build.
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("literal-key"));
    assert!(out.contains("nameof(Resources.Key)"));
    Ok(())
}

#[test]
fn raw_member_access_suggests_wrapper() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/Foo.cs",
        "namespace TestApp { class Foo { string s = Resources.Key; } }",
    )?;

    let output = test.run(&["check"]);
    let out = stdout(&output);
    assert!(out.contains("raw-resource"));
    assert!(out.contains("Translate.Key(nameof(Resources.Key))"));
    Ok(())
}

#[test]
fn generic_call_suggests_wrapper() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/Foo.cs",
        r#"
namespace TestApp {
    class Foo {
        string s = Translator.Translate(Resources.ResourceManager, nameof(Resources.Key));
    }
}
"#,
    )?;

    let output = test.run(&["check"]);
    let out = stdout(&output);
    assert!(out.contains("prefer-wrapper"));
    assert!(out.contains("Translate.Key(nameof(Resources.Key))"));
    Ok(())
}

#[test]
fn dynamic_keys_are_not_diagnosed() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/Foo.cs",
        r#"
namespace TestApp {
    class Foo {
        public string Get(string key) {
            return Translate.Key(key);
        }
    }
}
"#,
    )?;

    let output = test.run(&["check", "missing-key", "literal-key"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("no issues found"));
    Ok(())
}

#[test]
fn duplicate_values_and_stale_names_give_two_plus_two() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "Properties/Resources.Designer.cs",
        r#"
namespace TestApp.Properties {
    public class Resources {
        private static global::System.Resources.ResourceManager resourceMan;

        public static global::System.Resources.ResourceManager ResourceManager {
            get {
                return resourceMan;
            }
        }

        public static string Lorem_ipsum_dolor {
            get {
                return ResourceManager.GetString("Lorem_ipsum_dolor", resourceCulture);
            }
        }

        public static string Sed_do_eiusmod {
            get {
                return ResourceManager.GetString("Sed_do_eiusmod", resourceCulture);
            }
        }
    }
}
"#,
    )?;
    test.write_file(
        "Properties/Resources.resx",
        &resx(&[("Lorem_ipsum_dolor", "Value"), ("Sed_do_eiusmod", "Value")]),
    )?;

    let output = test.run(&["check"]);
    let out = stdout(&output);
    assert_eq!(out.matches("duplicate-value").count(), 2);
    assert_eq!(out.matches("key-convention").count(), 2);
    assert_eq!(out.matches("Resources.Designer.cs").count(), 4);
    assert!(out.contains("4 problems (0 errors, 4 warnings)"));
    Ok(())
}

#[test]
fn culture_orphan_is_reported() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "Properties/Resources.sv.resx",
        &resx(&[("Key", "Nyckel"), ("Stale", "Gammal")]),
    )?;

    let output = test.run(&["check", "culture-orphan"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("culture-orphan"));
    assert!(out.contains("\"Stale\""));
    assert!(out.contains("Resources.sv.resx"));
    Ok(())
}

#[test]
fn rule_filter_limits_output() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/Foo.cs",
        r#"
namespace TestApp {
    class Foo {
        string a = Translate.Key("Missing");
        string b = "abc {1}";
    }
}
"#,
    )?;

    let output = test.run(&["check", "missing-key"]);
    let out = stdout(&output);
    assert!(out.contains("missing-key"));
    assert!(!out.contains("literal-key"));
    assert!(!out.contains("format-literal"));
    Ok(())
}

#[test]
fn disable_comment_suppresses_the_line() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/Foo.cs",
        r#"
namespace TestApp {
    class Foo {
        string a = Translate.Key("Key"); // resxlint-disable-line literal-key
        string b = Translate.Key("Key");
    }
}
"#,
    )?;

    let output = test.run(&["check", "literal-key"]);
    let out = stdout(&output);
    assert_eq!(out.matches("literal-key").count(), 1);
    assert!(out.contains(":5:"));
    Ok(())
}

#[test]
fn format_literal_is_reported() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/Foo.cs",
        "namespace TestApp { class Foo { string s = \"abc {1}\"; } }",
    )?;

    let output = test.run(&["check", "format-literal"]);
    assert!(stdout(&output).contains("format-literal"));
    Ok(())
}

#[test]
fn ignored_directories_are_skipped() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        ".resxlintrc.json",
        r#"{ "ignores": ["**/generated/**", "**/bin/**", "**/obj/**"] }"#,
    )?;
    test.write_file(
        "generated/Bad.cs",
        r#"namespace TestApp { class Bad { string s = Translate.Key("Missing"); } }"#,
    )?;

    let output = test.run(&["check"]);
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}
