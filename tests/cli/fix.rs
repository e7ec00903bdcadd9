use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn literal_key_fix_rewrites_to_nameof() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/Foo.cs",
        r#"
namespace TestApp {
    class Foo {
        string a = Translate.Key("Key");
    }
}
"#,
    )?;

    let output = test.run(&["fix", "--rules", "literal-key", "--apply"]);
    assert_eq!(output.status.code(), Some(0));

    let fixed = test.read_file("src/Foo.cs");
    assert!(fixed.contains("Translate.Key(nameof(Resources.Key))"));
    assert!(!fixed.contains("\"Key\""));

    // Re-running the check on the fixed code is clean: the fix converges.
    let recheck = test.run(&["check", "literal-key"]);
    assert!(stdout(&recheck).contains("no issues found"));
    Ok(())
}

#[test]
fn dry_run_leaves_files_alone() -> Result<()> {
    let test = CliTest::with_project()?;
    let source = r#"namespace TestApp { class Foo { string a = Translate.Key("Key"); } }"#;
    test.write_file("src/Foo.cs", source)?;

    let output = test.run(&["fix", "--rules", "literal-key"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Would fix 1 of 1 issue(s)"));
    assert_eq!(test.read_file("src/Foo.cs"), source);
    Ok(())
}

#[test]
fn format_literal_fix_preserves_flavor() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/Foo.cs",
        "namespace TestApp {\n    class Foo {\n        string a = \"abc {1}\";\n        string b = @\"abc {1}\";\n    }\n}\n",
    )?;

    let output = test.run(&["fix", "--rules", "format-literal", "--apply"]);
    assert_eq!(output.status.code(), Some(0));

    let fixed = test.read_file("src/Foo.cs");
    assert!(fixed.contains("string a = $\"abc {1}\";"));
    assert!(fixed.contains("string b = $@\"abc {1}\";"));

    // Interpolated literals are not diagnosed again.
    let recheck = test.run(&["check", "format-literal"]);
    assert!(stdout(&recheck).contains("no issues found"));
    Ok(())
}

#[test]
fn wrapper_fix_rewrites_generic_call() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/Foo.cs",
        r#"
namespace TestApp {
    class Foo {
        string a = Translator.Translate(Resources.ResourceManager, nameof(Resources.Key));
    }
}
"#,
    )?;

    let output = test.run(&["fix", "--rules", "prefer-wrapper", "--apply"]);
    assert_eq!(output.status.code(), Some(0));
    let fixed = test.read_file("src/Foo.cs");
    assert!(fixed.contains("string a = Translate.Key(nameof(Resources.Key));"));
    Ok(())
}

#[test]
fn overlapping_fixes_apply_the_outer_rewrite() -> Result<()> {
    let test = CliTest::with_project()?;
    test.write_file(
        "src/Foo.cs",
        r#"
namespace TestApp {
    class Foo {
        string a = Translator.Translate(Resources.ResourceManager, "Key");
    }
}
"#,
    )?;

    // Both literal-key and prefer-wrapper match; the whole-call rewrite
    // wins and the key rewrite inside it is dropped.
    let output = test.run(&["fix", "--apply"]);
    assert_eq!(output.status.code(), Some(0));
    let fixed = test.read_file("src/Foo.cs");
    assert!(fixed.contains(r#"string a = Translate.Key("Key");"#));

    // A second pass finishes the job.
    let output = test.run(&["fix", "--apply"]);
    assert_eq!(output.status.code(), Some(0));
    let fixed = test.read_file("src/Foo.cs");
    assert!(fixed.contains("string a = Translate.Key(nameof(Resources.Key));"));
    Ok(())
}
