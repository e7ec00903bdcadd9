use anyhow::Result;

use crate::{CliTest, resx, stdout};

fn project_with_references() -> Result<CliTest> {
    let test = CliTest::with_project()?;
    // Second culture variant so the rename touches three tables.
    test.write_file("Properties/Resources.sv-SE.resx", &resx(&[("Key", "Värde")]))?;
    test.write_file(
        "src/Foo.cs",
        r#"
namespace TestApp {
    class Foo {
        string a = Translate.Key(nameof(Resources.Key));
        string b = Translate.Key(nameof(Resources.Key));
        string c = Translator.Translate(Resources.ResourceManager, nameof(Properties.Resources.Key));
    }
}
"#,
    )?;
    Ok(test)
}

#[test]
fn rename_updates_code_and_every_table() -> Result<()> {
    let test = project_with_references()?;

    let output = test.run(&["rename", "Key", "Renamed", "--apply"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Key -> Renamed"));
    assert!(out.contains("3 reference(s)"));
    assert!(out.contains("3 resource table(s)"));

    let foo = test.read_file("src/Foo.cs");
    assert_eq!(foo.matches("Resources.Renamed").count(), 3);
    assert!(!foo.contains("Resources.Key"));

    let designer = test.read_file("Properties/Resources.Designer.cs");
    assert!(designer.contains("public static string Renamed {"));
    assert!(designer.contains("GetString(\"Renamed\""));

    for table in [
        "Properties/Resources.resx",
        "Properties/Resources.sv.resx",
        "Properties/Resources.sv-SE.resx",
    ] {
        let text = test.read_file(table);
        assert!(text.contains("name=\"Renamed\""), "{table} not updated");
        assert!(!text.contains("name=\"Key\""), "{table} still has old key");
    }

    // The renamed project checks clean for the new key.
    let recheck = test.run(&["check", "missing-key"]);
    assert!(stdout(&recheck).contains("no issues found"));
    Ok(())
}

#[test]
fn dry_run_reports_without_writing() -> Result<()> {
    let test = project_with_references()?;

    let output = test.run(&["rename", "Key", "Renamed"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Would rename"));
    assert!(out.contains("--apply"));

    assert!(test.read_file("src/Foo.cs").contains("Resources.Key"));
    assert!(
        test.read_file("Properties/Resources.resx")
            .contains("name=\"Key\"")
    );
    Ok(())
}

#[test]
fn rename_to_existing_member_fails() -> Result<()> {
    let test = project_with_references()?;

    let output = test.run(&["rename", "Key", "Saved_file__0_", "--apply"]);
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn rename_unknown_key_fails() -> Result<()> {
    let test = project_with_references()?;

    let output = test.run(&["rename", "Nope", "New", "--apply"]);
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn missing_default_table_renames_code_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("Properties/Resources.Designer.cs", crate::DESIGNER)?;
    test.write_file(
        "src/Foo.cs",
        "namespace TestApp { class Foo { string a = nameof(Resources.Key); } }",
    )?;

    let output = test.run(&["rename", "Key", "Renamed", "--apply"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("no default resource table found"));
    assert!(test.read_file("src/Foo.cs").contains("Resources.Renamed"));
    Ok(())
}

#[test]
fn malformed_table_aborts_the_rename() -> Result<()> {
    let test = project_with_references()?;
    test.write_file(
        "Properties/Resources.sv.resx",
        "<root><data name=\"Key\"><value>v</data></root>",
    )?;

    let output = test.run(&["rename", "Key", "Renamed", "--apply"]);
    assert_eq!(output.status.code(), Some(2));

    // Nothing was touched.
    assert!(test.read_file("src/Foo.cs").contains("Resources.Key"));
    assert!(
        test.read_file("Properties/Resources.resx")
            .contains("name=\"Key\"")
    );
    Ok(())
}
