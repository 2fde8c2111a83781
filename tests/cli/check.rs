use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const BROKEN_PLACEHOLDER: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="es">
<context>
    <name>DanbooruGUI</name>
    <message>
        <location filename="danbooru_gui.py" line="147"/>
        <source>%i selected items</source>
        <translation>imágenes seleccionadas</translation>
    </message>
</context>
</TS>
"#;

const DUPLICATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="es">
<context>
    <name>MainWindow</name>
    <message>
        <source>Search</source>
        <translation>Buscar</translation>
    </message>
    <message>
        <source>Search</source>
        <translation>Búsqueda</translation>
    </message>
</context>
</TS>
"#;

const CLEAN: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="es">
<context>
    <name>MainWindow</name>
    <message>
        <location filename="ui/danbooru.ui" line="44"/>
        <source>Search</source>
        <translation>Buscar</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_danbooru_fixture_reports_warnings_only() -> Result<()> {
    let test = CliTest::with_danbooru()?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("warning: \"Danbooru GUI\"  untranslated"));
    assert!(output.stdout.contains("warning: \"ID\"  identical"));
    assert!(output.stdout.contains("whitespace"));
    assert!(output.stdout.contains("danbooru_gui-es.ts:"));
    assert!(output.stdout.contains("4 problems (0 errors, 4 warnings)"));

    Ok(())
}

#[test]
fn test_placeholder_mismatch_fails() -> Result<()> {
    let test = CliTest::with_file("translations/app-es.ts", BROKEN_PLACEHOLDER)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("error: \"%i selected items\"  placeholder-mismatch")
    );
    assert!(output.stdout.contains("app-es.ts:6:"));
    assert!(output.stdout.contains("expected %i, found none"));

    Ok(())
}

#[test]
fn test_duplicate_message() -> Result<()> {
    let test = CliTest::with_file("translations/app-es.ts", DUPLICATE)?;

    let output = run(test.check_command().arg("duplicate-message"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("duplicate-message"));
    assert!(output.stdout.contains("[MainWindow] first defined at line 6"));
    assert!(output.stdout.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_rule_selection() -> Result<()> {
    let test = CliTest::with_danbooru()?;

    let output = run(test.check_command().arg("untranslated"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("untranslated"));
    assert!(!output.stdout.contains("identical"));
    assert!(output.stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file("translations/app-es.ts", CLEAN)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "✓ Checked 1 translation file - no issues found\n"
    );
    assert!(!output.stderr.contains("Finished"));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("translations/app-es.ts", CLEAN)?;
    test.write_file("translations/broken-de.ts", "<resources></resources>")?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("broken-de.ts"));
    assert!(output.stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_file("translations/app-es.ts", CLEAN)?;
    test.write_file(
        ".tsglotrc.json",
        r#"{
  "ignores": ["**/generated/**"]
}"#,
    )?;
    test.write_file("translations/generated/app-de.ts", BROKEN_PLACEHOLDER)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 translation file"));

    Ok(())
}

#[test]
fn test_ignore_texts_from_config() -> Result<()> {
    let test = CliTest::with_danbooru()?;
    test.write_file(".tsglotrc.json", r#"{ "ignoreTexts": ["ID"] }"#)?;

    let output = run(test.check_command().arg("identical"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_config_found_from_subdirectory() -> Result<()> {
    let test = CliTest::with_danbooru()?;
    test.write_file(".tsglotrc.json", r#"{ "ignoreTexts": ["ID"] }"#)?;

    let output = run(test
        .check_command()
        .current_dir(test.root().join("translations"))
        .args(["identical", "--translations-root", "."]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_translations_root_flag() -> Result<()> {
    let test = CliTest::with_file("i18n/app-es.ts", BROKEN_PLACEHOLDER)?;

    let output = run(test.check_command().args(["--translations-root", "i18n"]))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("placeholder-mismatch"));

    Ok(())
}

#[test]
fn test_missing_translations_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("does not exist"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("--help"))?;

    assert_eq!(output.code, Some(0));
    for command in ["check", "fmt", "tr", "init", "serve"] {
        assert!(output.stdout.contains(command), "missing {command}");
    }

    Ok(())
}
