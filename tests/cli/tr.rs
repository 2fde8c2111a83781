use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const NUMERUS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="es">
<context>
    <name>DanbooruGUI</name>
    <message numerus="yes">
        <source>%n selected item(s)</source>
        <translation>
            <numerusform>%n imagen seleccionada</numerusform>
            <numerusform>%n imágenes seleccionadas</numerusform>
        </translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_tr_with_file_and_argument() -> Result<()> {
    let test = CliTest::with_danbooru()?;

    let output = run(test.tr_command().args([
        "--file",
        "translations/danbooru_gui-es.ts",
        "-c",
        "DanbooruGUI",
        "%i selected items",
        "5",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @"5 imágenes seleccionadas");

    Ok(())
}

#[test]
fn test_tr_string_argument() -> Result<()> {
    let test = CliTest::with_danbooru()?;

    let output = run(test.tr_command().args([
        "--file",
        "translations/danbooru_gui-es.ts",
        "-c",
        "DanbooruGUI",
        "Error in term: %s",
        "rating:q",
    ]))?;

    assert_snapshot!(output.stdout.trim_end(), @"Error en termino: rating:q");

    Ok(())
}

#[test]
fn test_tr_empty_translation_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_danbooru()?;

    let output = run(test.tr_command().args([
        "--file",
        "translations/danbooru_gui-es.ts",
        "-c",
        "MainWindow",
        "Danbooru GUI",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "Danbooru GUI\n");

    Ok(())
}

#[test]
fn test_tr_resolves_locale_with_config_name() -> Result<()> {
    let test = CliTest::with_danbooru()?;
    test.write_file(".tsglotrc.json", r#"{ "catalogName": "danbooru_gui" }"#)?;

    let output = run(test.tr_command().args([
        "--locale",
        "es_MX.UTF-8",
        "-c",
        "MainWindow",
        "Search",
    ]))?;

    assert_eq!(output.stdout, "Buscar\n");

    Ok(())
}

#[test]
fn test_tr_locale_from_lang_env() -> Result<()> {
    let test = CliTest::with_danbooru()?;

    let mut cmd = test.tr_command();
    cmd.env("LANG", "es_ES.UTF-8");
    cmd.args(["--name", "danbooru_gui", "-c", "DanbooruGUI", "Width"]);
    let output = run(cmd)?;

    assert_eq!(output.stdout, "Ancho\n");

    Ok(())
}

#[test]
fn test_tr_unknown_locale_uses_source() -> Result<()> {
    let test = CliTest::with_danbooru()?;

    let output = run(test.tr_command().args([
        "--locale",
        "ja_JP",
        "--name",
        "danbooru_gui",
        "-c",
        "DanbooruGUI",
        "Found %i images",
        "12",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout.trim_end(), @"Found 12 images");

    Ok(())
}

#[test]
fn test_tr_plural() -> Result<()> {
    let test = CliTest::with_file("translations/app-es.ts", NUMERUS)?;

    for (count, expected) in [
        ("1", "1 imagen seleccionada\n"),
        ("3", "3 imágenes seleccionadas\n"),
    ] {
        let output = run(test.tr_command().args([
            "--file",
            "translations/app-es.ts",
            "-c",
            "DanbooruGUI",
            "-n",
            count,
            "%n selected item(s)",
        ]))?;
        assert_eq!(output.stdout, expected);
    }

    Ok(())
}

#[test]
fn test_tr_without_source_fails() -> Result<()> {
    let test = CliTest::with_danbooru()?;

    let output = run(test.tr_command().args(["-c", "MainWindow", "Search"]))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("No translation source"));

    Ok(())
}

#[test]
fn test_tr_missing_file_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.tr_command().args([
        "--file",
        "translations/nope-es.ts",
        "-c",
        "MainWindow",
        "Search",
    ]))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error:"));

    Ok(())
}
