use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, DANBOORU_ES, run};

const COMPACT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<TS version="2.0" language="es">
  <context>
    <name>MainWindow</name>
    <message><source>Search</source><translation>Buscar</translation></message>
  </context>
</TS>
"#;

const CANONICAL: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.0" language="es">
<context>
    <name>MainWindow</name>
    <message>
        <source>Search</source>
        <translation>Buscar</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_fmt_already_formatted() -> Result<()> {
    let test = CliTest::with_danbooru()?;

    let output = run(test.fmt_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Checked 1 translation file - already formatted"));
    assert_eq!(test.read_file("translations/danbooru_gui-es.ts")?, DANBOORU_ES);

    Ok(())
}

#[test]
fn test_fmt_dry_run_leaves_file_untouched() -> Result<()> {
    let test = CliTest::with_file("translations/app-es.ts", COMPACT)?;

    let output = run(test.fmt_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("would format"));
    assert!(output.stdout.contains("app-es.ts"));
    assert!(output.stdout.contains("Would reformat 1 file."));
    assert!(output.stdout.contains("Run with --apply"));
    assert_eq!(test.read_file("translations/app-es.ts")?, COMPACT);

    Ok(())
}

#[test]
fn test_fmt_apply_rewrites_file() -> Result<()> {
    let test = CliTest::with_file("translations/app-es.ts", COMPACT)?;

    let output = run(test.fmt_command().arg("--apply"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Reformatted 1 file."));
    assert_eq!(test.read_file("translations/app-es.ts")?, CANONICAL);

    // A second run has nothing left to do
    let output = run(test.fmt_command())?;
    assert!(output.stdout.contains("already formatted"));

    Ok(())
}

#[test]
fn test_fmt_reports_parse_errors() -> Result<()> {
    let test = CliTest::with_file("translations/app-es.ts", CANONICAL)?;
    test.write_file("translations/broken-de.ts", "<resources></resources>")?;

    let output = run(test.fmt_command().arg("--apply"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert_eq!(test.read_file("translations/broken-de.ts")?, "<resources></resources>");

    Ok(())
}
