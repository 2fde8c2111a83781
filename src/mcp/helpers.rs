//! Helper functions for MCP server operations.
//!
//! Everything here is synchronous. `CheckContext` caches parsed files in a
//! `OnceCell`, so it is built and dropped inside one call and never held
//! across an await point.

use std::{
    collections::{BTreeMap, HashSet},
    path::Path,
};

use anyhow::{Result, bail};

use crate::{
    cli::args::CommonArgs,
    config::load_config,
    core::{
        CheckContext, TranslationKind,
        catalog::translate_or_source,
        context::translations_root,
        loader::{load_catalog_file, resolve},
        placeholder::Arg,
    },
    issues::{Issue, Report, Rule, Severity},
    rules::run_checks,
};

use super::types::{
    IssueItem, IssueScanResult, Pagination, ParseErrorItem, RuleStats, ScanOverviewResult,
    TranslateParams, TranslateResult, TranslationFileInfo, TranslationFilesResult,
};

pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;

/// All issues for the project plus the number of files that were scanned.
pub fn scan_project(project_root: &Path) -> Result<(Vec<Issue>, usize)> {
    let ctx = CheckContext::new(project_root, &CommonArgs::default())?;
    let issues = run_checks(&ctx, &[]);
    Ok((issues, ctx.files.len()))
}

pub fn overview(issues: &[Issue], files_checked: usize) -> ScanOverviewResult {
    let mut per_rule: BTreeMap<Rule, (Severity, usize)> = BTreeMap::new();
    for issue in issues {
        per_rule.entry(issue.rule()).or_insert((issue.severity(), 0)).1 += 1;
    }

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    ScanOverviewResult {
        files_checked,
        total_count: issues.len(),
        error_count,
        warning_count: issues.len() - error_count,
        rules: per_rule
            .into_iter()
            .map(|(rule, (severity, count))| RuleStats {
                rule: rule.to_string(),
                severity: severity.to_string(),
                count,
            })
            .collect(),
    }
}

pub fn issue_item(issue: &Issue) -> IssueItem {
    let location = issue.location();
    IssueItem {
        rule: issue.report_rule().to_string(),
        severity: issue.report_severity().to_string(),
        file_path: location.file_path().to_string(),
        line: location.line(),
        col: location.col(),
        message: issue.message(),
        details: issue.details(),
        hint: issue.hint(),
    }
}

/// Filter by rule name (if any) and cut one page out of the result.
pub fn paginate_issues(
    issues: Vec<Issue>,
    rule: Option<&str>,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Result<IssueScanResult> {
    let limit = limit.map(|v| v as usize).unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let offset = offset.map(|v| v as usize).unwrap_or(0);

    let filter = match rule {
        Some(name) => match Rule::from_name(name) {
            Some(rule) => Some(rule),
            None => bail!(
                "Unknown rule '{}'. Expected one of: {}",
                name,
                Rule::all()
                    .iter()
                    .map(|r| r.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        },
        None => None,
    };

    let matching: Vec<Issue> = issues
        .into_iter()
        .filter(|issue| filter.is_none_or(|rule| issue.rule() == rule))
        .collect();

    let total_count = matching.len();
    let total_file_count = matching
        .iter()
        .map(|issue| issue.location().file_path().to_string())
        .collect::<HashSet<_>>()
        .len();

    let items: Vec<IssueItem> = matching
        .iter()
        .skip(offset)
        .take(limit)
        .map(issue_item)
        .collect();
    let has_more = offset + items.len() < total_count;

    Ok(IssueScanResult {
        total_count,
        total_file_count,
        items,
        pagination: Pagination {
            offset,
            limit,
            has_more,
        },
    })
}

pub fn list_translation_files(project_root: &Path) -> Result<TranslationFilesResult> {
    let ctx = CheckContext::new(project_root, &CommonArgs::default())?;

    let files = ctx
        .translation_files()
        .iter()
        .map(|file| TranslationFileInfo {
            file_path: file.file_path.clone(),
            language: file.language.clone(),
            source_language: file.source_language.clone(),
            context_count: file.contexts.len(),
            message_count: file.message_count(),
            finished_count: file
                .messages()
                .filter(|(_, m)| {
                    m.translation.kind == TranslationKind::Finished && !m.translation.is_empty()
                })
                .count(),
        })
        .collect();

    let parse_errors = ctx
        .parse_errors()
        .iter()
        .map(|e| ParseErrorItem {
            file_path: e.file_path.clone(),
            error: e.error.clone(),
        })
        .collect();

    Ok(TranslationFilesResult {
        translations_root: ctx.translations_root.display().to_string(),
        source_language: ctx.config.source_language.clone(),
        files,
        parse_errors,
    })
}

pub fn translate(params: &TranslateParams) -> Result<TranslateResult> {
    let project_root = Path::new(&params.project_root_path);
    let config = load_config(project_root)?.config;
    let options = config.load_options();

    let catalog_path = match (&params.file, &params.locale) {
        (Some(file), _) => {
            let path = project_root.join(file);
            if !path.is_file() {
                bail!("Translation file '{}' does not exist", path.display());
            }
            Some(path)
        }
        (None, Some(locale)) => {
            let Some(name) = params.name.as_ref().or(config.catalog_name.as_ref()) else {
                bail!("No catalog name: pass 'name' or set 'catalogName' in the config file");
            };
            resolve(name, locale, &[translations_root(project_root, &config)])
        }
        (None, None) => bail!("Pass either 'file' or 'locale'"),
    };

    let catalog = catalog_path
        .as_deref()
        .map(|path| load_catalog_file(path, &options))
        .transpose()?;

    let args: Vec<Arg> = params
        .args
        .iter()
        .flatten()
        .map(|a| Arg::parse_lossy(a))
        .collect();
    let (text, translated) = translate_or_source(
        catalog.as_ref(),
        &params.context,
        &params.source,
        params.count,
        &args,
    );

    Ok(TranslateResult {
        text,
        translated,
        catalog_path: catalog_path.map(|p| p.display().to_string()),
    })
}
