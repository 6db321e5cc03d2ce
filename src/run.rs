// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::discovery::discover_files;
use crate::substitutor::{substitute_with_report, SubstitutionReport};
use crate::table::SymbolTable;
use crate::VarsError;

/// Inputs for one run over a directory tree.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub root: PathBuf,
    /// Extension of definition files, without the dot
    pub definitions_ext: String,
    /// Extension of template files, without the dot
    pub templates_ext: String,
    /// Directory names never entered during discovery
    pub exclude: Vec<String>,
    /// Compute rewrites but leave files untouched
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./"),
            definitions_ext: "tfvars".into(),
            templates_ext: "tf".into(),
            exclude: Vec::new(),
            dry_run: false,
        }
    }
}

/// Outcome for one template file.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateResult {
    pub path: PathBuf,
    pub report: SubstitutionReport,
    /// Output differs from input (written unless dry run)
    pub changed: bool,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub definitions: Vec<PathBuf>,
    pub table: SymbolTable,
    pub templates: Vec<TemplateResult>,
}

impl RunSummary {
    pub fn changed_count(&self) -> usize {
        self.templates.iter().filter(|t| t.changed).count()
    }
}

/// Build the merged table from every definition file under `options.root`.
pub fn load_definitions(options: &RunOptions) -> Result<(Vec<PathBuf>, SymbolTable), VarsError> {
    let definitions = discover_files(&options.root, &options.definitions_ext, &options.exclude)?;
    debug!(count = definitions.len(), "discovered definition files");

    let table = SymbolTable::from_files(&definitions)?;
    Ok((definitions, table))
}

/// Rewrite every template under `options.root` against `table`.
pub fn rewrite_templates(
    options: &RunOptions,
    table: &SymbolTable,
) -> Result<Vec<TemplateResult>, VarsError> {
    let templates = discover_files(&options.root, &options.templates_ext, &options.exclude)?;
    debug!(count = templates.len(), "discovered template files");

    let mut results = Vec::with_capacity(templates.len());
    for path in templates {
        results.push(rewrite_template(path, table, options.dry_run)?);
    }
    Ok(results)
}

fn rewrite_template(path: PathBuf, table: &SymbolTable, dry_run: bool) -> Result<TemplateResult, VarsError> {
    let label = path.to_string_lossy().to_string();

    let content = fs::read_to_string(&path).map_err(|e| VarsError::FileError {
        message: format!("Failed to read template: {}", e),
        path: label.clone(),
        hint: None,
        code: Some(302),
    })?;

    let (rewritten, report) = substitute_with_report(&content, table);
    let changed = rewritten != content;

    if changed && !dry_run {
        fs::write(&path, rewritten).map_err(|e| VarsError::FileError {
            message: format!("Failed to write template: {}", e),
            path: label.clone(),
            hint: Some("Check file permissions".into()),
            code: Some(305),
        })?;
        info!(path = %label, resolved = report.resolved, "rewrote template");
    } else {
        debug!(path = %label, resolved = report.resolved, changed, dry_run, "template processed");
    }

    Ok(TemplateResult { path, report, changed })
}

/// Load definitions, then rewrite templates. Fails fast on the first error.
pub fn run(options: &RunOptions) -> Result<RunSummary, VarsError> {
    let (definitions, table) = load_definitions(options)?;
    let templates = rewrite_templates(options, &table)?;

    Ok(RunSummary {
        definitions,
        table,
        templates,
    })
}
