//! tfvars-subst CLI
//!
//! Usage:
//!   tfvars-subst [OPTIONS]
//!
//! Merges every `.tfvars` file under the root directory into one table,
//! prints it (YAML by default), then rewrites `var.<name>` placeholders in
//! every `.tf` file in place.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tfvars_subst::discovery::expand_home;
use tfvars_subst::export::export_table;
use tfvars_subst::run::{load_definitions, rewrite_templates};
use tfvars_subst::{ExportFormat, RunOptions, VarsError};

#[derive(Parser)]
#[command(name = "tfvars-subst")]
#[command(about = "Inline tfvars definitions into var.<name> placeholders")]
struct Cli {
    /// Root directory searched for definition and template files
    #[arg(long = "root-dir", visible_alias = "rootDir", default_value = "./")]
    root_dir: String,

    /// Format of the merged table printed to stdout (yaml or json)
    #[arg(short, long, default_value = "yaml")]
    format: ExportFormat,

    /// Extension of definition files
    #[arg(long, default_value = "tfvars")]
    vars_ext: String,

    /// Extension of template files
    #[arg(long, default_value = "tf")]
    template_ext: String,

    /// Directory name to skip during discovery (repeatable)
    #[arg(long, value_name = "DIR")]
    exclude: Vec<String>,

    /// Report what would change without writing templates
    #[arg(long)]
    dry_run: bool,

    /// Do not print the merged table
    #[arg(long)]
    no_export: bool,

    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn execute(cli: &Cli) -> Result<(), VarsError> {
    let options = RunOptions {
        root: expand_home(&cli.root_dir)?,
        definitions_ext: cli.vars_ext.clone(),
        templates_ext: cli.template_ext.clone(),
        exclude: cli.exclude.clone(),
        dry_run: cli.dry_run,
    };

    let (_, table) = load_definitions(&options)?;

    if !cli.no_export {
        let exported = export_table(&table, cli.format)?;
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(exported.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| VarsError::FileError {
                message: format!("Failed to write export: {}", e),
                path: "<stdout>".into(),
                hint: None,
                code: Some(306),
            })?;
    }

    for result in rewrite_templates(&options, &table)? {
        if !result.report.is_clean() {
            warn!(
                path = %result.path.display(),
                unresolved = %result.report.unresolved.join(", "),
                "placeholders left unresolved"
            );
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = execute(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
