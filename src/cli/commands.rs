use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use crate::config::GeneratorOptions;
use crate::generator::{export_builtin, generate_project, GenerationReport, TemplateRegistry};
use crate::logging::{init_logging, LogConfig};
use crate::spec::{load_raw_spec, Enricher, DEFAULT_SPEC_FILE};

/// Command-line interface for scaffolder
///
/// Reads a project declaration and generates the CRUD application it
/// describes.
#[derive(Debug, Parser)]
#[command(name = "scaffolder", version)]
#[command(about = "Generate a CRUD web application from a resource declaration", long_about = None)]
pub struct Cli {
    /// Declaration file (JSON, YAML or TOML, by extension)
    #[arg(default_value = DEFAULT_SPEC_FILE)]
    pub spec: PathBuf,

    /// Debug logging, including dumps of the declaration before and after enrichment
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Overwrite every generated file, hand-edited views and stylesheet included
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Read templates from this directory instead of the built-in set
    #[arg(long = "templatedir", env = "SCAFFOLDER_TEMPLATE_DIR")]
    pub template_dir: Option<PathBuf>,

    /// Generate into <WORKSPACE>/src/<sourceBase>
    #[arg(long, env = "SCAFFOLDER_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Generate into this directory (takes precedence over --workspace)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the built-in templates into this directory and exit
    #[arg(long, value_name = "DIR")]
    pub export_templates: Option<PathBuf>,
}

impl Cli {
    pub fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            spec_path: self.spec.clone(),
            verbose: self.verbose,
            force: self.overwrite,
            template_dir: self.template_dir.clone(),
            workspace: self.workspace.clone(),
            output: self.output.clone(),
            export_templates: self.export_templates.clone(),
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunSummary {
    Exported(Vec<PathBuf>),
    Generated {
        project_dir: PathBuf,
        report: GenerationReport,
    },
}

/// Execute one run described by `options`.
pub fn run(options: &GeneratorOptions) -> anyhow::Result<RunSummary> {
    if let Some(dir) = &options.export_templates {
        let written = export_builtin(dir)
            .with_context(|| format!("failed to export templates to {}", dir.display()))?;
        info!(dir = %dir.display(), templates = written.len(), "exported built-in templates");
        return Ok(RunSummary::Exported(written));
    }

    let raw = load_raw_spec(&options.spec_path)?;
    if options.verbose {
        debug!(
            declaration = %serde_json::to_string_pretty(&raw)?,
            "declaration before enrichment"
        );
    }
    let spec = Enricher::new().enrich(&raw)?;
    if options.verbose {
        debug!(
            model = %serde_json::to_string_pretty(&spec)?,
            "declaration after enrichment"
        );
    }

    let registry = TemplateRegistry::build(options.template_source())?;
    let generate = options.generate_options(&spec)?;
    info!(
        project = %spec.name,
        resources = spec.resources.len(),
        dir = %generate.project_dir.display(),
        "generating project"
    );
    let report = generate_project(&spec, &registry, &generate)?;
    info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        "done"
    );
    Ok(RunSummary::Generated {
        project_dir: generate.project_dir,
        report,
    })
}

/// Set up logging for `cli` and run it.
///
/// A logging setup failure is reported on stderr and the run goes ahead
/// without a subscriber.
pub fn run_cli(cli: &Cli) -> anyhow::Result<RunSummary> {
    if let Err(e) = init_logging(&LogConfig::from_env(cli.verbose)) {
        eprintln!("{e}");
    }
    run(&cli.options())
}
